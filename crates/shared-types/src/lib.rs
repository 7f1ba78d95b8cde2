pub mod config;
pub mod error;
pub mod portal;
pub mod requests;
pub mod session;

pub use config::*;
pub use error::*;
pub use portal::*;
pub use requests::*;
pub use session::*;

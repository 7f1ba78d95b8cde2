pub mod api;
pub mod config;
pub mod controller;
pub mod timer;

pub use api::{HttpLoginBackend, LoginBackend};
pub use controller::{go_back, submit_login, SessionHandle};

use shared_types::{AppConfig, ClientConfig, DEFAULT_REDIRECT_DELAY_MS};
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

pub const BACKEND_URL_VAR: &str = "PORTAL_BACKEND_URL";
pub const REDIRECT_DELAY_VAR: &str = "PORTAL_REDIRECT_DELAY_MS";

/// Merge an optional `config.toml` body with environment overrides.
/// An unparseable file falls back to defaults before overrides apply.
pub fn resolve_config(
    file_contents: Option<&str>,
    backend_url: Option<&str>,
    redirect_delay_ms: Option<&str>,
) -> ClientConfig {
    let base = match file_contents {
        Some(contents) => match AppConfig::from_toml(contents) {
            Ok(config) => config.client,
            Err(e) => {
                tracing::warn!("[config] Failed to parse {CONFIG_PATH}: {e}; using defaults");
                ClientConfig::default()
            }
        },
        None => ClientConfig::default(),
    };
    base.with_overrides(backend_url, redirect_delay_ms)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> ClientConfig {
    let _ = dotenvy::dotenv();

    let contents = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::debug!("[config] {CONFIG_PATH} not read ({e}); using defaults");
            None
        }
    };
    let backend_url = std::env::var(BACKEND_URL_VAR).ok();
    let delay = std::env::var(REDIRECT_DELAY_VAR).ok();

    resolve_config(contents.as_deref(), backend_url.as_deref(), delay.as_deref())
}

/// Browsers have no process environment; the variables are baked in at
/// build time instead.
#[cfg(target_arch = "wasm32")]
fn read_config() -> ClientConfig {
    resolve_config(
        None,
        option_env!("PORTAL_BACKEND_URL"),
        option_env!("PORTAL_REDIRECT_DELAY_MS"),
    )
}

/// Load the client config once and store it process-wide. Safe to call
/// multiple times; only the first call reads anything.
pub fn load_client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        match config.base_url() {
            Some(url) => tracing::info!("[config] Backend URL: {url}"),
            None => tracing::warn!(
                "[config] {BACKEND_URL_VAR} is not set; login attempts will fail"
            ),
        }
        config
    })
}

/// Get the loaded config. Returns defaults if `load_client_config()` hasn't
/// been called yet.
pub fn client_config() -> &'static ClientConfig {
    static DEFAULT: ClientConfig = ClientConfig {
        backend_url: None,
        redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
    };
    CONFIG.get().unwrap_or(&DEFAULT)
}

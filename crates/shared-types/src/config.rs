use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay between a successful login and the switch to the dashboard.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;

fn default_redirect_delay_ms() -> u64 {
    DEFAULT_REDIRECT_DELAY_MS
}

/// Client settings. Every field has a default so that a missing or partial
/// `config.toml` is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/api/login/...` suffix.
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl ClientConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// The configured base URL with trailing slashes removed. Blank values
    /// count as unset.
    pub fn base_url(&self) -> Option<&str> {
        self.backend_url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
    }

    /// Apply a raw `PORTAL_BACKEND_URL` / `PORTAL_REDIRECT_DELAY_MS` pair on
    /// top of this config. Unparseable delays are ignored.
    pub fn with_overrides(mut self, backend_url: Option<&str>, redirect_delay_ms: Option<&str>) -> Self {
        if let Some(url) = backend_url {
            self.backend_url = Some(url.to_string());
        }
        if let Some(ms) = redirect_delay_ms.and_then(|v| v.trim().parse().ok()) {
            self.redirect_delay_ms = ms;
        }
        self
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

use shared_types::{ClientConfig, LoginCredentials, LoginError, LoginResponse, PortalId};

/// Something that can check portal credentials.
///
/// `Ok` means the backend answered with `success: true`. Every other outcome
/// is a [`LoginError`] whose kind records why.
#[allow(async_fn_in_trait)]
pub trait LoginBackend {
    async fn login(
        &self,
        portal: PortalId,
        credentials: &LoginCredentials,
    ) -> Result<LoginResponse, LoginError>;
}

/// Build `{base}/api/login/{portal}`. Fails when no base URL is configured.
pub fn login_url(base_url: Option<&str>, portal: PortalId) -> Result<String, LoginError> {
    let base = base_url
        .map(|u| u.trim_end_matches('/'))
        .filter(|u| !u.is_empty())
        .ok_or_else(|| LoginError::transport("backend URL is not configured"))?;
    Ok(format!("{base}/api/login/{}", portal.as_str()))
}

/// Login backend speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLoginBackend {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl HttpLoginBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.base_url().map(str::to_string),
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

impl LoginBackend for HttpLoginBackend {
    async fn login(
        &self,
        portal: PortalId,
        credentials: &LoginCredentials,
    ) -> Result<LoginResponse, LoginError> {
        let url = login_url(self.base_url(), portal)?;
        tracing::debug!(%portal, %url, "posting login request");

        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| LoginError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoginError::status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoginError::transport(e.to_string()))?;

        LoginResponse::from_slice(&body)?.into_outcome()
    }
}

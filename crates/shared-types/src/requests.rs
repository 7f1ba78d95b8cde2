use crate::error::LoginError;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/login/{portal}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

/// Response body from the login endpoint. Only `success` drives behavior;
/// `message` and `role` are kept for logging. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl LoginResponse {
    /// Parse a response body. A missing or non-boolean `success` field is a
    /// protocol failure.
    pub fn from_slice(body: &[u8]) -> Result<Self, LoginError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Convert into the login outcome: `Ok` only when `success` is true.
    pub fn into_outcome(self) -> Result<LoginResponse, LoginError> {
        if self.success {
            Ok(self)
        } else {
            let message = self
                .message
                .unwrap_or_else(|| "login rejected".to_string());
            Err(LoginError::rejected(message))
        }
    }
}

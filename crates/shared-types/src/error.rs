use serde::{Deserialize, Serialize};
use std::fmt;

/// The one message shown for any failed login attempt.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Please try again.";

/// Categorization of login failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoginErrorKind {
    /// The request never produced a response: unreachable host, DNS,
    /// connection reset, or no backend URL configured.
    Transport,
    /// A response arrived but was unusable: non-2xx status, invalid JSON,
    /// or no boolean `success` field.
    Protocol,
    /// Well-formed response with `success = false`.
    Rejected,
}

impl fmt::Display for LoginErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginErrorKind::Transport => write!(f, "Transport"),
            LoginErrorKind::Protocol => write!(f, "Protocol"),
            LoginErrorKind::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Structured login error. Every kind is recovered by the login controller
/// and surfaces to the user as the same inline message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginError {
    pub kind: LoginErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl LoginError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: LoginErrorKind::Transport,
            message: message.into(),
            status: None,
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self {
            kind: LoginErrorKind::Protocol,
            message: message.into(),
            status: None,
        }
    }

    /// Protocol failure caused by a non-2xx HTTP status.
    pub fn status(status: u16) -> Self {
        Self {
            kind: LoginErrorKind::Protocol,
            message: format!("unexpected HTTP status {status}"),
            status: Some(status),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: LoginErrorKind::Rejected,
            message: message.into(),
            status: None,
        }
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for LoginError {}

impl From<serde_json::Error> for LoginError {
    fn from(err: serde_json::Error) -> Self {
        LoginError::protocol(format!("malformed login response: {err}"))
    }
}

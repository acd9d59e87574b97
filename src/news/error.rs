//! Content provider error types

use thiserror::Error;

/// Provider error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Network, message)
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Http, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Auth, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Malformed, message)
    }

    pub fn credentials(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Credentials, message)
    }
}

/// Error classification, used for logging; every kind degrades the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Connection failures, timeouts
    Network,
    /// Non-success status other than auth
    Http,
    /// Key rejected (401, 403)
    Auth,
    /// Body did not parse or reported a non-OK status
    Malformed,
    /// No API key could be loaded
    Credentials,
}

impl ProviderErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Http => "http",
            Self::Auth => "auth",
            Self::Malformed => "malformed",
            Self::Credentials => "credentials",
        }
    }
}

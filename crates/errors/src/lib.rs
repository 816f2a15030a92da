#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for the pokerep client
//!
//! This crate provides fine-grained error types organized by domain.
//! All error types implement Clone for easier handling across the
//! orchestration boundary.

use std::borrow::Cow;

use thiserror::Error;

pub mod catalog;
pub mod config;
pub mod network;
pub mod report;

// Re-export all error types at the root
pub use catalog::CatalogError;
pub use config::ConfigError;
pub use network::NetworkError;
pub use report::ReportError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an internal error with a message
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Network(NetworkError::InvalidJson(err.to_string()))
    }
}

/// Result type alias for pokerep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Minimal interface for rendering user-facing error information without
/// requiring heavyweight envelopes.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// Whether retrying the same operation is likely to succeed.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Stable error code for analytics / structured reporting.
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::Network(err) => err.user_message(),
            Error::Catalog(err) => err.user_message(),
            Error::Report(err) => err.user_message(),
            _ => Cow::Owned(self.to_string()),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Network(err) => err.user_hint(),
            Error::Catalog(err) => err.user_hint(),
            Error::Report(err) => err.user_hint(),
            Error::Config(_) => Some("Check your pokerep configuration file."),
            Error::Internal(_) => None,
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Error::Network(err) => err.is_retryable(),
            Error::Catalog(err) => err.is_retryable(),
            _ => false,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Error::Network(err) => err.user_code(),
            Error::Catalog(err) => err.user_code(),
            Error::Report(err) => err.user_code(),
            Error::Config(err) => err.user_code(),
            Error::Internal(_) => Some("error.internal"),
        }
    }
}

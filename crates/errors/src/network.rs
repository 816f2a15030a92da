//! Network-related error types

use std::borrow::Cow;

use thiserror::Error;

use crate::UserFacingError;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NetworkError {
    #[error("connection timeout to {url}")]
    Timeout { url: String },

    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error {status}: {message}")]
    HttpError { status: u16, message: String },

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("invalid JSON in response: {0}")]
    InvalidJson(String),

    #[error("download failed: {0}")]
    DownloadFailed(String),
}

impl UserFacingError for NetworkError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::Timeout { .. } | Self::ConnectionRefused(_) => {
                Some("Check that the report backend is reachable.")
            }
            Self::InvalidUrl(_) => Some("Check the configured base URL."),
            _ => None,
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::ConnectionRefused(_) | Self::RequestFailed(_) => true,
            Self::HttpError { status, .. } => *status >= 500,
            _ => false,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::Timeout { .. } => "net.timeout",
            Self::ConnectionRefused(_) => "net.connection_refused",
            Self::InvalidUrl(_) => "net.invalid_url",
            Self::HttpError { .. } => "net.http_error",
            Self::RequestFailed(_) => "net.request_failed",
            Self::InvalidJson(_) => "net.invalid_json",
            Self::DownloadFailed(_) => "net.download_failed",
        })
    }
}

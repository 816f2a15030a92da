//! Configuration error types

use thiserror::Error;

use crate::UserFacingError;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("failed to parse config: {message}")]
    ParseFailed { message: String },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Owned(self.to_string())
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::ReadFailed { .. } => "config.read_failed",
            Self::ParseFailed { .. } => "config.parse_failed",
            Self::InvalidValue { .. } => "config.invalid_value",
        })
    }
}

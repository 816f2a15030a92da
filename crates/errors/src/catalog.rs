//! Category catalog error types

use std::borrow::Cow;

use thiserror::Error;

use crate::UserFacingError;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("failed to fetch category catalog: {message}")]
    FetchFailed { message: String },

    #[error("category catalog is empty")]
    Empty,

    #[error("category catalog has not been loaded")]
    NotLoaded,
}

impl UserFacingError for CatalogError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::FetchFailed { .. } => Some("Try again later; the catalog service may be down."),
            Self::Empty | Self::NotLoaded => {
                Some("Reload the catalog before creating a report.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::FetchFailed { .. } => "catalog.fetch_failed",
            Self::Empty => "catalog.empty",
            Self::NotLoaded => "catalog.not_loaded",
        })
    }
}

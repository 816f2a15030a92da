//! Report lifecycle error types

use std::borrow::Cow;

use thiserror::Error;

use crate::UserFacingError;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportError {
    #[error("no category selected")]
    CategoryRequired,

    #[error("unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("invalid quantity {input:?}: expected an integer >= 1")]
    InvalidQuantity { input: String },

    #[error("a report creation is already in progress")]
    CreateInFlight,

    #[error("missing report id")]
    MissingReportId,

    #[error("report not found: {id}")]
    NotFound { id: String },
}

impl UserFacingError for ReportError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::CategoryRequired | Self::UnknownCategory { .. } => {
                Some("Pick one of the categories listed by `pokerep types`.")
            }
            Self::InvalidQuantity { .. } => Some("Quantity must be a whole number of at least 1."),
            Self::CreateInFlight => Some("Wait for the current creation to finish."),
            Self::MissingReportId | Self::NotFound { .. } => {
                Some("Run `pokerep list` to see valid report ids.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::CategoryRequired => "report.category_required",
            Self::UnknownCategory { .. } => "report.unknown_category",
            Self::InvalidQuantity { .. } => "report.invalid_quantity",
            Self::CreateInFlight => "report.create_in_flight",
            Self::MissingReportId => "report.missing_id",
            Self::NotFound { .. } => "report.not_found",
        })
    }
}

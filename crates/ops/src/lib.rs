#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Report lifecycle orchestration for pokerep
//!
//! This crate coordinates creation, refresh, download, and delete
//! operations against the report store and the transport layer, enforcing
//! single-flight creation and the consistency rules of the store. The CLI
//! talks to this crate only; it never reaches the transport directly.

mod catalog;
mod context;
mod create;
mod delete;
mod download;
mod refresh;

pub use catalog::load_catalog;
pub use context::{OpsContextBuilder, OpsCtx};
pub use create::create_report;
pub use delete::delete_report;
pub use download::download_report;
pub use refresh::refresh;

use pokerep_errors::Error;
use pokerep_types::{DeleteOutcome, Report};

/// Operation result that can be serialized for CLI output
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OperationResult {
    /// Category catalog contents
    CategoryList(Vec<String>),
    /// Current report list
    ReportList(Vec<Report>),
    /// Newly created report, confirmed visible after refresh
    Created(Report),
    /// Classified delete outcome
    Deleted(DeleteOutcome),
    /// Artifact reference handed to the environment
    Artifact { url: String },
    /// Generic success message
    Success(String),
}

impl OperationResult {
    /// Convert to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::internal(format!("serialization failed: {e}")))
    }

    /// Check if this is a success result
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            OperationResult::Deleted(outcome) => outcome.is_success(),
            _ => true,
        }
    }
}

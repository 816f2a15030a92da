use serde::{Deserialize, Serialize};

use super::FailureContext;

/// Report lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReportEvent {
    /// List refresh started
    RefreshStarted,

    /// List refresh completed; the store now holds `total` reports
    RefreshCompleted { total: usize },

    /// List refresh failed; the store is unchanged
    RefreshFailed { failure: FailureContext },

    /// Creation request dispatched
    CreateStarted { category: String, quantity: u32 },

    /// Creation confirmed: the report is visible in the refreshed list
    CreateCompleted { id: String, category: String },

    /// Creation failed before or during dispatch
    CreateFailed { failure: FailureContext },

    /// Delete request dispatched
    DeleteStarted { id: String },

    /// Report and its blob confirmed deleted
    Deleted { id: String },

    /// Report deleted but blob cleanup failed on the backend
    BlobDeletionFailed { id: String, message: String },

    /// Delete response did not carry the expected shape
    DeleteResponseMalformed { id: String },

    /// Delete request itself failed; no refresh was performed
    DeleteFailed { id: String, failure: FailureContext },

    /// Artifact retrieval handed off to the environment
    DownloadRequested { url: String },
}

use serde::{Deserialize, Serialize};

use super::FailureContext;

/// Category catalog events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CatalogEvent {
    /// Catalog fetch has started
    Started { url: String },

    /// Catalog loaded successfully
    Loaded { count: usize },

    /// Catalog fetch failed; creation stays disabled
    Failed { failure: FailureContext },
}

//! Report record and wire-format types

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque backend-assigned report identifier
///
/// The backend encodes ids as either JSON strings or numbers depending on
/// the endpoint; both deserialize to the same client-side value. The
/// client never constructs an id of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReportId(String);

impl ReportId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReportId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ReportId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(i64),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Self(n.to_string()),
            Raw::Str(s) => Self(s),
        })
    }
}

/// A completed report as served by the backend
///
/// The backend returns only finished reports; there is no pending state on
/// the client side. Wire field names follow the backend (`pokemon_type`,
/// `pokemon_qty`, `url`), with the generic spellings accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Backend-assigned identifier
    pub id: ReportId,
    /// Category the report was generated for
    #[serde(rename = "pokemon_type", alias = "category")]
    pub category: String,
    /// Requested quantity
    #[serde(rename = "pokemon_qty", alias = "quantity", default)]
    pub quantity: u32,
    /// Reference to the downloadable artifact
    #[serde(rename = "url", alias = "artifact_url", alias = "csv_url", default)]
    pub artifact_url: String,
}

/// Creation request payload, exactly as the backend expects it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub pokemon_type: String,
    pub pokemon_qty: u32,
}

/// Nested blob-deletion sub-result inside a delete response entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobDeletion {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// One per-target entry of the backend's delete response
///
/// The response is a sequence of these; only `blob_deletion` is inspected,
/// any other fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponseEntry {
    #[serde(default)]
    pub blob_deletion: Option<BlobDeletion>,
}

/// Classified outcome of a delete round-trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// Report row and stored blob both removed
    Deleted { id: ReportId },
    /// Report removed but blob cleanup failed on the backend
    PartialFailure { id: ReportId, message: String },
    /// Response did not carry the expected `blob_deletion` shape
    MalformedResponse { id: ReportId },
}

impl DeleteOutcome {
    /// Classify a delete response from its per-target entries.
    ///
    /// Only the first entry's `blob_deletion` sub-result is inspected; an
    /// empty response or a missing sub-result is malformed.
    #[must_use]
    pub fn classify(id: ReportId, entries: &[DeleteResponseEntry]) -> Self {
        match entries.first().and_then(|e| e.blob_deletion.as_ref()) {
            Some(blob) if blob.success => Self::Deleted { id },
            Some(blob) => Self::PartialFailure {
                id,
                message: blob.message.clone(),
            },
            None => Self::MalformedResponse { id },
        }
    }

    /// True only for a fully confirmed deletion.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }

    /// The report id the outcome refers to.
    #[must_use]
    pub fn id(&self) -> &ReportId {
        match self {
            Self::Deleted { id } | Self::PartialFailure { id, .. } | Self::MalformedResponse { id } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_id_from_number_and_string() {
        let from_num: ReportId = serde_json::from_str("42").unwrap();
        let from_str: ReportId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_num, from_str);
        assert_eq!(from_num.as_str(), "42");
    }

    #[test]
    fn report_deserializes_backend_field_names() {
        let report: Report = serde_json::from_str(
            r#"{"id": 7, "pokemon_type": "fire", "pokemon_qty": 3, "url": "https://blobs/7.csv"}"#,
        )
        .unwrap();
        assert_eq!(report.id, ReportId::from("7"));
        assert_eq!(report.category, "fire");
        assert_eq!(report.quantity, 3);
        assert_eq!(report.artifact_url, "https://blobs/7.csv");
    }

    #[test]
    fn report_accepts_generic_aliases() {
        let report: Report = serde_json::from_str(
            r#"{"id": "a1", "category": "water", "quantity": 5, "artifact_url": "x"}"#,
        )
        .unwrap();
        assert_eq!(report.category, "water");
        assert_eq!(report.quantity, 5);
    }

    #[test]
    fn classify_successful_blob_deletion() {
        let entries: Vec<DeleteResponseEntry> =
            serde_json::from_str(r#"[{"blob_deletion": {"success": true, "message": "ok"}}]"#)
                .unwrap();
        let outcome = DeleteOutcome::classify(ReportId::from("9"), &entries);
        assert!(outcome.is_success());
        assert_eq!(outcome, DeleteOutcome::Deleted { id: "9".into() });
    }

    #[test]
    fn classify_failed_blob_deletion() {
        let entries: Vec<DeleteResponseEntry> =
            serde_json::from_str(r#"[{"blob_deletion": {"success": false, "message": "X"}}]"#)
                .unwrap();
        let outcome = DeleteOutcome::classify(ReportId::from("9"), &entries);
        assert_eq!(
            outcome,
            DeleteOutcome::PartialFailure {
                id: "9".into(),
                message: "X".into()
            }
        );
        assert!(!outcome.is_success());
    }

    #[test]
    fn classify_malformed_responses() {
        let empty: Vec<DeleteResponseEntry> = serde_json::from_str("[]").unwrap();
        assert_eq!(
            DeleteOutcome::classify(ReportId::from("9"), &empty),
            DeleteOutcome::MalformedResponse { id: "9".into() }
        );

        let missing: Vec<DeleteResponseEntry> =
            serde_json::from_str(r#"[{"something_else": 1}]"#).unwrap();
        assert_eq!(
            DeleteOutcome::classify(ReportId::from("9"), &missing),
            DeleteOutcome::MalformedResponse { id: "9".into() }
        );
    }

    #[test]
    fn request_serializes_backend_field_names() {
        let req = ReportRequest {
            pokemon_type: "fire".into(),
            pokemon_qty: 3,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["pokemon_type"], "fire");
        assert_eq!(json["pokemon_qty"], 3);
    }
}

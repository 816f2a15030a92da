//! Report deletion

use crate::{refresh, OpsCtx};
use pokerep_errors::{Error, ReportError};
use pokerep_events::{AppEvent, EventEmitter, FailureContext, ReportEvent};
use pokerep_types::{DeleteOutcome, DeleteResponseEntry, ReportId};

/// Delete a report and its stored blob.
///
/// A blank id is rejected without a network call. The backend responds
/// with a sequence of per-target outcomes; the first entry's
/// `blob_deletion` sub-result classifies the overall outcome (deleted,
/// partial failure, or malformed response). In all three classified cases
/// a full refresh follows so the list reflects the backend's
/// authoritative state. Only a transport-level failure skips the refresh.
///
/// # Errors
///
/// Returns a validation error for a blank id, the transport error when the
/// request itself fails, or the refresh error when reconciliation fails.
pub async fn delete_report(ctx: &OpsCtx, id: &str) -> Result<DeleteOutcome, Error> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ReportError::MissingReportId.into());
    }
    let report_id = ReportId::from(id);

    ctx.emit(AppEvent::Report(ReportEvent::DeleteStarted {
        id: id.to_string(),
    }));

    let url = ctx.config.api_url(&format!("/api/report/{id}"));
    let value = match ctx.net.delete_json(&url).await {
        Ok(value) => value,
        Err(e) => {
            ctx.emit(AppEvent::Report(ReportEvent::DeleteFailed {
                id: id.to_string(),
                failure: FailureContext::from_error(&e),
            }));
            return Err(e);
        }
    };

    // tolerate unexpected shapes; classification turns them into
    // MalformedResponse rather than a hard error
    let entries: Vec<DeleteResponseEntry> = serde_json::from_value(value).unwrap_or_default();
    let outcome = DeleteOutcome::classify(report_id, &entries);

    match &outcome {
        DeleteOutcome::Deleted { id } => {
            ctx.emit(AppEvent::Report(ReportEvent::Deleted { id: id.to_string() }));
        }
        DeleteOutcome::PartialFailure { id, message } => {
            ctx.emit(AppEvent::Report(ReportEvent::BlobDeletionFailed {
                id: id.to_string(),
                message: message.clone(),
            }));
        }
        DeleteOutcome::MalformedResponse { id } => {
            ctx.emit(AppEvent::Report(ReportEvent::DeleteResponseMalformed {
                id: id.to_string(),
            }));
        }
    }

    // regardless of the sub-outcome, resync with the backend's view
    refresh(ctx).await?;

    Ok(outcome)
}

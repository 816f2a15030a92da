//! Report list refresh

use crate::OpsCtx;
use pokerep_errors::Error;
use pokerep_events::{AppEvent, EventEmitter, FailureContext, ReportEvent};
use pokerep_net::unwrap_collection;
use pokerep_types::Report;

/// Fetch the current report list and fully replace the store.
///
/// No merging and no diffing: stale local entries absent from the fetch
/// are dropped. When refreshes race, the last one to complete wins the
/// store. On failure the store is left intact and the error is returned,
/// so callers awaiting the refresh (post-create and post-delete
/// reconciliation) observe it.
///
/// # Errors
///
/// Returns the transport error when the list fetch fails.
pub async fn refresh(ctx: &OpsCtx) -> Result<Vec<Report>, Error> {
    ctx.emit(AppEvent::Report(ReportEvent::RefreshStarted));

    let url = ctx.config.api_url("/api/request");
    let value = match ctx.net.get_json(&url).await {
        Ok(value) => value,
        Err(e) => {
            ctx.emit(AppEvent::Report(ReportEvent::RefreshFailed {
                failure: FailureContext::from_error(&e),
            }));
            return Err(e);
        }
    };

    let mut reports = Vec::new();
    for entry in unwrap_collection(value) {
        match serde_json::from_value::<Report>(entry) {
            Ok(report) => reports.push(report),
            // one undecodable row must not wedge the whole list
            Err(e) => ctx.emit_warning(format!("skipping undecodable report entry: {e}")),
        }
    }

    ctx.store.replace(reports.clone());
    ctx.emit(AppEvent::Report(ReportEvent::RefreshCompleted {
        total: reports.len(),
    }));
    Ok(reports)
}

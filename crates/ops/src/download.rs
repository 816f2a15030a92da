//! Artifact download hand-off

use crate::OpsCtx;
use pokerep_events::{AppEvent, EventEmitter, ReportEvent};

/// Hand an artifact reference to the hosting environment.
///
/// No validation and no state change; the orchestrator only records the
/// intent and returns the URL unchanged. Retrieval itself (opening a
/// browser, streaming to a file) belongs to the presentation layer.
#[must_use]
pub fn download_report(ctx: &OpsCtx, artifact_url: &str) -> String {
    ctx.emit(AppEvent::Report(ReportEvent::DownloadRequested {
        url: artifact_url.to_string(),
    }));
    artifact_url.to_string()
}

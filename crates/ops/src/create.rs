//! Report creation

use crate::{refresh, OpsCtx};
use pokerep_errors::{CatalogError, Error, ReportError};
use pokerep_events::{AppEvent, EventEmitter, FailureContext, ReportEvent};
use pokerep_types::{parse_quantity, Report, ReportRequest};

/// Create a report for `category` with the operator-typed quantity.
///
/// Validation happens before any network call: the category must be
/// non-empty and a member of the loaded catalog, and the quantity string
/// must parse to an integer of at least 1.
///
/// Single-flight per session: while a creation is in progress a second
/// intent fails fast with `ReportError::CreateInFlight`, so one rapid
/// interaction cannot generate duplicate reports. The busy flag is
/// released on every exit path.
///
/// Success is only reported after a full refresh: "created" means the
/// report is visible in the now-current list. A refresh failure after a
/// successful dispatch is therefore surfaced as this operation's failure.
///
/// # Errors
///
/// Returns a validation, transport, or refresh error as described above.
pub async fn create_report(
    ctx: &OpsCtx,
    category: &str,
    quantity_raw: &str,
) -> Result<Report, Error> {
    let result = dispatch(ctx, category, quantity_raw).await;
    if let Err(e) = &result {
        ctx.emit(AppEvent::Report(ReportEvent::CreateFailed {
            failure: FailureContext::from_error(e),
        }));
    }
    result
}

async fn dispatch(ctx: &OpsCtx, category: &str, quantity_raw: &str) -> Result<Report, Error> {
    if category.is_empty() {
        return Err(ReportError::CategoryRequired.into());
    }
    if !ctx.catalog.is_loaded() {
        return Err(CatalogError::NotLoaded.into());
    }
    if !ctx.catalog.contains(category) {
        return Err(ReportError::UnknownCategory {
            category: category.to_string(),
        }
        .into());
    }
    let quantity = parse_quantity(quantity_raw)?;

    let Some(_guard) = ctx.begin_create() else {
        return Err(ReportError::CreateInFlight.into());
    };

    ctx.emit(AppEvent::Report(ReportEvent::CreateStarted {
        category: category.to_string(),
        quantity,
    }));

    let request = ReportRequest {
        pokemon_type: category.to_string(),
        pokemon_qty: quantity,
    };
    let url = ctx.config.api_url("/api/request");
    let echoed = ctx.net.post_json(&url, &request).await?;

    // the backend echoes the created report
    let report: Report = serde_json::from_value(echoed)?;

    // the new report only counts as created once it shows up in the list
    refresh(ctx).await?;

    ctx.emit(AppEvent::Report(ReportEvent::CreateCompleted {
        id: report.id.to_string(),
        category: report.category.clone(),
    }));
    Ok(report)
}

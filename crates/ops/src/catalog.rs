//! Category catalog loading

use crate::OpsCtx;
use pokerep_errors::Error;
use pokerep_events::{AppEvent, CatalogEvent, EventEmitter, FailureContext};

/// Load the category catalog, once at session start.
///
/// While the catalog is empty or loading, creation requests are refused by
/// `create_report`. A failure here leaves the catalog empty and is
/// surfaced as a persistent error by the presentation layer.
///
/// # Errors
///
/// Returns `CatalogError` when the fetch fails or yields no categories.
pub async fn load_catalog(ctx: &OpsCtx) -> Result<Vec<String>, Error> {
    let url = ctx.config.backend.catalog_url.clone();
    ctx.emit(AppEvent::Catalog(CatalogEvent::Started { url: url.clone() }));

    match ctx.catalog.load(&ctx.net, &url).await {
        Ok(categories) => {
            ctx.emit(AppEvent::Catalog(CatalogEvent::Loaded {
                count: categories.len(),
            }));
            Ok(categories)
        }
        Err(e) => {
            ctx.emit(AppEvent::Catalog(CatalogEvent::Failed {
                failure: FailureContext::from_error(&e),
            }));
            Err(e)
        }
    }
}

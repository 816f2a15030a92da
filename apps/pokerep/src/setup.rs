//! Session setup and component initialization

use crate::error::CliError;
use pokerep_catalog::CatalogManager;
use pokerep_config::Config;
use pokerep_events::EventSender;
use pokerep_net::{NetClient, NetConfig};
use pokerep_ops::{OpsContextBuilder, OpsCtx};
use pokerep_store::ReportStore;
use tracing::debug;

/// Build the session context from configuration
///
/// The context owns all mutable session state (catalog, store, in-flight
/// flags) and is torn down when the command finishes.
pub fn build_context(config: Config, tx: EventSender) -> Result<OpsCtx, CliError> {
    config.validate()?;
    debug!(
        base_url = %config.backend.base_url,
        catalog_url = %config.backend.catalog_url,
        "initializing session"
    );

    let net = NetClient::new(NetConfig::from(&config.network))?;

    OpsContextBuilder::new()
        .with_net(net)
        .with_catalog(CatalogManager::new())
        .with_store(ReportStore::new())
        .with_event_sender(tx)
        .with_config(config)
        .build()
        .map_err(Into::into)
}

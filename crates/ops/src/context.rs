//! Operations context for dependency injection

use pokerep_catalog::CatalogManager;
use pokerep_config::Config;
use pokerep_errors::Error;
use pokerep_events::{EventEmitter, EventSender};
use pokerep_net::NetClient;
use pokerep_store::ReportStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Operations context providing access to all session components
///
/// Holds the entire mutable session state explicitly - catalog, store, and
/// the create in-flight flag - so nothing relies on ambient globals.
/// Cheaply cloneable; all clones share the same session state.
#[derive(Clone)]
pub struct OpsCtx {
    /// Network client
    pub net: NetClient,
    /// Category catalog
    pub catalog: CatalogManager,
    /// Report store
    pub store: ReportStore,
    /// Event sender for progress reporting
    pub tx: EventSender,
    /// Session configuration
    pub config: Config,
    /// Single-flight flag for report creation
    creating: Arc<AtomicBool>,
}

impl OpsCtx {
    // No public constructor - use OpsContextBuilder instead

    /// Whether a creation is currently in flight.
    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.creating.load(Ordering::SeqCst)
    }

    /// Acquire the create busy flag.
    ///
    /// Returns a guard that releases the flag on drop, so every exit path
    /// of the creation task clears it. `None` when a creation is already
    /// in flight.
    pub(crate) fn begin_create(&self) -> Option<CreateGuard> {
        if self
            .creating
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Some(CreateGuard {
                flag: Arc::clone(&self.creating),
            })
        } else {
            None
        }
    }

    /// Tear down the session: empty the store.
    pub fn teardown(&self) {
        self.store.clear();
    }
}

impl EventEmitter for OpsCtx {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(&self.tx)
    }
}

/// RAII release of the create busy flag
pub(crate) struct CreateGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for CreateGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Builder for operations context
#[derive(Default)]
pub struct OpsContextBuilder {
    net: Option<NetClient>,
    catalog: Option<CatalogManager>,
    store: Option<ReportStore>,
    tx: Option<EventSender>,
    config: Option<Config>,
}

impl OpsContextBuilder {
    /// Create new context builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set network client
    #[must_use]
    pub fn with_net(mut self, net: NetClient) -> Self {
        self.net = Some(net);
        self
    }

    /// Set category catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: CatalogManager) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set report store
    #[must_use]
    pub fn with_store(mut self, store: ReportStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Set event sender
    #[must_use]
    pub fn with_event_sender(mut self, tx: EventSender) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Set configuration
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the context
    ///
    /// # Errors
    ///
    /// Returns an error if any required component is missing.
    pub fn build(self) -> Result<OpsCtx, Error> {
        let net = self
            .net
            .ok_or_else(|| Error::internal("missing component: net"))?;
        let catalog = self
            .catalog
            .ok_or_else(|| Error::internal("missing component: catalog"))?;
        let store = self
            .store
            .ok_or_else(|| Error::internal("missing component: store"))?;
        let tx = self
            .tx
            .ok_or_else(|| Error::internal("missing component: event_sender"))?;
        let config = self
            .config
            .ok_or_else(|| Error::internal("missing component: config"))?;

        Ok(OpsCtx {
            net,
            catalog,
            store,
            tx,
            config,
            creating: Arc::new(AtomicBool::new(false)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ctx() -> OpsCtx {
        let (tx, _rx) = pokerep_events::channel();
        OpsContextBuilder::new()
            .with_net(NetClient::with_defaults().unwrap())
            .with_catalog(CatalogManager::new())
            .with_store(ReportStore::new())
            .with_event_sender(tx)
            .with_config(Config::default())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn builder_requires_all_components() {
        let (tx, _rx) = pokerep_events::channel();
        let result = OpsContextBuilder::new().with_event_sender(tx).build();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn create_guard_is_exclusive_and_releases_on_drop() {
        let ctx = test_ctx();
        assert!(!ctx.is_creating());

        let guard = ctx.begin_create().unwrap();
        assert!(ctx.is_creating());
        // a second intent is refused while the first is held
        assert!(ctx.begin_create().is_none());

        drop(guard);
        assert!(!ctx.is_creating());
        assert!(ctx.begin_create().is_some());
    }

    #[tokio::test]
    async fn clones_share_the_busy_flag() {
        let ctx = test_ctx();
        let clone = ctx.clone();
        let _guard = ctx.begin_create().unwrap();
        assert!(clone.is_creating());
        assert!(clone.begin_create().is_none());
    }
}

#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! In-memory report store for pokerep
//!
//! Ordered collection of report records in backend fetch order. Every
//! refresh fully replaces the contents; the store never merges or sorts.
//! The swap is atomic under the store lock, so concurrent refreshes
//! resolve by last-write-wins.

use pokerep_types::{Report, ReportId};
use std::sync::{Arc, Mutex};

/// Session-scoped report store
///
/// Cheaply cloneable handle; all clones share the same contents. Only the
/// orchestrator writes; the presentation layer reads snapshots.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    inner: Arc<Mutex<Vec<Report>>>,
}

impl ReportStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full contents with a fresh fetch.
    ///
    /// Entries absent from `reports` are dropped from the local view.
    pub fn replace(&self, reports: Vec<Report>) {
        *self.inner.lock().expect("store lock poisoned") = reports;
    }

    /// Clone the current contents, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Report> {
        self.inner.lock().expect("store lock poisoned").clone()
    }

    /// Look up a report by id.
    #[must_use]
    pub fn get(&self, id: &ReportId) -> Option<Report> {
        self.inner
            .lock()
            .expect("store lock poisoned")
            .iter()
            .find(|r| &r.id == id)
            .cloned()
    }

    #[must_use]
    pub fn contains_id(&self, id: &ReportId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().expect("store lock poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty the store on session teardown.
    pub fn clear(&self) {
        self.inner.lock().expect("store lock poisoned").clear();
    }
}

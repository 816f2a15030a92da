#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Category catalog for pokerep
//!
//! This crate loads the fixed set of valid category values used to
//! parameterize report creation. The catalog is fetched once per session
//! and treated as read-only afterwards; while it is empty or unloaded,
//! creation requests are disallowed.

use pokerep_errors::{CatalogError, Error};
use pokerep_net::{unwrap_collection, NetClient};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct CatalogState {
    categories: Vec<String>,
    loaded: bool,
}

/// Session-scoped category catalog
///
/// Cheaply cloneable handle; all clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct CatalogManager {
    inner: Arc<Mutex<CatalogState>>,
}

impl CatalogManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog and store the category names.
    ///
    /// Entries may be bare strings or objects carrying a `name` field (the
    /// shape the public type listing serves inside its `results`
    /// envelope). Entries matching neither shape are skipped with a log.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::FetchFailed` if the fetch fails and
    /// `CatalogError::Empty` if the response yields no usable names. In
    /// both cases the catalog stays empty and unloaded.
    pub async fn load(&self, net: &NetClient, url: &str) -> Result<Vec<String>, Error> {
        let value = net
            .get_json(url)
            .await
            .map_err(|e| CatalogError::FetchFailed {
                message: e.to_string(),
            })?;

        let categories: Vec<String> = unwrap_collection(value)
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(name) => Some(name),
                Value::Object(map) => match map.get("name") {
                    Some(Value::String(name)) => Some(name.clone()),
                    _ => {
                        tracing::debug!("catalog entry without a name field, skipping");
                        None
                    }
                },
                other => {
                    tracing::debug!(entry = %other, "unrecognized catalog entry, skipping");
                    None
                }
            })
            .collect();

        if categories.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        let mut state = self.inner.lock().expect("catalog lock poisoned");
        state.categories = categories.clone();
        state.loaded = true;
        Ok(categories)
    }

    /// Whether a successful load has happened this session.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inner.lock().expect("catalog lock poisoned").loaded
    }

    /// Snapshot of the category names, in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.inner
            .lock()
            .expect("catalog lock poisoned")
            .categories
            .clone()
    }

    /// Membership check used to gate report creation.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.inner
            .lock()
            .expect("catalog lock poisoned")
            .categories
            .iter()
            .any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn load_from_results_envelope() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/type");
            then.status(200).json_body(json!({
                "count": 2,
                "results": [
                    {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"},
                    {"name": "water", "url": "https://pokeapi.co/api/v2/type/11/"}
                ]
            }));
        });

        let catalog = CatalogManager::new();
        let net = NetClient::with_defaults().unwrap();
        let names = catalog.load(&net, &server.url("/api/v2/type")).await.unwrap();

        assert_eq!(names, vec!["fire", "water"]);
        assert!(catalog.is_loaded());
        assert!(catalog.contains("fire"));
        assert!(!catalog.contains("shadow"));
    }

    #[tokio::test]
    async fn load_from_bare_string_array() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/types");
            then.status(200).json_body(json!(["grass", "electric"]));
        });

        let catalog = CatalogManager::new();
        let net = NetClient::with_defaults().unwrap();
        let names = catalog.load(&net, &server.url("/types")).await.unwrap();
        assert_eq!(names, vec!["grass", "electric"]);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_catalog_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/types");
            then.status(500);
        });

        let catalog = CatalogManager::new();
        let net = NetClient::new(pokerep_net::NetConfig {
            retry_count: 0,
            ..pokerep_net::NetConfig::default()
        })
        .unwrap();

        let result = catalog.load(&net, &server.url("/types")).await;
        assert!(result.is_err());
        assert!(!catalog.is_loaded());
        assert!(catalog.categories().is_empty());
    }

    #[tokio::test]
    async fn empty_catalog_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/types");
            then.status(200).json_body(json!({"results": []}));
        });

        let catalog = CatalogManager::new();
        let net = NetClient::with_defaults().unwrap();
        let result = catalog.load(&net, &server.url("/types")).await;
        assert!(result.is_err());
        assert!(!catalog.is_loaded());
    }
}

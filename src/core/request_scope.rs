//! Request-scoped memoization of provider calls
//!
//! A [`RequestScope`] is created when a page request starts and dropped when
//! the response is built. Within it, repeated reads of the same operation
//! (same page, same family id) share a single provider call, including calls
//! that are still in flight.

use crate::core::errors::CatalogError;
use crate::data::{FamiliesResponse, FamilyDetailsResponse};
use crate::provider::FamilyProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;

type Cell<V> = Arc<OnceCell<Result<V, CatalogError>>>;

/// Results keyed by operation input, each computed at most once
struct Memo<K, V> {
    cells: Mutex<HashMap<K, Cell<V>>>,
}

impl<K: Eq + Hash, V: Clone> Memo<K, V> {
    fn new() -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
        }
    }

    async fn get_or_fetch<F, Fut>(&self, key: K, fetch: F) -> Result<V, CatalogError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, CatalogError>>,
    {
        let cell = {
            let mut cells = match self.cells.lock() {
                Ok(cells) => cells,
                Err(poisoned) => {
                    tracing::warn!("request scope lock poisoned, recovering");
                    poisoned.into_inner()
                }
            };
            cells.entry(key).or_default().clone()
        };
        cell.get_or_init(fetch).await.clone()
    }
}

/// Provider wrapper that lives for one request
pub struct RequestScope {
    provider: Arc<dyn FamilyProvider>,
    families: Memo<u32, Option<FamiliesResponse>>,
    details: Memo<String, FamilyDetailsResponse>,
}

impl RequestScope {
    pub fn new(provider: Arc<dyn FamilyProvider>) -> Self {
        Self {
            provider,
            families: Memo::new(),
            details: Memo::new(),
        }
    }
}

#[async_trait]
impl FamilyProvider for RequestScope {
    fn name(&self) -> &str {
        self.provider.name()
    }

    async fn list_families(&self, page: u32) -> Result<Option<FamiliesResponse>, CatalogError> {
        self.families
            .get_or_fetch(page, || self.provider.list_families(page))
            .await
    }

    async fn family_details(
        &self,
        id_family: &str,
    ) -> Result<FamilyDetailsResponse, CatalogError> {
        self.details
            .get_or_fetch(id_family.to_string(), || {
                self.provider.family_details(id_family)
            })
            .await
    }
}

//! In-process provider over the static fixtures

use super::FamilyProvider;
use crate::core::errors::CatalogError;
use crate::data::{FamiliesResponse, FamilyDetailsResponse, FixtureCatalog, ITEMS_PER_PAGE};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FixtureProvider {
    catalog: Arc<FixtureCatalog>,
    page_size: u32,
}

impl FixtureProvider {
    pub fn new(catalog: Arc<FixtureCatalog>) -> Self {
        Self {
            catalog,
            page_size: ITEMS_PER_PAGE,
        }
    }

    pub fn catalog(&self) -> &FixtureCatalog {
        &self.catalog
    }

    /// Detail lookup that also accepts no id, for the legacy endpoint
    pub fn lookup(&self, id_family: Option<&str>) -> FamilyDetailsResponse {
        FamilyDetailsResponse {
            family: self.catalog.details(id_family).cloned(),
        }
    }
}

#[async_trait]
impl FamilyProvider for FixtureProvider {
    fn name(&self) -> &str {
        "fixtures"
    }

    async fn list_families(&self, page: u32) -> Result<Option<FamiliesResponse>, CatalogError> {
        Ok(Some(self.catalog.page(page, self.page_size)))
    }

    async fn family_details(
        &self,
        id_family: &str,
    ) -> Result<FamilyDetailsResponse, CatalogError> {
        Ok(self.lookup(Some(id_family)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> FixtureProvider {
        FixtureProvider::new(Arc::new(FixtureCatalog::embedded().unwrap()))
    }

    #[tokio::test]
    async fn test_pages_split_fifty_families() {
        let provider = provider();

        let first = provider.list_families(1).await.unwrap().unwrap();
        assert_eq!(first.families.len(), 24);
        assert_eq!(first.total_families, 50);

        let third = provider.list_families(3).await.unwrap().unwrap();
        assert_eq!(third.families.len(), 2);
        assert_eq!(third.families[0].name, provider.catalog().families()[48].name);
    }

    #[tokio::test]
    async fn test_unknown_family_is_absent() {
        let response = provider().family_details("nope").await.unwrap();
        assert!(response.family.is_none());
    }
}

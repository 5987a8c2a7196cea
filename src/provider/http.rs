//! HTTP-backed provider for the catalog API

use super::FamilyProvider;
use crate::core::errors::CatalogError;
use crate::core::settings::DEFAULT_BASE_URL;
use crate::data::{FamiliesResponse, FamilyDetailsResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Reads families from `{base_url}/api/...`
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
}

impl Default for HttpProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl HttpProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::fetch(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status"),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FamilyProvider for HttpProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_families(&self, page: u32) -> Result<Option<FamiliesResponse>, CatalogError> {
        self.get_json("/api/families", &[("page", page.to_string())])
            .await
            .inspect_err(|e| error!("Error getting font families: {}", e))
    }

    async fn family_details(
        &self,
        id_family: &str,
    ) -> Result<FamilyDetailsResponse, CatalogError> {
        let response: Option<FamilyDetailsResponse> = self
            .get_json("/api/familyDetails", &[("id", id_family.to_string())])
            .await
            .inspect_err(|e| error!("Error getting font family details: {}", e))?;
        if response.is_none() {
            debug!("Empty details payload for {}", id_family);
        }
        Ok(response.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FixtureCatalog;
    use crate::server::{build_router, ServerState};
    use axum::{http::StatusCode, routing::get, Router};
    use std::sync::Arc;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn fixture_router() -> Router {
        let catalog = Arc::new(FixtureCatalog::embedded().unwrap());
        build_router(ServerState::with_fixture_pages(catalog))
    }

    #[tokio::test]
    async fn test_lists_pages_over_http() {
        let provider = HttpProvider::new(spawn(fixture_router()).await);

        let first = provider.list_families(1).await.unwrap().unwrap();
        assert_eq!(first.families.len(), 24);
        assert_eq!(first.total_families, 50);

        let last = provider.list_families(3).await.unwrap().unwrap();
        assert_eq!(last.families.len(), 2);
    }

    #[tokio::test]
    async fn test_details_by_id_over_http() {
        let provider = HttpProvider::new(spawn(fixture_router()).await);

        let response = provider.family_details("fam-1002").await.unwrap();
        let family = response.family.unwrap();
        assert_eq!(family.id_family, "fam-1002");
        assert!(family.images.pangram.svg.contains("<svg"));
    }

    #[tokio::test]
    async fn test_unknown_family_is_absent_not_error() {
        let provider = HttpProvider::new(spawn(fixture_router()).await);

        let response = provider.family_details("fam-9999").await.unwrap();
        assert_eq!(response.family, None);
    }

    #[tokio::test]
    async fn test_missing_details_route_is_fetch_error() {
        let router = Router::new().route("/other", get(|| async { "{}" }));
        let provider = HttpProvider::new(spawn(router).await);

        let err = provider.family_details("fam-1001").await.unwrap_err();
        assert!(matches!(err, CatalogError::Fetch { status: 404, .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_error() {
        let router = Router::new().route(
            "/api/families",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let provider = HttpProvider::new(spawn(router).await);

        let err = provider.list_families(1).await.unwrap_err();
        assert_eq!(err, CatalogError::fetch(500, "Internal Server Error"));
    }

    #[tokio::test]
    async fn test_null_body_is_absent_payload() {
        let router = Router::new().route("/api/families", get(|| async { "null" }));
        let provider = HttpProvider::new(spawn(router).await);

        assert_eq!(provider.list_families(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_null_details_body_is_absent_family() {
        let router = Router::new().route("/api/familyDetails", get(|| async { "null" }));
        let provider = HttpProvider::new(spawn(router).await);

        let response = provider.family_details("fam-1001").await.unwrap();
        assert_eq!(response.family, None);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = HttpProvider::new(format!("http://{addr}/"));
        let err = provider.family_details("fam-1001").await.unwrap_err();
        assert!(matches!(err, CatalogError::Network(_)), "got {err:?}");
    }
}

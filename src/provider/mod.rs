//! Font family data providers
//!
//! Views read catalog data through [`FamilyProvider`], so the backing source
//! can be swapped without touching them:
//! - [`HttpProvider`] talks to the catalog API over HTTP
//! - [`FixtureProvider`] serves the static fixtures in-process

pub mod fixture;
pub mod http;

use crate::core::errors::CatalogError;
use crate::data::{FamiliesResponse, FamilyDetailsResponse};
use async_trait::async_trait;

pub use fixture::FixtureProvider;
pub use http::HttpProvider;

/// Read-only access to the font family catalog
#[async_trait]
pub trait FamilyProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// One page of the listing, 1-based. `Ok(None)` means the source answered
    /// without a payload.
    async fn list_families(&self, page: u32) -> Result<Option<FamiliesResponse>, CatalogError>;

    /// Full record of the family identified by `id_family`
    async fn family_details(&self, id_family: &str)
        -> Result<FamilyDetailsResponse, CatalogError>;
}

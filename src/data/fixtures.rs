//! Static JSON fixtures backing the catalog API

use super::{FamiliesResponse, FontFamilyDetails};
use crate::core::errors::CatalogError;
use std::path::Path;

/// Fixture data compiled into the binary
pub const EMBEDDED_FAMILIES_JSON: &str = include_str!("../../data/families.json");

/// Ordered set of family detail records, the opaque data source of the API.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    families: Vec<FontFamilyDetails>,
}

impl FixtureCatalog {
    pub fn new(families: Vec<FontFamilyDetails>) -> Self {
        Self { families }
    }

    /// Parse the fixtures shipped with the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_FAMILIES_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let families: Vec<FontFamilyDetails> =
            serde_json::from_str(json).map_err(|e| CatalogError::Fixture(e.to_string()))?;
        Ok(Self { families })
    }

    /// Load fixtures from a JSON file on disk
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Fixture(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&contents)?;
        tracing::debug!(
            "Loaded {} families from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn families(&self) -> &[FontFamilyDetails] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// One listing page, 1-based
    pub fn page(&self, page: u32, page_size: u32) -> FamiliesResponse {
        FamiliesResponse::from_details_page(&self.families, page, page_size)
    }

    /// Look a family up by `idFamily`. Without an id the first family is
    /// returned, which keeps the unparameterized detail endpoint working.
    pub fn details(&self, id_family: Option<&str>) -> Option<&FontFamilyDetails> {
        match id_family {
            Some(id) => self.families.iter().find(|f| f.id_family == id),
            None => self.families.first(),
        }
    }
}

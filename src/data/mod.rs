//! Catalog data model
//!
//! Wire types shared by the API, the HTTP provider and the views. Field names
//! follow the catalog's JSON (camelCase, including the historical
//! `formatedPrice` spelling).

pub mod conversions;
pub mod fixtures;
pub mod pagination;

use serde::{Deserialize, Serialize};

pub use fixtures::FixtureCatalog;
pub use pagination::{total_pages, PaginationState, ITEMS_PER_PAGE};

/// Price a family is sold from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFamilyPrice {
    #[serde(rename = "formatedPrice")]
    pub formatted_price: String,
    pub amount: f64,
    pub currency: String,
}

/// Foundry a family belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFamilyFoundry {
    pub id: String,
    pub name: String,
    pub total_families: u32,
}

/// Raw SVG preview plus its intended display size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFamilyImage {
    pub svg: String,
    pub width: u32,
    pub height: u32,
}

/// Images shipped with a listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryImages {
    pub alphabet: FontFamilyImage,
}

/// Images shipped with a detail record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewImages {
    pub alphabet: FontFamilyImage,
    pub pangram: FontFamilyImage,
}

/// A font family record, generic over the image set it carries.
///
/// Listings and detail pages share every field except `images`, so both are
/// expressed as aliases of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyRecord<I> {
    pub id_font: u64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_regular_font: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    pub price: Option<FontFamilyPrice>,
    pub id_family: String,
    pub name: String,
    pub total_fonts: u32,
    pub foundry: FontFamilyFoundry,
    pub images: I,
}

/// Summary record shown on listing cards
pub type FontFamily = FamilyRecord<SummaryImages>;

/// Full record shown on a family's page
pub type FontFamilyDetails = FamilyRecord<PreviewImages>;

/// `GET /api/families` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamiliesResponse {
    pub families: Vec<FontFamily>,
    /// Count across all pages, not just this one
    pub total_families: u64,
}

/// `GET /api/familyDetails` envelope
///
/// A missing or `null` family decodes to `None`, which views render as
/// "no data" rather than as an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FamilyDetailsResponse {
    #[serde(default)]
    pub family: Option<FontFamilyDetails>,
}

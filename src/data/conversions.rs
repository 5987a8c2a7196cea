//! Conversions between detail records and the listing shapes
//!
//! Fixtures store full detail records; listings are derived from them by
//! dropping the pangram preview.

use super::{FamiliesResponse, FontFamily, FontFamilyDetails, SummaryImages};

impl FontFamilyDetails {
    /// Strip the detail-only images to get the listing record
    pub fn to_summary(&self) -> FontFamily {
        FontFamily {
            id_font: self.id_font,
            url: self.url.clone(),
            id_regular_font: self.id_regular_font,
            vendor_id: self.vendor_id.clone(),
            price: self.price.clone(),
            id_family: self.id_family.clone(),
            name: self.name.clone(),
            total_fonts: self.total_fonts,
            foundry: self.foundry.clone(),
            images: SummaryImages {
                alphabet: self.images.alphabet.clone(),
            },
        }
    }
}

impl FamiliesResponse {
    /// Build one listing page out of a full, ordered set of detail records.
    ///
    /// `page` is 1-based. Pages past the end yield an empty slice while
    /// `total_families` still reports the full count.
    pub fn from_details_page(all: &[FontFamilyDetails], page: u32, page_size: u32) -> Self {
        let page_size = page_size.max(1) as usize;
        let start = (page.max(1) as usize - 1).saturating_mul(page_size);
        let families = all
            .iter()
            .skip(start)
            .take(page_size)
            .map(FontFamilyDetails::to_summary)
            .collect();

        Self {
            families,
            total_families: all.len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FixtureCatalog;

    #[test]
    fn test_summary_keeps_identity_and_alphabet() {
        let catalog = FixtureCatalog::embedded().expect("embedded fixtures parse");
        let details = &catalog.families()[0];
        let summary = details.to_summary();

        assert_eq!(summary.id_family, details.id_family);
        assert_eq!(summary.url, details.url);
        assert_eq!(summary.images.alphabet, details.images.alphabet);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["images"].get("pangram").is_none());
    }

    #[test]
    fn test_page_past_end_is_empty_but_keeps_total() {
        let catalog = FixtureCatalog::embedded().unwrap();
        let page = FamiliesResponse::from_details_page(catalog.families(), 40, 24);
        assert!(page.families.is_empty());
        assert_eq!(page.total_families, catalog.len() as u64);
    }
}

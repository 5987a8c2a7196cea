//! Theme palettes for the catalog pages
//!
//! Each theme is a small set of colors; the page stylesheet exposes them as
//! CSS custom properties so the browser can switch without a reload.

pub mod dark;
pub mod light;

pub use dark::DarkTheme;
pub use light::LightTheme;

/// Colors one theme provides to the pages
pub trait CatalogTheme {
    /// Page background
    fn background(&self) -> &'static str;

    /// Card and aside background
    fn card(&self) -> &'static str;

    fn text(&self) -> &'static str;

    /// Primary buttons and the active preview control
    fn accent(&self) -> &'static str {
        "#EE585A"
    }

    /// Pagination numbers that are not the current page
    fn inactive_text(&self) -> &'static str {
        "#8E8E93"
    }

    fn disabled_stroke(&self) -> &'static str {
        "#D7D7DB"
    }

    /// Fill that previews are recolored to on this theme
    fn preview_fill(&self) -> &'static str;
}

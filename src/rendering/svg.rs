//! Theme-aware recoloring of preview SVGs
//!
//! Previews arrive with explicit hex fills. Each one is rewritten twice, once
//! per theme, and encoded as a data URI. Both variants are emitted so the
//! theme switch only toggles visibility.
//!
//! This is a textual substitution over `fill="#…"` attributes, not an SVG
//! parse. Gradients, `currentColor` and `style=` fills keep their colors.

use crate::data::FontFamilyImage;
use crate::ui::themes::{CatalogTheme, DarkTheme, LightTheme};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use std::sync::LazyLock;

/// Fill used for previews on the light background
pub const LIGHT_FILL: &str = "rgb(18 18 18)";
/// Fill used for previews on the dark background
pub const DARK_FILL: &str = "rgb(254 254 254)";

static HEX_FILL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"fill="#[^"]*""##).expect("hex fill pattern is valid"));

/// Replace every hex fill attribute in `svg` with `fill="{color}"`
pub fn remap_fills(svg: &str, color: &str) -> String {
    let replacement = format!(r#"fill="{color}""#);
    HEX_FILL
        .replace_all(svg, regex::NoExpand(&replacement))
        .into_owned()
}

/// `data:` URI for an SVG document
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

/// Both theme variants of one preview, ready to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedSvg {
    pub light_data_url: String,
    pub dark_data_url: String,
    pub width: u32,
    pub height: u32,
}

impl ThemedSvg {
    pub fn from_image(image: &FontFamilyImage) -> Self {
        Self {
            light_data_url: svg_data_url(&remap_fills(&image.svg, LightTheme.preview_fill())),
            dark_data_url: svg_data_url(&remap_fills(&image.svg, DarkTheme.preview_fill())),
            width: image.width,
            height: image.height,
        }
    }
}

//! Rendering helpers shared by the pages

pub mod svg;

pub use svg::{remap_fills, svg_data_url, ThemedSvg, DARK_FILL, LIGHT_FILL};

//! Theme selection
//!
//! The active theme is injected into page rendering as a [`ThemeContext`].
//! It is read-only for the views; switching happens in the browser, which
//! also remembers the choice.

use crate::ui::themes::{CatalogTheme, DarkTheme, LightTheme};
use serde::{Deserialize, Serialize};

/// Theme the pages start in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Light,
    Dark,
    /// Follow the browser's `prefers-color-scheme`
    #[default]
    System,
}

impl ThemeVariant {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" | "auto" => Some(Self::System),
            _ => None,
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        vec!["light", "dark", "system"]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Class set on `<html>`; `System` leaves it to the media query
    pub fn html_class(&self) -> Option<&'static str> {
        match self {
            Self::Light => Some("light"),
            Self::Dark => Some("dark"),
            Self::System => None,
        }
    }
}

/// Read-only theme information handed to the page renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeContext {
    variant: ThemeVariant,
}

impl ThemeContext {
    pub fn new(variant: ThemeVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// CSS custom properties for both palettes. The light palette is the
    /// default; the dark one applies on `html.dark`, and for `system` also
    /// under a dark `prefers-color-scheme`.
    pub fn palette_css(&self) -> String {
        let light = palette_block(&LightTheme);
        let dark = palette_block(&DarkTheme);
        format!(
            ":root {{ {light} }}\n\
             html.dark {{ {dark} }}\n\
             @media (prefers-color-scheme: dark) {{ html:not(.light) {{ {dark} }} }}\n"
        )
    }
}

fn palette_block(theme: &dyn CatalogTheme) -> String {
    format!(
        "--background: {}; --card: {}; --text: {}; --accent: {}; \
         --inactive: {}; --disabled: {};",
        theme.background(),
        theme.card(),
        theme.text(),
        theme.accent(),
        theme.inactive_text(),
        theme.disabled_stroke(),
    )
}

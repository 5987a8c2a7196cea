//! Views and page markup
//!
//! - `list_view` / `detail_view`: load state machines over a provider
//! - `pages`: HTML for those states
//! - `theme` / `themes`: injected theme context and its palettes

pub mod detail_view;
pub mod list_view;
pub mod pages;
pub mod theme;
pub mod themes;
pub mod view_state;

pub use detail_view::{DetailView, PreviewMode};
pub use list_view::{ListPage, ListView};
pub use theme::{ThemeContext, ThemeVariant};
pub use view_state::{NavigationTicket, NavigationTracker, ViewState};

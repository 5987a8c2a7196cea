//! HTML for the catalog pages
//!
//! Pages are rendered on the server from view state. The only client-side
//! behavior is the theme switcher and the preview toggle, and the toggle is
//! pure CSS: both previews are in the markup, so switching never refetches.

use crate::data::{FontFamily, FontFamilyDetails, FontFamilyImage, PaginationState};
use crate::rendering::ThemedSvg;
use crate::ui::detail_view::{DetailView, PreviewMode};
use crate::ui::list_view::ListView;
use crate::ui::theme::ThemeContext;
use crate::ui::view_state::ViewState;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const SITE_NAME: &str = "fontshelf";

const STYLES: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; padding: 48px 56px; font-family: Inter, system-ui, sans-serif;
       background: var(--background); color: var(--text); }
a { color: inherit; text-decoration: none; }
header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 48px; }
.primary-button { background: var(--accent); color: #FEFEFE; border: 0; border-radius: 16px;
                  padding: 16px 24px; cursor: pointer; font: inherit; }
.card-list { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 8px; margin-bottom: 24px; }
.card { display: block; background: var(--card); border-radius: 32px; padding: 56px 44px; }
.card-preview { display: flex; height: 128px; margin-bottom: 32px; }
.card-meta { display: flex; justify-content: space-between; font-weight: 300; }
.card-meta h2 { font-size: 1em; font-weight: 700; margin: 0; }
.card-meta p { margin: 0; }
.svg-renderer { display: flex; }
.svg-renderer img { object-fit: contain; object-position: left; max-width: 100%; }
.svg-dark { display: none; }
html.dark .svg-light { display: none; }
html.dark .svg-dark { display: block; }
@media (prefers-color-scheme: dark) {
  html:not(.light) .svg-light { display: none; }
  html:not(.light) .svg-dark { display: block; }
}
.pagination { display: flex; }
.page-button { width: 40px; height: 40px; border-radius: 16px; display: flex; align-items: center;
               justify-content: center; color: var(--inactive); background: none; border: 0; font: inherit; }
.page-button.active { background: var(--accent); color: #FEFEFE; }
.page-button:disabled { color: var(--disabled); cursor: not-allowed; }
.page-button.next svg { transform: rotate(180deg); }
.family { display: flex; gap: 8px; }
.visualizer { background: var(--card); width: 66%; border-radius: 32px; padding: 40px 6px 40px 48px; }
.preview-toggle { display: none; }
.preview { display: none; }
#preview-pangram:checked ~ .previews .preview-pangram,
#preview-alphabet:checked ~ .previews .preview-alphabet { display: block; }
.preview-controls { margin-top: 130px; display: flex; gap: 10px; }
.preview-button { cursor: pointer; font-weight: 500; }
#preview-pangram:checked ~ .preview-controls label[for="preview-pangram"],
#preview-alphabet:checked ~ .preview-controls label[for="preview-alphabet"] { color: var(--accent); }
.family-informations { background: var(--card); width: 33%; border-radius: 32px; padding: 44px 40px; }
.family-informations h2 { font-size: 1.5em; font-weight: 700; margin: 0 0 16px; }
"#;

/// Applies the stored theme before first paint and flips it on click
const THEME_SCRIPT: &str = r#"
(function () {
  var root = document.documentElement;
  var stored = localStorage.getItem("theme");
  if (stored === "light" || stored === "dark") {
    root.classList.remove("light", "dark");
    root.classList.add(stored);
  }
  window.switchTheme = function () {
    var dark = root.classList.contains("dark") ||
      (!root.classList.contains("light") && window.matchMedia("(prefers-color-scheme: dark)").matches);
    var next = dark ? "light" : "dark";
    root.classList.remove("light", "dark");
    root.classList.add(next);
    localStorage.setItem("theme", next);
  };
})();
"#;

const ARROW_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="9" viewBox="0 0 14 9" fill="none"><path d="M4.48333 0.75L0.75 4.48333L4.48333 8.21667" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/><path d="M0.75 4.48334H12.6833" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Full document around `body`
pub fn layout(title: Option<&str>, theme: &ThemeContext, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[theme.variant().html_class()] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if let Some(title) = title {
                    title { (title) }
                }
                style { (PreEscaped(theme.palette_css())) (PreEscaped(STYLES)) }
                script { (PreEscaped(THEME_SCRIPT)) }
            }
            body {
                header {
                    a href="/" { strong { (SITE_NAME) } }
                    (theme_switcher())
                }
                main { (body) }
            }
        }
    }
}

pub fn theme_switcher() -> Markup {
    html! {
        button type="button" class="primary-button" onclick="switchTheme()" { "Switch theme" }
    }
}

/// Both theme variants of a preview; CSS shows the one matching the theme
pub fn svg_renderer(image: &FontFamilyImage) -> Markup {
    let themed = ThemedSvg::from_image(image);
    html! {
        div class="svg-renderer" {
            img class="svg-light" src=(themed.light_data_url) alt="" width=(themed.width) height=(themed.height);
            img class="svg-dark" src=(themed.dark_data_url) alt="" width=(themed.width) height=(themed.height);
        }
    }
}

fn error_message(message: &str) -> Markup {
    html! { div class="error" { "error : " (message) } }
}

pub fn family_card(family: &FontFamily) -> Markup {
    html! {
        a class="card" href=(family.url) {
            div class="card-preview" { (svg_renderer(&family.images.alphabet)) }
            div class="card-meta" {
                div {
                    h2 { (family.name) }
                    p { (family.foundry.name) }
                }
                div {
                    @if let Some(price) = &family.price {
                        p { "From " (price.formatted_price) }
                    }
                    p { (family.total_fonts) " styles" }
                }
            }
        }
    }
}

pub fn card_list(families: &[FontFamily]) -> Markup {
    html! {
        div class="card-list" {
            @for family in families {
                (family_card(family))
            }
        }
    }
}

/// Previous / numbered / next controls. Nothing for zero pages.
pub fn pagination(state: &PaginationState) -> Markup {
    html! {
        @if state.has_controls() {
            nav class="pagination" aria-label="Pagination" {
                @match state.previous() {
                    Some(page) => {
                        a class="page-button previous" href=(page_href(page)) aria-label="Previous page" { (PreEscaped(ARROW_SVG)) }
                    }
                    None => {
                        button class="page-button previous" disabled aria-label="Previous page" { (PreEscaped(ARROW_SVG)) }
                    }
                }
                @for page in state.pages() {
                    @match state.go_to(page) {
                        Some(target) => {
                            a class="page-button" href=(page_href(target)) { (page) }
                        }
                        None => {
                            span class="page-button active" aria-current="page" { (page) }
                        }
                    }
                }
                @match state.next() {
                    Some(page) => {
                        a class="page-button next" href=(page_href(page)) aria-label="Next page" { (PreEscaped(ARROW_SVG)) }
                    }
                    None => {
                        button class="page-button next" disabled aria-label="Next page" { (PreEscaped(ARROW_SVG)) }
                    }
                }
            }
        }
    }
}

fn page_href(page: u32) -> String {
    format!("?page={page}")
}

pub fn list_body(view: &ListView) -> Markup {
    html! {
        @match view.state() {
            ViewState::Loaded(page) => {
                (card_list(&page.families))
                (pagination(&page.pagination))
            }
            ViewState::Failed(message) => { (error_message(message)) }
            ViewState::Idle | ViewState::Loading => { div class="loading" { "Loading..." } }
            ViewState::NoData => { div { "no data" } }
        }
    }
}

pub fn render_list_page(view: &ListView, theme: &ThemeContext) -> Markup {
    layout(Some(&view.title()), theme, list_body(view))
}

/// Preview area with the Pangram / Alphabet controls
pub fn visualizer(family: &FontFamilyDetails, initial: PreviewMode) -> Markup {
    html! {
        article class="visualizer" {
            @for mode in PreviewMode::ALL {
                input type="radio" class="preview-toggle" name="preview"
                    id=(format!("preview-{}", mode.slug())) checked[mode == initial];
            }
            div class="previews" {
                @for mode in PreviewMode::ALL {
                    div class=(format!("preview preview-{}", mode.slug())) {
                        (svg_renderer(mode.image(family)))
                    }
                }
            }
            div class="preview-controls" {
                @for mode in PreviewMode::ALL {
                    label class="preview-button" for=(format!("preview-{}", mode.slug())) { (mode.label()) }
                }
            }
        }
    }
}

pub fn family_informations(family: &FontFamilyDetails) -> Markup {
    html! {
        aside class="family-informations" {
            h2 { (family.name) }
            p { "From " (family.foundry.name) }
        }
    }
}

pub fn detail_body(view: &DetailView) -> Markup {
    html! {
        @match view.state() {
            ViewState::Loaded(family) => {
                div class="family" {
                    (visualizer(family, view.preview()))
                    (family_informations(family))
                }
            }
            ViewState::Failed(message) => { (error_message(message)) }
            ViewState::Idle | ViewState::Loading => { div class="loading" { "Loading..." } }
            ViewState::NoData => { div { "No family details found" } }
        }
    }
}

/// `title` comes from the page metadata read, which may differ from the
/// view when that read failed
pub fn render_detail_page(view: &DetailView, title: Option<&str>, theme: &ThemeContext) -> Markup {
    layout(title, theme, detail_body(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::CatalogError;
    use crate::data::{FamiliesResponse, FixtureCatalog};

    fn catalog() -> FixtureCatalog {
        FixtureCatalog::embedded().unwrap()
    }

    #[test]
    fn test_pagination_first_page_disables_previous() {
        let html = pagination(&PaginationState::new(1, 3)).into_string();
        assert!(html.contains(r#"<button class="page-button previous" disabled"#));
        assert!(html.contains(r#"href="?page=2""#));
        assert!(html.contains(r#"href="?page=3""#));
        assert!(html.contains(r#"aria-current="page">1<"#));
        assert!(!html.contains(r#"href="?page=1""#));
    }

    #[test]
    fn test_pagination_last_page_disables_next() {
        let html = pagination(&PaginationState::new(3, 3)).into_string();
        assert!(html.contains(r#"<button class="page-button next" disabled"#));
        assert!(html.contains(r#"<a class="page-button previous" href="?page=2""#));
    }

    #[test]
    fn test_no_pages_renders_nothing() {
        assert_eq!(pagination(&PaginationState::new(1, 0)).into_string(), "");
    }

    #[test]
    fn test_card_shows_price_and_styles() {
        let catalog = catalog();
        let family = catalog.families()[0].to_summary();
        let html = family_card(&family).into_string();

        assert!(html.contains(&format!(r#"href="{}""#, family.url)));
        assert!(html.contains("From €30.00"));
        assert!(html.contains("2 styles"));
        assert!(html.contains("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_unpriced_card_omits_price() {
        let catalog = catalog();
        let family = catalog
            .families()
            .iter()
            .find(|f| f.price.is_none())
            .unwrap()
            .to_summary();
        assert!(!family_card(&family).into_string().contains("From "));
    }

    #[test]
    fn test_list_error_and_no_data_messages() {
        let mut view = ListView::new();
        let ticket = view.begin_load(1);
        view.finish(ticket, Err(CatalogError::fetch(500, "Internal Server Error")));
        let html = list_body(&view).into_string();
        assert!(html.contains("error : Error 500: Internal Server Error"));

        let ticket = view.begin_load(1);
        view.finish(ticket, Ok(None));
        assert!(list_body(&view).into_string().contains("no data"));
    }

    #[test]
    fn test_list_page_title() {
        let mut view = ListView::new();
        let ticket = view.begin_load(2);
        view.finish(ticket, Ok(Some(FamiliesResponse { families: vec![], total_families: 0 })));
        let html = render_list_page(&view, &ThemeContext::default()).into_string();
        assert!(html.contains("<title>Home - page 2</title>"));
        assert!(!html.contains(r#"<nav class="pagination""#));
    }

    #[test]
    fn test_visualizer_checks_initial_mode() {
        let catalog = catalog();
        let family = &catalog.families()[0];

        let html = visualizer(family, PreviewMode::Pangram).into_string();
        assert!(html.contains(r#"id="preview-pangram" checked"#));
        assert!(!html.contains(r#"id="preview-alphabet" checked"#));
        assert!(html.contains(">Pangram</label>"));
        assert!(html.contains(">Alphabet</label>"));

        let html = visualizer(family, PreviewMode::Alphabet).into_string();
        assert!(html.contains(r#"id="preview-alphabet" checked"#));
    }

    #[test]
    fn test_layout_sets_theme_class() {
        use crate::ui::theme::ThemeVariant;

        let dark = layout(None, &ThemeContext::new(ThemeVariant::Dark), html! {}).into_string();
        assert!(dark.contains(r#"<html lang="en" class="dark">"#));
        assert!(dark.contains("Switch theme"));

        let system = layout(None, &ThemeContext::default(), html! {}).into_string();
        assert!(system.contains(r#"<html lang="en">"#));
        assert!(!system.contains("<title>"));
    }
}

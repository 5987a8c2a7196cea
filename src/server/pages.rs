//! Server-rendered catalog pages

use super::ServerState;
use crate::core::request_scope::RequestScope;
use crate::provider::FamilyProvider;
use crate::ui::pages::{render_detail_page, render_list_page};
use crate::ui::{DetailView, ListView, PreviewMode};
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct ListQuery {
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailQuery {
    preview: Option<String>,
}

/// Missing or unusable page parameters fall back to page 1
fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|page| page.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// `GET /?page=n`
pub(super) async fn list_page(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Html<String> {
    let scope = RequestScope::new(state.pages.clone());
    let mut view = ListView::new();
    view.load(&scope, parse_page(query.page.as_deref())).await;

    Html(render_list_page(&view, &state.theme).into_string())
}

/// Title for the detail page, read separately from the body like page
/// metadata is. Errors and absent data leave the title unset.
async fn detail_title(scope: &RequestScope, id_family: &str) -> Option<String> {
    let family = scope.family_details(id_family).await.ok()?.family?;
    Some(format!("{} - {}", family.foundry.name, family.name))
}

/// `GET /font/:id[?preview=alphabet]`
pub(super) async fn detail_page(
    State(state): State<ServerState>,
    Path(id_family): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Html<String> {
    let scope = RequestScope::new(state.pages.clone());
    let title = detail_title(&scope, &id_family).await;

    let mut view = DetailView::new(id_family);
    view.load(&scope).await;
    if let Some(mode) = query.preview.as_deref().and_then(PreviewMode::parse) {
        view.select_preview(mode);
    }

    Html(render_detail_page(&view, title.as_deref(), &state.theme).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_defaults_to_first() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("-2")), 1);
    }
}

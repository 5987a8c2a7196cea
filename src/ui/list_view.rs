//! Paginated family listing

use crate::core::errors::CatalogError;
use crate::data::{FamiliesResponse, FontFamily, PaginationState};
use crate::provider::FamilyProvider;
use crate::ui::view_state::{NavigationTicket, NavigationTracker, ViewState};
use tracing::debug;

/// What a loaded listing page shows
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub families: Vec<FontFamily>,
    pub pagination: PaginationState,
}

#[derive(Debug, Clone, Default)]
pub struct ListView {
    current_page: u32,
    state: ViewState<ListPage>,
    navigation: NavigationTracker,
}

impl ListView {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Default::default()
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn state(&self) -> &ViewState<ListPage> {
        &self.state
    }

    /// Document title for the current page
    pub fn title(&self) -> String {
        format!("Home - page {}", self.current_page)
    }

    /// Start loading `page` unconditionally (initial render, URL entry)
    pub fn begin_load(&mut self, page: u32) -> NavigationTicket {
        self.current_page = page.max(1);
        self.state = ViewState::Loading;
        self.navigation.begin()
    }

    /// Handle a click on a page control.
    ///
    /// Returns `None` without touching the view when the target is the current
    /// page, out of `[1, total_pages]`, or when no page is loaded yet.
    pub fn navigate(&mut self, page: u32) -> Option<NavigationTicket> {
        let target = self.state.loaded()?.pagination.go_to(page)?;
        debug!("Navigating listing from page {} to {}", self.current_page, target);
        Some(self.begin_load(target))
    }

    /// Apply the response of a load. Returns `false` and leaves the view
    /// untouched when `ticket` belongs to a superseded navigation.
    pub fn finish(
        &mut self,
        ticket: NavigationTicket,
        result: Result<Option<FamiliesResponse>, CatalogError>,
    ) -> bool {
        if !self.navigation.is_current(ticket) {
            debug!("Discarding stale listing response");
            return false;
        }

        let current_page = self.current_page;
        self.state = ViewState::from_result(result.map(|payload| {
            payload.map(|response| ListPage {
                pagination: PaginationState::from_total(current_page, response.total_families),
                families: response.families,
            })
        }));
        true
    }

    /// Load `page` from `provider` and settle the view
    pub async fn load(&mut self, provider: &dyn FamilyProvider, page: u32) -> &ViewState<ListPage> {
        let ticket = self.begin_load(page);
        let result = provider.list_families(self.current_page).await;
        self.finish(ticket, result);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FixtureCatalog;
    use crate::provider::FixtureProvider;
    use std::sync::Arc;

    fn provider() -> FixtureProvider {
        FixtureProvider::new(Arc::new(FixtureCatalog::embedded().unwrap()))
    }

    #[tokio::test]
    async fn test_first_page_of_fifty() {
        let mut view = ListView::new();
        let page = view.load(&provider(), 1).await.loaded().unwrap().clone();

        assert_eq!(page.families.len(), 24);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(!page.pagination.previous_enabled());
        assert!(page.pagination.next_enabled());
        assert_eq!(view.title(), "Home - page 1");
    }

    #[tokio::test]
    async fn test_navigate_out_of_bounds_is_noop() {
        let provider = provider();
        let mut view = ListView::new();
        view.load(&provider, 1).await;
        let before = view.state().clone();

        assert!(view.navigate(0).is_none());
        assert!(view.navigate(4).is_none());
        assert!(view.navigate(1).is_none());
        assert_eq!(view.state(), &before);
        assert_eq!(view.current_page(), 1);
    }

    #[tokio::test]
    async fn test_navigate_reenters_loading() {
        let provider = provider();
        let mut view = ListView::new();
        view.load(&provider, 1).await;

        let ticket = view.navigate(3).expect("page 3 exists");
        assert!(view.state().is_loading());
        assert_eq!(view.current_page(), 3);

        view.finish(ticket, provider.list_families(3).await);
        let page = view.state().loaded().unwrap();
        assert_eq!(page.families.len(), 2);
        assert!(!page.pagination.next_enabled());
    }

    #[tokio::test]
    async fn test_stale_response_does_not_overwrite_newer_page() {
        let provider = provider();
        let mut view = ListView::new();
        view.load(&provider, 1).await;

        let slow = view.navigate(2).unwrap();
        let fast = view.begin_load(3);

        assert!(view.finish(fast, provider.list_families(3).await));
        assert!(!view.finish(slow, provider.list_families(2).await));

        assert_eq!(view.current_page(), 3);
        assert_eq!(view.state().loaded().unwrap().families.len(), 2);
    }

    #[test]
    fn test_failure_and_no_data_are_distinct() {
        let mut view = ListView::new();
        let ticket = view.begin_load(1);
        view.finish(ticket, Ok(None));
        assert_eq!(view.state(), &ViewState::NoData);

        let ticket = view.begin_load(1);
        view.finish(ticket, Err(CatalogError::fetch(500, "Internal Server Error")));
        assert_eq!(
            view.state(),
            &ViewState::Failed("Error 500: Internal Server Error".into())
        );
    }
}

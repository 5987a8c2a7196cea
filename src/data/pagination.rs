//! Pagination arithmetic for the family listing

/// Families shown per listing page
pub const ITEMS_PER_PAGE: u32 = 24;

/// Number of pages needed for `total_items` at `page_size` per page.
///
/// Zero items means zero pages, which callers render as "no controls".
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    total_items.div_ceil(page_size).min(u64::from(u32::MAX)) as u32
}

/// Derived state of the pagination controls for one rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl PaginationState {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    pub fn from_total(current_page: u32, total_items: u64) -> Self {
        Self::new(current_page, total_pages(total_items, ITEMS_PER_PAGE))
    }

    /// Whether any controls should be rendered at all
    pub fn has_controls(&self) -> bool {
        self.total_pages > 0
    }

    pub fn previous_enabled(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page numbers 1..=total_pages, one control each
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total_pages
    }

    pub fn is_current(&self, page: u32) -> bool {
        page == self.current_page
    }

    /// Target of a click on page `page`.
    ///
    /// `None` when the click is a no-op: already on that page, or outside
    /// `[1, total_pages]`.
    pub fn go_to(&self, page: u32) -> Option<u32> {
        if page < 1 || page > self.total_pages || page == self.current_page {
            return None;
        }
        Some(page)
    }

    pub fn previous(&self) -> Option<u32> {
        if self.previous_enabled() {
            self.go_to(self.current_page - 1)
        } else {
            None
        }
    }

    pub fn next(&self) -> Option<u32> {
        if self.next_enabled() {
            self.go_to(self.current_page + 1)
        } else {
            None
        }
    }
}

//! Pagination arithmetic for paged collection responses.
//!
//! [`PaginationBlock`] is derived once from the caller's counts and never
//! recomputed. Page numbers are taken as given: a page past the end or below
//! one is not an error, it simply yields the flags the arithmetic dictates.

use serde::{Deserialize, Serialize};

use crate::types::{ItemCount, PageNumber};

// ---------------------------------------------------------------------------
// Pagination block
// ---------------------------------------------------------------------------

/// Position of one page within a larger collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationBlock {
    pub total_items: ItemCount,
    pub current_page: PageNumber,
    pub page_size: ItemCount,
    pub total_pages: ItemCount,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationBlock {
    /// Derive the block from raw counts. See [`derive_pagination`].
    pub fn new(total_items: ItemCount, current_page: PageNumber, page_size: ItemCount) -> Self {
        derive_pagination(total_items, current_page, page_size)
    }

    /// Whether `current_page` lies inside `[1, total_pages]`.
    pub fn is_in_range(&self) -> bool {
        self.current_page >= 1 && i128::from(self.current_page) <= i128::from(self.total_pages)
    }
}

/// Number of pages needed to hold `total_items` at `page_size` per page.
///
/// A zero page size yields zero pages rather than dividing by zero.
///
/// # Examples
///
/// ```
/// use envelope_core::pagination::total_pages;
/// assert_eq!(total_pages(50, 3), 17);
/// assert_eq!(total_pages(100, 10), 10);
/// assert_eq!(total_pages(100, 0), 0);
/// ```
pub fn total_pages(total_items: ItemCount, page_size: ItemCount) -> ItemCount {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Build a [`PaginationBlock`], computing total pages and the navigation flags.
///
/// - `total_pages = ceil(total_items / page_size)`, or `0` when `page_size` is `0`.
/// - `has_previous = current_page > 1`.
/// - `has_next = current_page < total_pages`.
///
/// `current_page` is not clamped.
pub fn derive_pagination(
    total_items: ItemCount,
    current_page: PageNumber,
    page_size: ItemCount,
) -> PaginationBlock {
    let total_pages = total_pages(total_items, page_size);
    let block = PaginationBlock {
        total_items,
        current_page,
        page_size,
        total_pages,
        has_previous: current_page > 1,
        has_next: i128::from(current_page) < i128::from(total_pages),
    };

    if !block.is_in_range() {
        tracing::debug!(
            current_page,
            total_pages,
            "Requested page lies outside the collection"
        );
    }

    block
}

// ---------------------------------------------------------------------------
// Page request
// ---------------------------------------------------------------------------

/// Default page size when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: ItemCount = 20;

/// Page selection parameters (`?page=&page_size=`).
///
/// Values are used as given; a missing page means page one and a missing
/// size means [`DEFAULT_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<PageNumber>,
    pub page_size: Option<ItemCount>,
}

impl PageRequest {
    pub fn new(page: PageNumber, page_size: ItemCount) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    pub fn page(&self) -> PageNumber {
        self.page.unwrap_or(1)
    }

    /// Rows to fetch from the data source.
    pub fn limit(&self) -> ItemCount {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Rows to skip before the requested page. Pages below one start at zero.
    pub fn offset(&self) -> ItemCount {
        let skipped_pages = u64::try_from(self.page().saturating_sub(1)).unwrap_or(0);
        skipped_pages.saturating_mul(self.limit())
    }

    /// Derive the pagination block for this request against a known total.
    pub fn paginate(&self, total_items: ItemCount) -> PaginationBlock {
        derive_pagination(total_items, self.page(), self.limit())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

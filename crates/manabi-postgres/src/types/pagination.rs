//! Offset-based pagination for database queries.
//!
//! Offset pagination is suitable for small datasets or when random page access
//! is required, which matches how the learning log UI jumps between pages.

use serde::{Deserialize, Serialize};

/// Maximum number of items per page.
pub const MAX_LIMIT: i64 = 1000;

/// Offset-based pagination parameters for database queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl OffsetPagination {
    /// Creates a new pagination instance.
    ///
    /// The limit is clamped to `1..=MAX_LIMIT` and the offset to `0..`.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset: offset.max(0),
        }
    }

    /// Creates pagination from a 1-based page number and page size.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_LIMIT);
        Self {
            limit: page_size,
            offset: (page - 1) * page_size,
        }
    }

    /// Gets the current page number (1-based).
    pub fn page_number(&self) -> i64 {
        (self.offset / self.limit) + 1
    }

    /// Gets the page size.
    pub fn page_size(&self) -> i64 {
        self.limit
    }
}

impl Default for OffsetPagination {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

/// Result of an offset-paginated query with its total count.
#[derive(Debug, Clone)]
pub struct OffsetPage<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Total count of items matching the query (across all pages).
    pub total: i64,
}

impl<T> OffsetPage<T> {
    /// Creates a new offset page.
    pub fn new(items: Vec<T>, total: i64) -> Self {
        Self { items, total }
    }

    /// Maps the items to a different type.
    pub fn map<U, F>(self, f: F) -> OffsetPage<U>
    where
        F: FnMut(T) -> U,
    {
        OffsetPage {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    /// Returns whether there are more pages after this one.
    pub fn has_more(&self, pagination: &OffsetPagination) -> bool {
        (pagination.offset + self.items.len() as i64) < self.total
    }

    /// Returns the total number of pages.
    pub fn total_pages(&self, pagination: &OffsetPagination) -> i64 {
        (self.total + pagination.limit - 1) / pagination.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_bounds_checking() {
        let pagination = OffsetPagination::new(0, 10);
        assert_eq!(pagination.limit, 1);

        let pagination = OffsetPagination::new(1500, 10);
        assert_eq!(pagination.limit, MAX_LIMIT);

        let pagination = OffsetPagination::new(10, -5);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn pagination_from_page() {
        let pagination = OffsetPagination::from_page(1, 20);
        assert_eq!(pagination.limit, 20);
        assert_eq!(pagination.offset, 0);

        let pagination = OffsetPagination::from_page(3, 5);
        assert_eq!(pagination.limit, 5);
        assert_eq!(pagination.offset, 10);

        // Page numbers below 1 degrade to the first page
        let pagination = OffsetPagination::from_page(0, 20);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn pagination_page_number_round_trip() {
        let pagination = OffsetPagination::from_page(4, 25);
        assert_eq!(pagination.page_number(), 4);
        assert_eq!(pagination.page_size(), 25);
    }

    #[test]
    fn page_has_more() {
        let pagination = OffsetPagination::from_page(1, 5);
        let page = OffsetPage::new(vec![1, 2, 3, 4, 5], 12);
        assert!(page.has_more(&pagination));
        assert_eq!(page.total_pages(&pagination), 3);

        let last = OffsetPage::new(vec![11, 12], 12);
        let pagination = OffsetPagination::from_page(3, 5);
        assert!(!last.has_more(&pagination));
    }
}

//! Pagination models shared by every paged listing.

use serde::Serialize;

use crate::constants::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE};

/// Request-scoped pagination cursor.
///
/// Values are stored as received; range checks belong to whoever builds the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Zero-based page index
    pub page: i32,
    pub items_per_page: i32,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl Pager {
    pub fn new(page: i32, items_per_page: i32) -> Self {
        Self {
            page,
            items_per_page,
        }
    }

    /// Number of items to return, negative sizes count as zero.
    pub fn limit(&self) -> u64 {
        self.items_per_page.max(0) as u64
    }

    /// Number of items to skip before this page starts.
    pub fn offset(&self) -> u64 {
        self.page.max(0) as u64 * self.limit()
    }
}

/// One slice of a larger result set plus the total item count across all slices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Convert the items while keeping the total count.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}

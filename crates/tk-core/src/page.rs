//! Page-based list results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default number of records per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// `SQLite` binds `OFFSET` as a signed 64-bit integer.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Filter and page selector shared by every list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive substring to match; `None` or blank lists everything.
    pub search: Option<String>,
    /// 1-based page number. `0` is treated as `1`.
    pub page: u32,
    pub page_size: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// The search term, trimmed, or `None` when blank.
    #[must_use]
    pub fn term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    #[must_use]
    pub const fn effective_page(&self) -> u32 {
        if self.page == 0 { 1 } else { self.page }
    }

    #[must_use]
    pub const fn effective_page_size(&self) -> u32 {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    /// Row offset for SQL `OFFSET`, capped at the largest value `SQLite`
    /// accepts so a far-out page reads as empty instead of failing.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        let offset =
            (self.effective_page() as u64 - 1).saturating_mul(self.effective_page_size() as u64);
        if offset > MAX_OFFSET { MAX_OFFSET } else { offset }
    }
}

/// One page of a filtered, ordered list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, query: &ListQuery, total: u64) -> Self {
        Self {
            items,
            page: query.effective_page(),
            page_size: query.effective_page_size(),
            total,
        }
    }

    /// Number of pages; at least 1 so an empty list still has a first page.
    #[must_use]
    pub const fn num_pages(&self) -> u64 {
        let size = self.page_size as u64;
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(size)
        }
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.page as u64) < self.num_pages()
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

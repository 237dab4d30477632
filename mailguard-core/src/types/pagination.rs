use serde::{Deserialize, Serialize};

/// Rows per page requested by every table.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Upper bound accepted by [`ListQuery::validated`].
pub const MAX_PAGE_SIZE: u32 = 100;

// ============ Pagination ============

/// Pagination block of a list response.
///
/// `currentPage` comes back from the server. The invariant `1 <= currentPage <= totalPages`
/// is maintained by [`crate::services::ResourceTable`], not by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(rename = "itemPerPage", alias = "itemsPerPage", default = "default_page_size")]
    pub items_per_page: u32,
}

fn first_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl PaginationMeta {
    /// Total pages, never below 1.
    pub fn page_count(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// `(start, end)` for the "Showing {start}-{end} of {total} results" footer.
    pub fn showing_range(&self) -> (u32, u32) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let page = self.current_page.max(1);
        let start = (page - 1)
            .saturating_mul(self.items_per_page)
            .saturating_add(1);
        let end = page
            .saturating_mul(self.items_per_page)
            .min(self.total_items);
        (start.min(end), end)
    }
}

/// Query for a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-indexed).
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl ListQuery {
    /// Builds a query, dropping an empty or whitespace-only search term.
    pub fn new(page: u32, limit: u32, search: &str) -> Self {
        let search = search.trim();
        Self {
            page,
            limit,
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    /// Clamp values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `limit` is clamped to `1..=MAX_PAGE_SIZE`
    #[must_use]
    pub fn validated(&self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.clamp(1, MAX_PAGE_SIZE),
            search: self.search.clone(),
        }
    }

    /// Query-string pairs in the order the admin API expects.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// One page of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

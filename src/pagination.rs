//! Pagination metadata and list-query parameters.

use serde::{Deserialize, Serialize};

/// Default page number when neither the response nor the query supplies one.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size when neither the response nor the query supplies one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Pagination window of the most recent list call.
///
/// Only meaningful immediately after a successful list. Create, update, and
/// delete do not adjust `total`/`total_pages`; the counts go stale until the
/// next list call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total entities across all pages
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            total: 0,
            total_pages: 0,
        }
    }
}

/// Query types that may carry a page/limit request.
///
/// The store falls back to these values when a list response omits its own
/// pagination fields. Both default to `None` for queries that do not
/// paginate.
pub trait ListQuery {
    /// Requested page number, if any.
    fn page(&self) -> Option<u32> {
        None
    }

    /// Requested page size, if any.
    fn limit(&self) -> Option<u32> {
        None
    }
}

/// A plain page/limit query, sufficient for resources without extra filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Requested page number (1-based)
    pub page: Option<u32>,
    /// Requested page size
    pub limit: Option<u32>,
}

impl PageQuery {
    /// Create a query for a specific page and limit.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

impl ListQuery for PageQuery {
    fn page(&self) -> Option<u32> {
        self.page
    }

    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

impl ListQuery for () {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pagination() {
        let p = Pagination::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 10);
        assert_eq!(p.total, 0);
        assert_eq!(p.total_pages, 0);
    }

    #[test]
    fn page_query_accessors() {
        let q = PageQuery::new(2, 5);
        assert_eq!(q.page(), Some(2));
        assert_eq!(q.limit(), Some(5));

        let q = PageQuery::default();
        assert_eq!(q.page(), None);
        assert_eq!(q.limit(), None);
    }

    #[test]
    fn serialization_camel_case() {
        let p = Pagination {
            page: 2,
            limit: 5,
            total: 13,
            total_pages: 3,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"totalPages\":3"));

        let parsed: Pagination = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }
}

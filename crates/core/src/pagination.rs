//! Page/limit pagination.
//!
//! Converts the textual `page` and `limit` query parameters into an
//! offset/limit plan and computes page metadata from a row count. The
//! count and the windowed select run as separate statements, so under
//! concurrent writes the metadata and the returned window may disagree
//! slightly. That gap is accepted.

use serde::Serialize;

/// Page number used when the request omits or garbles `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Rows per page used when the request omits or garbles `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Parse a textual parameter, clamping anything absent, non-numeric or
/// below one to `default`.
pub fn clamp_param(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

/// Normalized pagination request. Both fields are always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

/// The limit/offset pair used to window a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPlan {
    pub limit: i64,
    pub offset: i64,
}

impl PageRequest {
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: clamp_param(page, DEFAULT_PAGE),
            limit: clamp_param(limit, DEFAULT_LIMIT),
        }
    }

    /// `offset = (page - 1) * limit`, saturating instead of overflowing.
    pub fn plan(&self) -> QueryPlan {
        QueryPlan {
            limit: self.limit,
            offset: (self.page - 1).saturating_mul(self.limit),
        }
    }

    /// Page metadata for `total_items` rows. Items are filled in by the caller.
    pub fn summarize(&self, total_items: i64) -> PageInfo {
        let total_items = total_items.max(0);
        // Ceiling division; limit is never below one.
        let pages = total_items / self.limit + i64::from(total_items % self.limit != 0);

        PageInfo {
            current_page: self.page,
            limit: self.limit,
            total_items,
            pages,
            has_next: self.page < pages,
            has_previous: pages > 0 && self.page > 1,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Pagination metadata, serialized in camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: i64,
    pub limit: i64,
    pub total_items: i64,
    pub pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    pub fn with_items<T>(self, items: Vec<T>) -> Paginated<T> {
        Paginated { info: self, items }
    }
}

/// Page metadata plus the page's items.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    #[serde(flatten)]
    pub info: PageInfo,
    pub items: Vec<T>,
}

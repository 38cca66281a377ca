//! Pagination types
//!
//! Every history listing takes a `PageQuery` and returns a `Paged<T>` so the
//! total count always travels with the page it was computed for.

use serde::{Deserialize, Serialize};

/// Default page size when the client sends nothing (or garbage)
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Query params for paginated listings (`?limit=&offset=`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl PageQuery {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }.normalized()
    }

    /// Clamp out-of-range values: `limit <= 0` falls back to the default,
    /// negative offsets fall back to 0.
    pub fn normalized(self) -> Self {
        Self {
            limit: if self.limit <= 0 {
                DEFAULT_PAGE_LIMIT
            } else {
                self.limit
            },
            offset: self.offset.max(0),
        }
    }
}

/// One page of results plus the total count as of the same read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    pub total: i64,
    pub items: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_applies_defaults() {
        let q = PageQuery::new(0, -5);
        assert_eq!(q.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(q.offset, 0);

        let q = PageQuery::new(-1, 30);
        assert_eq!(q.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(q.offset, 30);

        let q = PageQuery::new(25, 50);
        assert_eq!(q.limit, 25);
        assert_eq!(q.offset, 50);
    }
}

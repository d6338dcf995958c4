//! Offset pagination
//!
//! Shared by the order listing and per-user listing endpoints.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Pagination block returned next to every order listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_orders: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Compute the block from the page requested, the rows actually
    /// returned, and the unfiltered-by-paging total.
    pub fn compute(page: u32, limit: u32, returned: usize, total: u64) -> Self {
        let (page, limit) = normalize(page, limit);
        let skip = skip(page, limit);
        Self {
            current_page: page,
            total_pages: total.div_ceil(limit as u64) as u32,
            total_orders: total,
            has_next: skip + (returned as u64) < total,
            has_prev: page > 1,
        }
    }
}

/// Clamp page and limit to sane minimums (page 1, limit 1)
pub fn normalize(page: u32, limit: u32) -> (u32, u32) {
    (page.max(1), limit.max(1))
}

/// Offset of the first row for `page`
pub fn skip(page: u32, limit: u32) -> u64 {
    let (page, limit) = normalize(page, limit);
    (page as u64 - 1) * limit as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page_of_fifteen() {
        // 15 orders, limit 10: page 2 returns the trailing 5
        let p = Pagination::compute(2, 10, 5, 15);
        assert_eq!(p.current_page, 2);
        assert_eq!(p.total_pages, 2);
        assert_eq!(p.total_orders, 15);
        assert!(!p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn first_page_with_more_to_come() {
        let p = Pagination::compute(1, 10, 10, 15);
        assert!(p.has_next);
        assert!(!p.has_prev);
        assert_eq!(p.total_pages, 2);
    }

    #[test]
    fn empty_collection() {
        let p = Pagination::compute(1, 10, 0, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
    }

    #[test]
    fn zero_page_and_limit_are_clamped() {
        assert_eq!(normalize(0, 0), (1, 1));
        assert_eq!(skip(0, 10), 0);
        assert_eq!(skip(3, 10), 20);
    }
}

//! Order listing parameters
//!
//! Query-string shape of `GET /api/order`:
//! `?page=1&limit=10&search=john&status=Confirmed&sortBy=orderDate&sortOrder=desc`

use chrono::NaiveDate;
use serde::Deserialize;

use super::paging::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::db::models::OrderStatus;
use crate::utils::AppError;

/// Listing filter: free-text search, exact status, paging and sorting
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
    /// Export only: inclusive orderDate range, applied when both are present
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: String::new(),
            status: None,
            sort_by: None,
            sort_order: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl OrderListQuery {
    /// Lowercased search term, or None when blank
    pub fn search_term(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Order-date bounds as RFC 3339 instants: start of `startDate` through
    /// end of `endDate`. None unless both dates were supplied.
    pub fn date_range(&self) -> Option<(String, String)> {
        let start = self.start_date?.and_hms_opt(0, 0, 0)?.and_utc();
        let end = self.end_date?.and_hms_opt(23, 59, 59)?.and_utc();
        Some((start.to_rfc3339(), end.to_rfc3339()))
    }

    /// Exact status filter; rejects values outside the five-value enum
    pub fn status_filter(&self) -> Result<Option<OrderStatus>, AppError> {
        match self.status.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }

    /// Whitelisted sort column (defaults to orderDate). Anything outside the
    /// whitelist falls back to the default rather than reaching the query.
    pub fn sort_field(&self) -> &'static str {
        match self.sort_by.as_deref() {
            Some("customerName") => "customerName",
            Some("totalAmount") => "totalAmount",
            Some("quantity") => "quantity",
            Some("status") => "status",
            Some("deliveryDate") => "deliveryDate",
            _ => "orderDate",
        }
    }

    /// `ASC` or `DESC` (defaults to descending)
    pub fn sort_direction(&self) -> &'static str {
        match self.sort_order.as_deref() {
            Some("asc") => "ASC",
            _ => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_page_one_limit_ten_order_date_desc() {
        let q = OrderListQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
        assert_eq!(q.sort_field(), "orderDate");
        assert_eq!(q.sort_direction(), "DESC");
        assert!(q.search_term().is_none());
        assert!(q.status_filter().unwrap().is_none());
    }

    #[test]
    fn search_term_is_lowercased() {
        let q = OrderListQuery {
            search: "  John ".to_string(),
            ..Default::default()
        };
        assert_eq!(q.search_term().as_deref(), Some("john"));
    }

    #[test]
    fn date_range_needs_both_bounds() {
        let lone_start = OrderListQuery {
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            ..Default::default()
        };
        assert!(lone_start.date_range().is_none());

        let q = OrderListQuery {
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 5),
            ..Default::default()
        };
        let (start, end) = q.date_range().unwrap();
        assert!(start.starts_with("2025-03-01T00:00:00"));
        assert!(end.starts_with("2025-03-05T23:59:59"));
    }

    #[test]
    fn invalid_status_filter_is_rejected() {
        let q = OrderListQuery {
            status: Some("Teleported".to_string()),
            ..Default::default()
        };
        assert!(q.status_filter().is_err());
    }

    #[test]
    fn unknown_sort_field_falls_back_to_order_date() {
        let q = OrderListQuery {
            sort_by: Some("orderId; DROP TABLE order".to_string()),
            ..Default::default()
        };
        assert_eq!(q.sort_field(), "orderDate");
    }
}

//! Order Repository
//!
//! Listing, aggregation and mutation of the `order` table. The filter
//! surface (search / status / paging / sorting) comes from
//! [`OrderListQuery`]; sort columns are whitelisted there, so the only
//! dynamic SQL here is the presence or absence of WHERE clauses — every
//! value travels as a bound parameter.

use serde::{Deserialize, Serialize};

use super::{
    BaseRepository, CountRow, RepoError, RepoResult, create_content, merge_record,
    parse_record_id,
};
use crate::db::models::{Order, OrderStatus, OrderUpdate};
use crate::orders::paging;
use crate::orders::query::OrderListQuery;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const SEARCH_CLAUSE: &str = "(string::lowercase(customerName) CONTAINS $search \
     OR string::lowercase(email) CONTAINS $search \
     OR string::lowercase(orderId) CONTAINS $search)";

// orderDate is stored as an RFC 3339 string; cast both sides so the
// comparison happens on instants, not text.
const DATE_RANGE_CLAUSE: &str = "(<datetime> orderDate >= <datetime> $startDate \
     AND <datetime> orderDate <= <datetime> $endDate)";

/// Per-status aggregation bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBucket {
    pub status: OrderStatus,
    pub count: i64,
    pub total_amount: f64,
}

/// Aggregated order statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub by_status: Vec<StatusBucket>,
    pub total_orders: u64,
    pub total_revenue: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GrandTotalRow {
    count: i64,
    total_amount: Option<f64>,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a fully assembled order (one durable write)
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        create_content(self.base.db(), "order", &order).await
    }

    /// Filtered, sorted, paginated listing. Returns the page of orders and
    /// the total count matching the filter (pre-pagination).
    pub async fn list(
        &self,
        query: &OrderListQuery,
        status: Option<OrderStatus>,
    ) -> RepoResult<(Vec<Order>, u64)> {
        let search = query.search_term();
        let (page, limit) = paging::normalize(query.page, query.limit);
        let start = paging::skip(page, limit) as i64;

        let where_clause = filter_clause(search.is_some(), status.is_some(), false);
        let list_sql = format!(
            "SELECT * FROM order{where_clause} ORDER BY {} {} LIMIT $limit START $start",
            query.sort_field(),
            query.sort_direction(),
        );
        let count_sql = format!("SELECT count() AS count FROM order{where_clause} GROUP ALL");

        let mut result = self
            .base
            .db()
            .query(list_sql)
            .query(count_sql)
            .bind(("search", search.unwrap_or_default()))
            .bind(("status", status_param(status)))
            .bind(("limit", limit as i64))
            .bind(("start", start))
            .await?;

        let orders: Vec<Order> = result.take(0)?;
        let counts: Vec<CountRow> = result.take(1)?;
        let total = counts.first().map(|c| c.count as u64).unwrap_or(0);
        Ok((orders, total))
    }

    /// Listing without the page/limit cap, for report generation. On top of
    /// the listing filters this honors an inclusive orderDate range.
    pub async fn export(
        &self,
        query: &OrderListQuery,
        status: Option<OrderStatus>,
    ) -> RepoResult<Vec<Order>> {
        let search = query.search_term();
        let range = query.date_range();
        let where_clause = filter_clause(search.is_some(), status.is_some(), range.is_some());
        let sql = format!("SELECT * FROM order{where_clause} ORDER BY orderDate DESC");

        let (start_date, end_date) = range.unwrap_or_default();
        let mut result = self
            .base
            .db()
            .query(sql)
            .bind(("search", search.unwrap_or_default()))
            .bind(("status", status_param(status)))
            .bind(("startDate", start_date))
            .bind(("endDate", end_date))
            .await?;

        let orders: Vec<Order> = result.take(0)?;
        Ok(orders)
    }

    /// Fetch by database id (`order:key` or bare key)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing = parse_record_id("order", id);
        let order: Option<Order> = self.base.db().select(thing).await?;
        Ok(order)
    }

    /// Fetch by generated human-readable reference (EG...)
    pub async fn find_by_order_id(&self, order_id: &str) -> RepoResult<Option<Order>> {
        let order_id = order_id.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE orderId = $orderId LIMIT 1")
            .bind(("orderId", order_id))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Partial update. The derived total is recomputed inside the patch only
    /// when both quantity and cylinder were supplied together.
    pub async fn update(&self, id: &str, mut patch: OrderUpdate) -> RepoResult<Order> {
        patch.apply_total_recompute();
        let thing = parse_record_id("order", id);
        merge_record(self.base.db(), thing, &patch)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Unconditional status transition (no workflow guard)
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let thing = parse_record_id("order", id);
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status")
            .bind(("thing", thing))
            .bind(("status", status.as_str().to_string()))
            .await?;

        result
            .take::<Option<Order>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Hard delete. No tombstone, no audit write on this path.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("order", id);
        let existing: Option<Order> = self.base.db().select(thing.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!("Order {} not found", id)));
        }

        let _: Option<Order> = self.base.db().delete(thing).await?;
        Ok(true)
    }

    /// Counts and revenue grouped by status, plus grand totals
    pub async fn stats(&self) -> RepoResult<OrderStats> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT status, count() AS count, math::sum(totalAmount) AS totalAmount \
                 FROM order GROUP BY status",
            )
            .query(
                "SELECT count() AS count, math::sum(totalAmount) AS totalAmount \
                 FROM order GROUP ALL",
            )
            .await?;

        let by_status: Vec<StatusBucket> = result.take(0)?;
        let grand: Vec<GrandTotalRow> = result.take(1)?;
        let (total_orders, total_revenue) = grand
            .first()
            .map(|g| (g.count as u64, g.total_amount.unwrap_or(0.0)))
            .unwrap_or((0, 0.0));

        Ok(OrderStats {
            by_status,
            total_orders,
            total_revenue,
        })
    }

    /// Paginated orders for one user, newest first
    pub async fn find_by_user(
        &self,
        user_id: &str,
        page: u32,
        limit: u32,
    ) -> RepoResult<(Vec<Order>, u64)> {
        let user = parse_record_id("user", user_id).to_string();
        let (page, limit) = paging::normalize(page, limit);
        let start = paging::skip(page, limit) as i64;

        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM order WHERE userId = $user \
                 ORDER BY orderDate DESC LIMIT $limit START $start",
            )
            .query("SELECT count() AS count FROM order WHERE userId = $user GROUP ALL")
            .bind(("user", user))
            .bind(("limit", limit as i64))
            .bind(("start", start))
            .await?;

        let orders: Vec<Order> = result.take(0)?;
        let counts: Vec<CountRow> = result.take(1)?;
        let total = counts.first().map(|c| c.count as u64).unwrap_or(0);
        Ok((orders, total))
    }
}

fn filter_clause(has_search: bool, has_status: bool, has_range: bool) -> String {
    let mut conditions: Vec<&str> = Vec::new();
    if has_search {
        conditions.push(SEARCH_CLAUSE);
    }
    if has_status {
        conditions.push("status = $status");
    }
    if has_range {
        conditions.push(DATE_RANGE_CLAUSE);
    }
    if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    }
}

fn status_param(status: Option<OrderStatus>) -> String {
    status.map(|s| s.as_str().to_string()).unwrap_or_default()
}

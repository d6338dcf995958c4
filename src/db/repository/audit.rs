//! Audit Repository
//!
//! Append-only trail for order mutations. Writes are fire-and-forget: a
//! failed audit insert is logged and swallowed so it can never fail the
//! order operation that triggered it.

use super::{BaseRepository, RepoResult, create_content};
use crate::db::models::AuditRecord;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::warn;

#[derive(Clone)]
pub struct AuditRepository {
    base: BaseRepository,
}

impl AuditRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Append a record; logs and swallows any failure.
    pub async fn record(&self, entry: AuditRecord) {
        if let Err(e) = create_content::<AuditRecord>(self.base.db(), "audit", &entry).await {
            warn!(
                target: "audit",
                error = %e,
                order_id = %entry.order_id,
                action = ?entry.action,
                "Failed to write audit record"
            );
        }
    }

    /// Trail for one order, newest first
    pub async fn find_by_order(&self, order_id: &str) -> RepoResult<Vec<AuditRecord>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM audit WHERE orderId = $orderId ORDER BY timestamp DESC")
            .bind(("orderId", order_id.to_string()))
            .await?;
        let records: Vec<AuditRecord> = result.take(0)?;
        Ok(records)
    }
}

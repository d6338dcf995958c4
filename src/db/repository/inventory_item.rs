//! Inventory Repository
//!
//! Cylinder catalog. No uniqueness constraints: the business keeps several
//! rows for the same product across suppliers.

use super::{BaseRepository, RepoError, RepoResult, create_content, merge_record, parse_record_id};
use crate::db::models::{InventoryItem, InventoryItemUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct InventoryRepository {
    base: BaseRepository,
}

impl InventoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, item: InventoryItem) -> RepoResult<InventoryItem> {
        create_content(self.base.db(), "inventory", &item).await
    }

    pub async fn find_all(&self) -> RepoResult<Vec<InventoryItem>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM inventory ORDER BY name ASC")
            .await?;
        let items: Vec<InventoryItem> = result.take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<InventoryItem>> {
        let item: Option<InventoryItem> = self
            .base
            .db()
            .select(parse_record_id("inventory", id))
            .await?;
        Ok(item)
    }

    pub async fn update(&self, id: &str, patch: InventoryItemUpdate) -> RepoResult<InventoryItem> {
        if let Some(price) = patch.price
            && (!price.is_finite() || price < 0.0)
        {
            return Err(RepoError::Validation(
                "price must be a non-negative number".to_string(),
            ));
        }
        if let Some(stock) = patch.stock
            && stock < 0
        {
            return Err(RepoError::Validation("stock must not be negative".to_string()));
        }

        let thing = parse_record_id("inventory", id);
        merge_record(self.base.db(), thing, &patch)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Inventory item {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("inventory", id);
        let existing: Option<InventoryItem> = self.base.db().select(thing.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!(
                "Inventory item {} not found",
                id
            )));
        }
        let _: Option<InventoryItem> = self.base.db().delete(thing).await?;
        Ok(true)
    }
}

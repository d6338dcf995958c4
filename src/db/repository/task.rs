//! Task Repository
//!
//! Delivery assignments. References to drivers and orders are weak: a task
//! may point at a deleted driver or a reference code no order carries.

use super::{BaseRepository, RepoError, RepoResult, create_content, merge_record, parse_record_id};
use crate::db::models::{Task, TaskUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct TaskRepository {
    base: BaseRepository,
}

impl TaskRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, task: Task) -> RepoResult<Task> {
        create_content(self.base.db(), "task", &task).await
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Task>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM task ORDER BY deliveryDate ASC")
            .await?;
        let tasks: Vec<Task> = result.take(0)?;
        Ok(tasks)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Task>> {
        let task: Option<Task> = self.base.db().select(parse_record_id("task", id)).await?;
        Ok(task)
    }

    pub async fn update(&self, id: &str, patch: TaskUpdate) -> RepoResult<Task> {
        let thing = parse_record_id("task", id);
        merge_record(self.base.db(), thing, &patch)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Task {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("task", id);
        let existing: Option<Task> = self.base.db().select(thing.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!("Task {} not found", id)));
        }
        let _: Option<Task> = self.base.db().delete(thing).await?;
        Ok(true)
    }
}

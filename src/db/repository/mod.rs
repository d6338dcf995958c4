//! Repository Module
//!
//! CRUD access to the SurrealDB tables. One repository per entity; every
//! handler goes through this layer and maps [`RepoError`] to `AppError` at
//! the boundary.

pub mod audit;
pub mod driver;
pub mod employee;
pub mod inventory_item;
pub mod order;
pub mod task;
pub mod user;

// Re-exports
pub use audit::AuditRepository;
pub use driver::DriverRepository;
pub use employee::EmployeeRepository;
pub use inventory_item::InventoryRepository;
pub use order::OrderRepository;
pub use task::TaskRepository;
pub use user::UserRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for crate::utils::AppError {
    fn from(err: RepoError) -> Self {
        use crate::utils::AppError;
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Resolve a path-supplied id into a RecordId for `table`.
///
/// Accepts both the full `table:key` form and the bare key.
pub fn parse_record_id(table: &str, id: &str) -> RecordId {
    id.parse()
        .unwrap_or_else(|_| RecordId::from_table_key(table, id))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Row shape of `SELECT count() AS count ... GROUP ALL`
#[derive(Debug, serde::Deserialize)]
pub(crate) struct CountRow {
    pub count: i64,
}

/// `CREATE {table} CONTENT $data`, letting the database mint the record id.
///
/// The serialized `id` field (always `null` on fresh records) is stripped
/// before binding so the store assigns its own key.
pub(crate) async fn create_content<T>(db: &Surreal<Db>, table: &str, record: &T) -> RepoResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut data = serde_json::to_value(record).map_err(|e| RepoError::Database(e.to_string()))?;
    if let Some(obj) = data.as_object_mut() {
        obj.remove("id");
    }

    let mut result = db
        .query(format!("CREATE {table} CONTENT $data"))
        .bind(("data", data))
        .await?;

    let created: Option<T> = result.take(0)?;
    created.ok_or_else(|| RepoError::Database(format!("Failed to create {table} record")))
}

/// `UPDATE $thing MERGE $patch`; `None` when the record does not exist.
pub(crate) async fn merge_record<T, P>(
    db: &Surreal<Db>,
    thing: RecordId,
    patch: &P,
) -> RepoResult<Option<T>>
where
    T: DeserializeOwned,
    P: Serialize,
{
    let patch_value =
        serde_json::to_value(patch).map_err(|e| RepoError::Database(e.to_string()))?;

    let mut result = db
        .query("UPDATE $thing MERGE $patch")
        .bind(("thing", thing))
        .bind(("patch", patch_value))
        .await?;

    Ok(result.take::<Option<T>>(0)?)
}

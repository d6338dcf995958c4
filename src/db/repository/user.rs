//! User Repository
//!
//! Customer accounts. Email is the natural key: duplicates are rejected
//! with a 409 at the boundary. Passwords arrive hashed from the model
//! layer on create; a password inside an update patch is hashed here.

use super::{
    BaseRepository, CountRow, RepoError, RepoResult, create_content, merge_record,
    parse_record_id,
};
use crate::db::models::{User, UserSummary, UserUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, user: User) -> RepoResult<User> {
        if self.email_taken(&user.email, None).await? {
            return Err(RepoError::Duplicate(format!(
                "User with email {} already exists",
                user.email
            )));
        }
        create_content(self.base.db(), "user", &user).await
    }

    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self.base.db().select("user").await?;
        Ok(users)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let user: Option<User> = self.base.db().select(parse_record_id("user", id)).await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Name/email projection for a batch of user ids. Missing ids are simply
    /// absent from the result, dangling references stay dangling.
    pub async fn find_summaries(&self, ids: Vec<surrealdb::RecordId>) -> RepoResult<Vec<UserSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut result = self
            .base
            .db()
            .query("SELECT id, username, email FROM user WHERE id INSIDE $ids")
            .bind(("ids", ids))
            .await?;
        let summaries: Vec<UserSummary> = result.take(0)?;
        Ok(summaries)
    }

    pub async fn update(&self, id: &str, mut patch: UserUpdate) -> RepoResult<User> {
        let thing = parse_record_id("user", id);

        if let Some(email) = patch.email.as_deref()
            && self.email_taken(email, Some(&thing)).await?
        {
            return Err(RepoError::Duplicate(format!(
                "User with email {} already exists",
                email
            )));
        }
        if let Some(password) = patch.password.as_deref() {
            let hash = User::hash_password(password)
                .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;
            patch.password = Some(hash);
        }

        merge_record(self.base.db(), thing, &patch)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("user", id);
        let existing: Option<User> = self.base.db().select(thing.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!("User {} not found", id)));
        }
        let _: Option<User> = self.base.db().delete(thing).await?;
        Ok(true)
    }

    async fn email_taken(
        &self,
        email: &str,
        exclude: Option<&surrealdb::RecordId>,
    ) -> RepoResult<bool> {
        let sql = match exclude {
            Some(_) => {
                "SELECT count() AS count FROM user \
                 WHERE email = $email AND id != $exclude GROUP ALL"
            }
            None => "SELECT count() AS count FROM user WHERE email = $email GROUP ALL",
        };
        let mut query = self.base.db().query(sql).bind(("email", email.to_string()));
        if let Some(id) = exclude {
            query = query.bind(("exclude", id.clone()));
        }
        let mut result = query.await?;
        let counts: Vec<CountRow> = result.take(0)?;
        Ok(counts.first().map(|c| c.count).unwrap_or(0) > 0)
    }
}

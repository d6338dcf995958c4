//! Driver Repository
//!
//! Delivery fleet. NIC uniquely identifies a driver.

use super::{
    BaseRepository, CountRow, RepoError, RepoResult, create_content, merge_record,
    parse_record_id,
};
use crate::db::models::{Driver, DriverUpdate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct DriverRepository {
    base: BaseRepository,
}

impl DriverRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, driver: Driver) -> RepoResult<Driver> {
        if self.nic_taken(&driver.nic, None).await? {
            return Err(RepoError::Duplicate(format!(
                "Driver with NIC {} already exists",
                driver.nic
            )));
        }
        create_content(self.base.db(), "driver", &driver).await
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Driver>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM driver ORDER BY name ASC")
            .await?;
        let drivers: Vec<Driver> = result.take(0)?;
        Ok(drivers)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Driver>> {
        let driver: Option<Driver> = self.base.db().select(parse_record_id("driver", id)).await?;
        Ok(driver)
    }

    pub async fn update(&self, id: &str, patch: DriverUpdate) -> RepoResult<Driver> {
        let thing = parse_record_id("driver", id);

        if let Some(nic) = patch.nic.as_deref()
            && self.nic_taken(nic, Some(&thing)).await?
        {
            return Err(RepoError::Duplicate(format!(
                "Driver with NIC {} already exists",
                nic
            )));
        }

        merge_record(self.base.db(), thing, &patch)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Driver {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("driver", id);
        let existing: Option<Driver> = self.base.db().select(thing.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!("Driver {} not found", id)));
        }
        let _: Option<Driver> = self.base.db().delete(thing).await?;
        Ok(true)
    }

    async fn nic_taken(&self, nic: &str, exclude: Option<&RecordId>) -> RepoResult<bool> {
        let sql = match exclude {
            Some(_) => {
                "SELECT count() AS count FROM driver \
                 WHERE NIC = $nic AND id != $exclude GROUP ALL"
            }
            None => "SELECT count() AS count FROM driver WHERE NIC = $nic GROUP ALL",
        };
        let mut query = self.base.db().query(sql).bind(("nic", nic.to_string()));
        if let Some(id) = exclude {
            query = query.bind(("exclude", id.clone()));
        }
        let mut result = query.await?;
        let counts: Vec<CountRow> = result.take(0)?;
        Ok(counts.first().map(|c| c.count).unwrap_or(0) > 0)
    }
}

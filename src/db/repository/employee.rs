//! Employee Repository
//!
//! Staff records plus the lookup used by sign-in (`empId` first, email as
//! fallback). Three fields are unique across the table: empId, email, NIC.

use super::{
    BaseRepository, CountRow, RepoError, RepoResult, create_content, merge_record,
    parse_record_id,
};
use crate::db::models::{Employee, EmployeeUpdate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, employee: Employee) -> RepoResult<Employee> {
        self.assert_unique("empId", &employee.emp_id, None).await?;
        self.assert_unique("email", &employee.email, None).await?;
        self.assert_unique("NIC", &employee.nic, None).await?;
        create_content(self.base.db(), "employee", &employee).await
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY empId ASC")
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> = self
            .base
            .db()
            .select(parse_record_id("employee", id))
            .await?;
        Ok(employee)
    }

    /// Sign-in lookup: the supplied username is matched against empId, then
    /// against email.
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE empId = $u OR email = $u LIMIT 1")
            .bind(("u", username.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    pub async fn update(&self, id: &str, patch: EmployeeUpdate) -> RepoResult<Employee> {
        let thing = parse_record_id("employee", id);

        if let Some(emp_id) = patch.emp_id.as_deref() {
            self.assert_unique("empId", emp_id, Some(&thing)).await?;
        }
        if let Some(email) = patch.email.as_deref() {
            self.assert_unique("email", email, Some(&thing)).await?;
        }
        if let Some(nic) = patch.nic.as_deref() {
            self.assert_unique("NIC", nic, Some(&thing)).await?;
        }

        merge_record(self.base.db(), thing, &patch)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id("employee", id);
        let existing: Option<Employee> = self.base.db().select(thing.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!("Employee {} not found", id)));
        }
        let _: Option<Employee> = self.base.db().delete(thing).await?;
        Ok(true)
    }

    // field is always one of the three literals above, never caller input
    async fn assert_unique(
        &self,
        field: &'static str,
        value: &str,
        exclude: Option<&RecordId>,
    ) -> RepoResult<()> {
        let sql = match exclude {
            Some(_) => format!(
                "SELECT count() AS count FROM employee \
                 WHERE {field} = $value AND id != $exclude GROUP ALL"
            ),
            None => format!("SELECT count() AS count FROM employee WHERE {field} = $value GROUP ALL"),
        };
        let mut query = self.base.db().query(sql).bind(("value", value.to_string()));
        if let Some(id) = exclude {
            query = query.bind(("exclude", id.clone()));
        }
        let mut result = query.await?;
        let counts: Vec<CountRow> = result.take(0)?;
        if counts.first().map(|c| c.count).unwrap_or(0) > 0 {
            return Err(RepoError::Duplicate(format!(
                "Employee with this {field} already exists"
            )));
        }
        Ok(())
    }
}

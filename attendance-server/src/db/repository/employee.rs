//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{EMPLOYEE_TABLE, Employee, EmployeeId};
use crate::scans::StatusSnapshot;
use shared::models::{
    DEFAULT_DEPARTMENT, DEFAULT_LUNCH_END, DEFAULT_LUNCH_START, DEFAULT_RATING,
    DEFAULT_SHIFT_END, DEFAULT_SHIFT_START, EmployeeCreate, EmployeeUpdate,
};
use shared::util::now_millis;
use surrealdb::Surreal;
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

    /// Find all employees ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY name")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id (`employee:key` or bare key)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = parse_record_id(EMPLOYEE_TABLE, id)?;
        self.find_by_record(&thing).await
    }

    pub async fn find_by_record(&self, thing: &EmployeeId) -> RepoResult<Option<Employee>> {
        let emp: Option<Employee> = self.base.db().select(thing.clone()).await?;
        Ok(emp)
    }

    /// Find employee by login
    pub async fn find_by_login(&self, login: &str) -> RepoResult<Option<Employee>> {
        let login_owned = login.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE login = $login LIMIT 1")
            .bind(("login", login_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        if self.find_by_login(&data.login).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Login '{}' already exists",
                data.login
            )));
        }

        let hash_pass = Employee::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;
        let now = now_millis();

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    login = $login,
                    hash_pass = $hash_pass,
                    name = $name,
                    position = $position,
                    department = $department,
                    status = $status,
                    work_status = $work_status,
                    current_location = $current_location,
                    rating = $rating,
                    penalties = $penalties,
                    shift_start = $shift_start,
                    shift_end = $shift_end,
                    lunch_start = $lunch_start,
                    lunch_end = $lunch_end,
                    created_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("login", data.login))
            .bind(("hash_pass", hash_pass))
            .bind(("name", data.name))
            .bind(("position", data.position))
            .bind((
                "department",
                data.department
                    .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
            ))
            .bind(("status", data.status.unwrap_or_default()))
            .bind(("work_status", data.work_status.unwrap_or_default()))
            .bind(("current_location", data.current_location.unwrap_or_default()))
            .bind(("rating", data.rating.unwrap_or(DEFAULT_RATING)))
            .bind(("penalties", data.penalties.unwrap_or(0)))
            .bind(("shift_start", data.shift_start.unwrap_or(DEFAULT_SHIFT_START)))
            .bind(("shift_end", data.shift_end.unwrap_or(DEFAULT_SHIFT_END)))
            .bind(("lunch_start", data.lunch_start.unwrap_or(DEFAULT_LUNCH_START)))
            .bind(("lunch_end", data.lunch_end.unwrap_or(DEFAULT_LUNCH_END)))
            .bind(("now", now))
            .await?
            .check()?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Partially update an employee
    ///
    /// Unset fields keep their stored value. A new password is re-hashed.
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let thing = parse_record_id(EMPLOYEE_TABLE, id)?;
        let existing = self
            .find_by_record(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        if let Some(ref new_login) = data.login
            && new_login != &existing.login
            && self.find_by_login(new_login).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Login '{}' already exists",
                new_login
            )));
        }

        let hash_pass = match data.password {
            Some(ref password) => Employee::hash_password(password)
                .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?,
            None => existing.hash_pass,
        };

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    login = $login,
                    hash_pass = $hash_pass,
                    name = $name,
                    position = $position,
                    department = $department,
                    status = $status,
                    work_status = $work_status,
                    current_location = $current_location,
                    rating = $rating,
                    penalties = $penalties,
                    shift_start = $shift_start,
                    shift_end = $shift_end,
                    lunch_start = $lunch_start,
                    lunch_end = $lunch_end,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("login", data.login.unwrap_or(existing.login)))
            .bind(("hash_pass", hash_pass))
            .bind(("name", data.name.unwrap_or(existing.name)))
            .bind(("position", data.position.unwrap_or(existing.position)))
            .bind(("department", data.department.unwrap_or(existing.department)))
            .bind(("status", data.status.unwrap_or(existing.status)))
            .bind(("work_status", data.work_status.unwrap_or(existing.work_status)))
            .bind((
                "current_location",
                data.current_location.unwrap_or(existing.current_location),
            ))
            .bind(("rating", data.rating.unwrap_or(existing.rating)))
            .bind(("penalties", data.penalties.unwrap_or(existing.penalties)))
            .bind(("shift_start", data.shift_start.unwrap_or(existing.shift_start)))
            .bind(("shift_end", data.shift_end.unwrap_or(existing.shift_end)))
            .bind(("lunch_start", data.lunch_start.unwrap_or(existing.lunch_start)))
            .bind(("lunch_end", data.lunch_end.unwrap_or(existing.lunch_end)))
            .bind(("now", now_millis()))
            .await?
            .check()?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Overwrite the scan-driven status fields (last write wins)
    pub async fn update_status(
        &self,
        thing: &EmployeeId,
        snapshot: &StatusSnapshot,
    ) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    work_status = $work_status,
                    current_location = $current_location,
                    last_check_in = $last_check_in,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("thing", thing.clone()))
            .bind(("work_status", snapshot.work_status))
            .bind(("current_location", snapshot.location))
            .bind(("last_check_in", snapshot.last_check_in))
            .bind(("now", now_millis()))
            .await?
            .check()?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", thing)))
    }

    /// Hard delete an employee
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(EMPLOYEE_TABLE, id)?;
        if self.find_by_record(&thing).await?.is_none() {
            return Err(RepoError::NotFound(format!("Employee {} not found", id)));
        }

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?
            .check()?;
        Ok(true)
    }
}

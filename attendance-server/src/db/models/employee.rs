//! Employee Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{
    ClockTime, DEFAULT_DEPARTMENT, DEFAULT_LUNCH_END, DEFAULT_LUNCH_START, DEFAULT_RATING,
    DEFAULT_SHIFT_END, DEFAULT_SHIFT_START, EmployeeStatus, Location, WorkStatus,
};
use surrealdb::RecordId;

use crate::scans::{Schedule, StatusSnapshot};

/// Employee ID type
pub type EmployeeId = RecordId;

/// Table name
pub const EMPLOYEE_TABLE: &str = "employee";

fn default_department() -> String {
    DEFAULT_DEPARTMENT.to_string()
}

fn default_rating() -> u8 {
    DEFAULT_RATING
}

fn default_shift_start() -> ClockTime {
    DEFAULT_SHIFT_START
}

fn default_shift_end() -> ClockTime {
    DEFAULT_SHIFT_END
}

fn default_lunch_start() -> ClockTime {
    DEFAULT_LUNCH_START
}

fn default_lunch_end() -> ClockTime {
    DEFAULT_LUNCH_END
}

/// Employee record
///
/// Serializes without the password hash; this is also the API response shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub login: String,
    #[serde(skip_serializing, default)]
    pub hash_pass: String,
    pub name: String,
    pub position: String,
    #[serde(default = "default_department")]
    pub department: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub work_status: WorkStatus,
    #[serde(default)]
    pub current_location: Location,
    #[serde(default)]
    pub last_check_in: Option<DateTime<Utc>>,
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default)]
    pub penalties: u32,
    #[serde(default = "default_shift_start")]
    pub shift_start: ClockTime,
    #[serde(default = "default_shift_end")]
    pub shift_end: ClockTime,
    #[serde(default = "default_lunch_start")]
    pub lunch_start: ClockTime,
    #[serde(default = "default_lunch_end")]
    pub lunch_end: ClockTime,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Employee {
    /// Status fields the scan interpreter reads and writes
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            work_status: self.work_status,
            location: self.current_location,
            last_check_in: self.last_check_in,
        }
    }

    pub fn schedule(&self) -> Schedule {
        Schedule {
            shift_start: self.shift_start,
            shift_end: self.shift_end,
            lunch_start: self.lunch_start,
            lunch_end: self.lunch_end,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

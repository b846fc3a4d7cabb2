//! Employee Model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ClockTime;

/// Default department for new employees
pub const DEFAULT_DEPARTMENT: &str = "IT";

/// Default integrity rating for new employees
pub const DEFAULT_RATING: u8 = 100;

/// Highest allowed rating
pub const MAX_RATING: u8 = 100;

/// Account status (admin controlled)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

/// Coarse on-shift state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    #[default]
    Offline,
    Online,
}

impl WorkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Online => "online",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence state within the shift
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Location {
    #[default]
    #[serde(rename = "Not in office")]
    NotInOffice,
    #[serde(rename = "In office")]
    InOffice,
    #[serde(rename = "On lunch")]
    OnLunch,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInOffice => "Not in office",
            Self::InOffice => "In office",
            Self::OnLunch => "On lunch",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create employee payload
///
/// Everything except identity and credentials falls back to the defaults
/// of a freshly hired, off-shift employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub login: String,
    pub password: String,
    pub name: String,
    pub position: String,
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub work_status: Option<WorkStatus>,
    pub current_location: Option<Location>,
    pub rating: Option<u8>,
    pub penalties: Option<u32>,
    pub shift_start: Option<ClockTime>,
    pub shift_end: Option<ClockTime>,
    pub lunch_start: Option<ClockTime>,
    pub lunch_end: Option<ClockTime>,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_status: Option<WorkStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalties: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_start: Option<ClockTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_end: Option<ClockTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch_start: Option<ClockTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch_end: Option<ClockTime>,
}

//! Scan Model

use super::serde_helpers;
use super::EmployeeId;
use serde::{Deserialize, Serialize};
use shared::models::{QrType, ScanStatus};
use surrealdb::RecordId;

/// Scan ID type
pub type ScanId = RecordId;

/// Scan record
///
/// `employee_*` fields are filled by list queries that follow the employee link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scan {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ScanId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee_id: EmployeeId,
    pub qr_code: String,
    pub qr_type: QrType,
    /// Scan instant (Unix millis)
    pub timestamp: i64,
    pub location: String,
    #[serde(default)]
    pub status: ScanStatus,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_department: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

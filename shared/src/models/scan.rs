//! Scan Model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location recorded when a scan does not name one
pub const DEFAULT_SCAN_LOCATION: &str = "Office Company N";

/// Kind of QR code that was scanned
///
/// Values outside the known set deserialize to [`QrType::Unknown`] so the
/// scan is still recorded with an error outcome instead of being refused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum QrType {
    CheckinOut,
    LunchBreak,
    #[serde(other)]
    Unknown,
}

impl QrType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckinOut => "checkin-out",
            Self::LunchBreak => "lunch-break",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for QrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a scan record: `pending` then exactly one of `processed` / `error`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    #[default]
    Pending,
    Processed,
    Error,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processed => "processed",
            Self::Error => "error",
        }
    }

    /// Whether the scan reached its final state
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submit scan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanCreate {
    /// Target employee. When absent the server may fall back to a configured login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub qr_code: String,
    pub qr_type: QrType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

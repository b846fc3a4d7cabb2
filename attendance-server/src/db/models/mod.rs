//! Database Models

// Serde helpers
pub mod serde_helpers;

pub mod employee;
pub mod scan;

// Re-exports
pub use employee::{EMPLOYEE_TABLE, Employee, EmployeeId};
pub use scan::{Scan, ScanId};

//! Scan processing
//!
//! - [`interpreter`] - pure decision function over status, schedule and time
//! - [`service`] - scan lifecycle: store pending, interpret, persist outcome

pub mod interpreter;
pub mod service;

pub use interpreter::{
    Interpretation, ScanAction, ScanFault, Schedule, StatusSnapshot, TOLERANCE, interpret,
};
pub use service::{ScanService, TEST_CHECKIN_CODE, TEST_LOCATION, TEST_LUNCH_CODE};

//! Data models
//!
//! Shared between attendance-server and its clients (via API).
//! Record IDs are rendered as `"table:key"` strings.

pub mod clock;
pub mod employee;
pub mod scan;

// Re-exports
pub use clock::*;
pub use employee::*;
pub use scan::*;

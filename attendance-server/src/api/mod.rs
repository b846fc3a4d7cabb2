//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness and database check
//! - [`auth`] - employee login
//! - [`employees`] - employee management
//! - [`scans`] - scan submission and history

pub mod auth;
pub mod employees;
pub mod health;
pub mod scans;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

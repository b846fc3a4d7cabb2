//! Shared types for the attendance tracker
//!
//! Common types used by the server and its clients: domain enums,
//! wall-clock schedule times, request/response DTOs and the unified
//! error system.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};

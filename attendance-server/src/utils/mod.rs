//! Utility module - shared helpers for handlers and services
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] - application error types (from shared::error)
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - business time zone helpers
//! - [`validation`] - request field validation

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

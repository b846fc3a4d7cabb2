//! Repository Module
//!
//! Data access for the SurrealDB tables.

pub mod employee;
pub mod scan;

// Re-exports
pub use employee::EmployeeRepository;
pub use scan::{NewScan, ScanRepository};

use shared::error::{AppError, ErrorCode};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID convention: "table:key" everywhere
// =============================================================================
//
// API paths may carry either "employee:abc" or the bare key "abc";
// `parse_record_id` normalizes both to a RecordId of the expected table.

/// Parse `"table:key"` or a bare key into a RecordId of `table`
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RepoError::Validation(format!("Invalid ID: {}", id)));
    }

    match id.parse::<RecordId>() {
        Ok(record) if record.table() == table => Ok(record),
        Ok(_) => Err(RepoError::Validation(format!(
            "Invalid ID: {} is not a {} id",
            id, table
        ))),
        Err(_) if !id.contains(':') => Ok(RecordId::from_table_key(table, id)),
        Err(_) => Err(RepoError::Validation(format!("Invalid ID: {}", id))),
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id_full_form() {
        let id = parse_record_id("employee", "employee:anna").unwrap();
        assert_eq!(id, RecordId::from_table_key("employee", "anna"));
    }

    #[test]
    fn test_parse_record_id_bare_key() {
        let id = parse_record_id("scan", "x1y2").unwrap();
        assert_eq!(id.table(), "scan");
        assert_eq!(id, RecordId::from_table_key("scan", "x1y2"));
    }

    #[test]
    fn test_parse_record_id_wrong_table() {
        assert!(matches!(
            parse_record_id("employee", "scan:abc"),
            Err(RepoError::Validation(_))
        ));
        assert!(parse_record_id("employee", "  ").is_err());
    }

    #[test]
    fn test_repo_error_to_app_error() {
        let err: AppError = RepoError::NotFound("Employee employee:x not found".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        let err: AppError = RepoError::Duplicate("Login 'a' already exists".into()).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
        let err: AppError = RepoError::Validation("bad".into()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}

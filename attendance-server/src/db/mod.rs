//! Database Module
//!
//! Embedded SurrealDB: RocksDB on disk for the server, in-memory engine for tests.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

/// Namespace used by the server
pub const NAMESPACE: &str = "attendance";
/// Database used by the server
pub const DATABASE: &str = "main";

/// Table and index definitions, idempotent
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
DEFINE INDEX IF NOT EXISTS employee_login ON TABLE employee FIELDS login UNIQUE;
DEFINE TABLE IF NOT EXISTS scan SCHEMALESS;
DEFINE INDEX IF NOT EXISTS scan_employee ON TABLE scan FIELDS employee_id;
DEFINE INDEX IF NOT EXISTS scan_timestamp ON TABLE scan FIELDS timestamp;
"#;

/// Database service - owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(path = %db_path, "Database opened (RocksDB)");
        Self::bootstrap(db).await
    }

    /// Fresh in-memory database
    pub async fn in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::bootstrap(db).await
    }

    async fn bootstrap(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}

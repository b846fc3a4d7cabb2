use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::scans::ScanService;
use crate::utils::AppError;

/// Database file name inside `work_dir/database`
const DB_FILE: &str = "attendance.db";

/// Server state - shared by every handler
///
/// Cheap to clone: the database handle and services are reference counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | db | Surreal<Db> | embedded database |
/// | scan_service | ScanService | scan lifecycle |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub scan_service: ScanService,
}

impl ServerState {
    /// Build the state around an opened database
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let scan_service = ScanService::new(
            db.clone(),
            config.timezone,
            config.fallback_employee_login.clone(),
        );
        Self {
            config,
            db,
            scan_service,
        }
    }

    /// Initialize server state
    ///
    /// 1. Working directory layout
    /// 2. Database (`work_dir/database/attendance.db`)
    /// 3. Services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config.ensure_work_dir_structure().map_err(|e| {
            AppError::internal(format!("Failed to create work directory structure: {e}"))
        })?;

        let db_path = config.database_dir().join(DB_FILE);
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// State over a fresh in-memory database
    pub async fn in_memory(config: Config) -> Result<Self, AppError> {
        let db_service = DbService::in_memory().await?;
        Ok(Self::new(config, db_service.db))
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}

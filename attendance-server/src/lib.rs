//! Attendance Server - employee attendance tracking backend
//!
//! # Overview
//!
//! Employees scan QR codes with the mobile client to check in and out and
//! to start and end lunch. Each scan is stored, interpreted against the
//! employee's current status and shift schedule, and finalized as
//! `processed` or `error` with a human-readable result.
//!
//! # Module layout
//!
//! ```text
//! attendance-server/src/
//! ├── core/          # configuration, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging
//! ├── scans/         # scan interpreter and scan service
//! ├── db/            # embedded SurrealDB, models, repositories
//! └── utils/         # logging, time, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod scans;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState, build_app};
pub use scans::{ScanService, interpret};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger
pub use utils::logger::init_logger;

use tracing_appender::non_blocking::WorkerGuard;

/// Prepare the process environment
///
/// Loads `.env`, reads the configuration and initializes logging. The
/// returned guard keeps the file log writer alive.
pub fn setup_environment() -> anyhow::Result<(Config, Option<WorkerGuard>)> {
    // .env is optional
    let _ = dotenv::dotenv();

    let config = Config::from_env()?;
    let log_dir = config.log_dir.as_deref().map(std::path::Path::new);
    let guard = init_logger(&config.log_level, log_dir)?;

    api::health::mark_started();
    Ok((config, guard))
}

pub fn print_banner() {
    println!(
        r#"
   ___  __  __                __
  / _ |/ /_/ /____ ___  ___/ /__ ____  _______
 / __ / __/ __/ -_) _ \/ _  / _ `/ _ \/ __/ -_)
/_/ |_\__/\__/\__/_//_/\_,_/\_,_/_//_/\__/\__/
    "#
    );
}

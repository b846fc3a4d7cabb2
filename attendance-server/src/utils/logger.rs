//! Logging Infrastructure
//!
//! Structured logging via `tracing`. Stdout always, plus a daily rolling file
//! when a log directory is configured.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log file prefix inside the log directory
const LOG_FILE_PREFIX: &str = "attendance-server.log";

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
/// with noisy dependencies quieted down.
fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{log_level},surrealdb=warn,rocksdb=warn,tower_http=info"
        ))
    })
}

/// Initialize the logger
///
/// Returns the file writer guard when file output is enabled; it must be
/// kept alive for the lifetime of the process or buffered lines are lost.
pub fn init_logger(log_level: &str, log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stdout);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_writer(non_blocking_file);

            tracing_subscriber::registry()
                .with(build_filter(log_level))
                .with(stdout_layer)
                .with(file_layer)
                .try_init()?;

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(build_filter(log_level))
                .with(stdout_layer)
                .try_init()?;

            Ok(None)
        }
    }
}

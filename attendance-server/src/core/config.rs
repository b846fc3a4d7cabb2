use std::path::PathBuf;

use chrono_tz::Tz;

use crate::utils::time::parse_timezone;
use crate::utils::{AppError, ErrorCode};

/// Login used for scans without an employee id when running in development
pub const DEV_FALLBACK_LOGIN: &str = "test1";

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | working directory (database, logs) |
/// | HTTP_PORT | 3001 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | TIMEZONE | UTC | business time zone for wall-clock decisions; an unknown name fails startup |
/// | FALLBACK_EMPLOYEE_LOGIN | test1 (development only) | login used when a scan omits employee_id |
/// | LOG_LEVEL | info | default log level |
/// | LOG_DIR | unset | enables daily rolling log files |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout (ms) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/attendance HTTP_PORT=8080 TIMEZONE=Europe/Moscow cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, holds the database
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Business time zone
    pub timezone: Tz,
    /// Login resolved when a scan arrives without an employee id
    pub fallback_employee_login: Option<String>,
    /// Default log level (RUST_LOG takes precedence)
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: Option<String>,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Missing or unparsable numeric variables fall back to their defaults.
    /// An unknown `TIMEZONE` is a configuration error: every scan window
    /// depends on it.
    pub fn from_env() -> Result<Self, AppError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let timezone = timezone_setting(std::env::var("TIMEZONE").ok().as_deref())?;

        let fallback_employee_login = match std::env::var("FALLBACK_EMPLOYEE_LOGIN") {
            Ok(login) if login.trim().is_empty() => None,
            Ok(login) => Some(login),
            Err(_) if environment == "development" => Some(DEV_FALLBACK_LOGIN.to_string()),
            Err(_) => None,
        };

        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            environment,
            timezone,
            fallback_employee_login,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        })
    }

    /// Override the working directory and port, keeping everything else
    ///
    /// Mostly used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Result<Self, AppError> {
        let mut config = Self::from_env()?;
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        Ok(config)
    }

    /// Database directory (`work_dir/database`)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Create the working directory layout
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// `TIMEZONE` value: unset or blank means UTC
fn timezone_setting(raw: Option<&str>) -> Result<Tz, AppError> {
    match raw.map(str::trim).filter(|name| !name.is_empty()) {
        None => Ok(Tz::UTC),
        Some(name) => parse_timezone(name).map_err(|e| {
            AppError::with_message(ErrorCode::ConfigError, format!("TIMEZONE: {}", e.message))
                .with_detail("TIMEZONE", name)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_dir() {
        let config = Config::with_overrides("/srv/attendance", 8080).unwrap();
        assert_eq!(
            config.database_dir(),
            PathBuf::from("/srv/attendance").join("database")
        );
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides("/tmp", 0).unwrap();
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());

        config.environment = "development".into();
        assert!(config.is_development());
    }

    #[test]
    fn test_timezone_setting_defaults_to_utc() {
        assert_eq!(timezone_setting(None).unwrap(), Tz::UTC);
        assert_eq!(timezone_setting(Some("  ")).unwrap(), Tz::UTC);
        assert_eq!(
            timezone_setting(Some("Europe/Moscow")).unwrap(),
            chrono_tz::Europe::Moscow
        );
    }

    #[test]
    fn test_unknown_timezone_is_config_error() {
        let err = timezone_setting(Some("Europe/Moscw")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.message, "TIMEZONE: Unknown time zone: Europe/Moscw");
        assert_eq!(err.details.unwrap()["TIMEZONE"], "Europe/Moscw");
    }
}

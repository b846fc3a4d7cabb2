//! Scan Service
//!
//! Drives one scan through its lifecycle:
//! resolve employee -> store `pending` -> interpret -> write status back -> finalize.
//! Scan faults never surface as request errors; they are stored on the scan.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DEFAULT_SCAN_LOCATION, QrType, ScanCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::interpreter::{Interpretation, ScanFault, interpret};
use crate::db::models::{EMPLOYEE_TABLE, EmployeeId, Scan};
use crate::db::repository::{
    EmployeeRepository, NewScan, RepoResult, ScanRepository, parse_record_id,
};
use crate::utils::time::day_bounds;

/// QR payload used by the check-in/out helper
pub const TEST_CHECKIN_CODE: &str = "mobile-pass://checkin-out";
/// QR payload used by the lunch helper
pub const TEST_LUNCH_CODE: &str = "mobile-pass://lunch-break";
/// Location recorded by the helpers
pub const TEST_LOCATION: &str = "Test office";

#[derive(Clone)]
pub struct ScanService {
    employees: EmployeeRepository,
    scans: ScanRepository,
    timezone: Tz,
    fallback_login: Option<String>,
}

impl ScanService {
    pub fn new(db: Surreal<Db>, timezone: Tz, fallback_login: Option<String>) -> Self {
        Self {
            employees: EmployeeRepository::new(db.clone()),
            scans: ScanRepository::new(db),
            timezone,
            fallback_login,
        }
    }

    /// Submit a scan at the current instant
    pub async fn submit(&self, req: ScanCreate) -> AppResult<Scan> {
        self.submit_at(req, Utc::now()).await
    }

    /// Submit a scan at `now`
    ///
    /// Returns the finalized scan. Its status is `processed` or `error`;
    /// an `error` scan is still a successful call.
    pub async fn submit_at(&self, req: ScanCreate, now: DateTime<Utc>) -> AppResult<Scan> {
        let employee_id = self.resolve_employee(req.employee_id.as_deref()).await?;

        let pending = self
            .scans
            .create(NewScan {
                employee_id: employee_id.clone(),
                qr_code: req.qr_code.clone(),
                qr_type: req.qr_type,
                location: req
                    .location
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SCAN_LOCATION.to_string()),
                timestamp: now.timestamp_millis(),
            })
            .await?;
        let scan_id = pending
            .id
            .ok_or_else(|| AppError::database("Scan stored without id"))?;

        let local_now = now.with_timezone(&self.timezone);
        let interpretation = match self
            .process(&employee_id, req.qr_type, &req.qr_code, &local_now)
            .await
        {
            Ok(interpretation) => interpretation,
            Err(e) => {
                tracing::error!(
                    scan_id = %scan_id,
                    employee_id = %employee_id,
                    error = %e,
                    "Scan processing failed"
                );
                Interpretation::rejected(ScanFault::Processing(e.to_string()))
            }
        };

        let scan = self
            .scans
            .finalize(&scan_id, interpretation.status, &interpretation.message)
            .await
            .map_err(|e| {
                // The employee write-back (if any) is already committed; the scan stays pending
                tracing::error!(
                    scan_id = %scan_id,
                    employee_id = %employee_id,
                    status = %interpretation.status,
                    message = %interpretation.message,
                    next_status = ?interpretation.next,
                    error = %e,
                    "Scan finalize failed"
                );
                e
            })?;

        tracing::info!(
            scan_id = %scan_id,
            employee_id = %employee_id,
            qr_type = %req.qr_type,
            status = %scan.status,
            message = %interpretation.message,
            "Scan processed"
        );

        Ok(scan)
    }

    /// Load the employee, interpret, write back a changed status
    async fn process(
        &self,
        employee_id: &EmployeeId,
        qr_type: QrType,
        qr_code: &str,
        now: &DateTime<Tz>,
    ) -> RepoResult<Interpretation> {
        let Some(employee) = self.employees.find_by_record(employee_id).await? else {
            return Ok(Interpretation::rejected(ScanFault::EmployeeNotFound));
        };

        let current = employee.snapshot();
        let interpretation = interpret(&current, &employee.schedule(), qr_type, qr_code, now);

        if let Some(next) = interpretation.changed_from(&current) {
            self.employees.update_status(employee_id, &next).await?;
            tracing::debug!(
                employee_id = %employee_id,
                work_status = %next.work_status,
                location = %next.location,
                "Employee status updated"
            );
        }

        Ok(interpretation)
    }

    /// Explicit id, otherwise the configured fallback login
    async fn resolve_employee(&self, explicit: Option<&str>) -> AppResult<EmployeeId> {
        if let Some(id) = explicit.map(str::trim).filter(|id| !id.is_empty()) {
            return parse_record_id(EMPLOYEE_TABLE, id).map_err(|_| {
                AppError::new(ErrorCode::ScanEmployeeUnresolved).with_detail("employee_id", id)
            });
        }

        let Some(login) = self.fallback_login.as_deref() else {
            return Err(AppError::new(ErrorCode::ScanEmployeeUnresolved));
        };

        self.employees
            .find_by_login(login)
            .await?
            .and_then(|employee| employee.id)
            .ok_or_else(|| {
                AppError::new(ErrorCode::ScanEmployeeUnresolved).with_detail("login", login)
            })
    }

    /// All scans, newest first
    pub async fn list_all(&self) -> AppResult<Vec<Scan>> {
        Ok(self.scans.find_all().await?)
    }

    /// One employee's scans, newest first
    pub async fn list_by_employee(&self, employee_id: &str) -> AppResult<Vec<Scan>> {
        let thing = parse_record_id(EMPLOYEE_TABLE, employee_id)?;
        Ok(self.scans.find_by_employee(&thing).await?)
    }

    /// One employee's scans of the current local day
    pub async fn list_today(&self, employee_id: &str) -> AppResult<Vec<Scan>> {
        self.list_day_of(employee_id, Utc::now()).await
    }

    /// One employee's scans of the local day containing `now`
    pub async fn list_day_of(&self, employee_id: &str, now: DateTime<Utc>) -> AppResult<Vec<Scan>> {
        let thing = parse_record_id(EMPLOYEE_TABLE, employee_id)?;
        let (start, end) = day_bounds(now.with_timezone(&self.timezone));
        Ok(self
            .scans
            .find_by_employee_between(&thing, start, end)
            .await?)
    }

    /// Check-in/out scan for the fallback employee
    pub async fn test_checkin(&self) -> AppResult<Scan> {
        self.submit(Self::helper_scan(TEST_CHECKIN_CODE, QrType::CheckinOut))
            .await
    }

    /// Lunch scan for the fallback employee
    pub async fn test_lunch(&self) -> AppResult<Scan> {
        self.submit(Self::helper_scan(TEST_LUNCH_CODE, QrType::LunchBreak))
            .await
    }

    fn helper_scan(qr_code: &str, qr_type: QrType) -> ScanCreate {
        ScanCreate {
            employee_id: None,
            qr_code: qr_code.to_string(),
            qr_type,
            location: Some(TEST_LOCATION.to_string()),
        }
    }
}

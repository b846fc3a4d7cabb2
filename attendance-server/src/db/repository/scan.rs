//! Scan Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{EmployeeId, Scan, ScanId};
use shared::models::{QrType, ScanStatus};
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Projection shared by list queries: the scan plus its employee's display fields
const SCAN_WITH_EMPLOYEE: &str = "SELECT *, \
    employee_id.name AS employee_name, \
    employee_id.position AS employee_position, \
    employee_id.department AS employee_department \
    FROM scan";

/// Scan to be stored in `pending` state
#[derive(Debug, Clone)]
pub struct NewScan {
    pub employee_id: EmployeeId,
    pub qr_code: String,
    pub qr_type: QrType,
    pub location: String,
    /// Unix millis
    pub timestamp: i64,
}

#[derive(Clone)]
pub struct ScanRepository {
    base: BaseRepository,
}

impl ScanRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Store a new pending scan
    pub async fn create(&self, data: NewScan) -> RepoResult<Scan> {
        let now = now_millis();
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE scan SET
                    employee_id = $employee_id,
                    qr_code = $qr_code,
                    qr_type = $qr_type,
                    timestamp = $timestamp,
                    location = $location,
                    status = $status,
                    created_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("employee_id", data.employee_id))
            .bind(("qr_code", data.qr_code))
            .bind(("qr_type", data.qr_type))
            .bind(("timestamp", data.timestamp))
            .bind(("location", data.location))
            .bind(("status", ScanStatus::Pending))
            .bind(("now", now))
            .await?
            .check()?;

        let created: Option<Scan> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create scan".to_string()))
    }

    /// Write the final status and result message of a scan
    pub async fn finalize(
        &self,
        thing: &ScanId,
        status: ScanStatus,
        message: &str,
    ) -> RepoResult<Scan> {
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    status = $status,
                    result = $result,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("thing", thing.clone()))
            .bind(("status", status))
            .bind(("result", message.to_string()))
            .bind(("now", now_millis()))
            .await?
            .check()?;

        result
            .take::<Option<Scan>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Scan {} not found", thing)))
    }

    /// All scans, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Scan>> {
        let scans: Vec<Scan> = self
            .base
            .db()
            .query(format!("{SCAN_WITH_EMPLOYEE} ORDER BY timestamp DESC"))
            .await?
            .take(0)?;
        Ok(scans)
    }

    /// Scans of one employee, newest first
    pub async fn find_by_employee(&self, employee_id: &EmployeeId) -> RepoResult<Vec<Scan>> {
        let scans: Vec<Scan> = self
            .base
            .db()
            .query(format!(
                "{SCAN_WITH_EMPLOYEE} WHERE employee_id = $employee_id ORDER BY timestamp DESC"
            ))
            .bind(("employee_id", employee_id.clone()))
            .await?
            .take(0)?;
        Ok(scans)
    }

    /// Scans of one employee with `start <= timestamp < end`, newest first
    pub async fn find_by_employee_between(
        &self,
        employee_id: &EmployeeId,
        start: i64,
        end: i64,
    ) -> RepoResult<Vec<Scan>> {
        let scans: Vec<Scan> = self
            .base
            .db()
            .query(format!(
                "{SCAN_WITH_EMPLOYEE} WHERE employee_id = $employee_id \
                 AND timestamp >= $start AND timestamp < $end \
                 ORDER BY timestamp DESC"
            ))
            .bind(("employee_id", employee_id.clone()))
            .bind(("start", start))
            .bind(("end", end))
            .await?
            .take(0)?;
        Ok(scans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::EmployeeRepository;
    use shared::models::{DEFAULT_SCAN_LOCATION, EmployeeCreate};

    async fn setup() -> (ScanRepository, EmployeeId) {
        let service = DbService::in_memory().await.unwrap();
        let employees = EmployeeRepository::new(service.db.clone());
        let emp = employees
            .create(EmployeeCreate {
                login: "anna".into(),
                password: "secret".into(),
                name: "Anna".into(),
                position: "QA".into(),
                department: Some("Quality".into()),
                status: None,
                work_status: None,
                current_location: None,
                rating: None,
                penalties: None,
                shift_start: None,
                shift_end: None,
                lunch_start: None,
                lunch_end: None,
            })
            .await
            .unwrap();
        (ScanRepository::new(service.db), emp.id.unwrap())
    }

    fn new_scan(employee_id: &EmployeeId, timestamp: i64) -> NewScan {
        NewScan {
            employee_id: employee_id.clone(),
            qr_code: "mobile-pass://checkin-out".into(),
            qr_type: QrType::CheckinOut,
            location: DEFAULT_SCAN_LOCATION.into(),
            timestamp,
        }
    }

    #[tokio::test]
    async fn test_create_is_pending() {
        let (repo, employee_id) = setup().await;
        let scan = repo.create(new_scan(&employee_id, 1_000)).await.unwrap();

        assert_eq!(scan.status, ScanStatus::Pending);
        assert!(scan.result.is_none());
        assert_eq!(scan.employee_id, employee_id);
        assert_eq!(scan.qr_type, QrType::CheckinOut);
    }

    #[tokio::test]
    async fn test_finalize() {
        let (repo, employee_id) = setup().await;
        let scan = repo.create(new_scan(&employee_id, 1_000)).await.unwrap();
        let id = scan.id.unwrap();

        let done = repo
            .finalize(&id, ScanStatus::Processed, "Checked in at 08:55")
            .await
            .unwrap();
        assert_eq!(done.status, ScanStatus::Processed);
        assert_eq!(done.result.as_deref(), Some("Checked in at 08:55"));

        let stored = repo.find_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, ScanStatus::Processed);
    }

    #[tokio::test]
    async fn test_lists_are_newest_first_with_employee_fields() {
        let (repo, employee_id) = setup().await;
        for ts in [1_000, 3_000, 2_000] {
            repo.create(new_scan(&employee_id, ts)).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        let stamps: Vec<i64> = all.iter().map(|s| s.timestamp).collect();
        assert_eq!(stamps, vec![3_000, 2_000, 1_000]);
        assert_eq!(all[0].employee_name.as_deref(), Some("Anna"));
        assert_eq!(all[0].employee_position.as_deref(), Some("QA"));
        assert_eq!(all[0].employee_department.as_deref(), Some("Quality"));

        let mine = repo.find_by_employee(&employee_id).await.unwrap();
        assert_eq!(mine.len(), 3);
        assert_eq!(mine[0].timestamp, 3_000);
    }

    #[tokio::test]
    async fn test_between_is_half_open() {
        let (repo, employee_id) = setup().await;
        for ts in [999, 1_000, 1_500, 2_000] {
            repo.create(new_scan(&employee_id, ts)).await.unwrap();
        }

        let window = repo
            .find_by_employee_between(&employee_id, 1_000, 2_000)
            .await
            .unwrap();
        let stamps: Vec<i64> = window.iter().map(|s| s.timestamp).collect();
        assert_eq!(stamps, vec![1_500, 1_000]);
    }

    #[tokio::test]
    async fn test_other_employee_scans_excluded() {
        let (repo, employee_id) = setup().await;
        repo.create(new_scan(&employee_id, 1_000)).await.unwrap();

        let stranger = surrealdb::RecordId::from_table_key("employee", "stranger");
        assert!(repo.find_by_employee(&stranger).await.unwrap().is_empty());
    }
}

//! Scan lifecycle against an in-memory database

mod common;

use attendance_server::ErrorCode;
use attendance_server::scans::ScanService;
use chrono::Duration;
use chrono_tz::Tz;
use common::{at, create_employee, reload, test_state};
use shared::models::{Location, QrType, ScanCreate, ScanStatus, WorkStatus};

fn scan_for(employee_id: Option<String>, qr_type: QrType) -> ScanCreate {
    let qr_code = match qr_type {
        QrType::CheckinOut => "mobile-pass://checkin-out",
        QrType::LunchBreak => "mobile-pass://lunch-break",
        QrType::Unknown => "mobile-pass://coffee",
    };
    ScanCreate {
        employee_id,
        qr_code: qr_code.to_string(),
        qr_type,
        location: None,
    }
}

#[tokio::test]
async fn full_working_day() {
    let state = test_state().await;
    let employee = create_employee(&state, "anna").await;
    let id = employee.id.clone().unwrap().to_string();
    let service = &state.scan_service;

    let steps = [
        (QrType::CheckinOut, at(8, 55), "Checked in at 08:55"),
        (QrType::LunchBreak, at(13, 5), "Lunch started at 13:05"),
        (QrType::LunchBreak, at(13, 55), "Lunch ended at 13:55"),
        (QrType::CheckinOut, at(18, 0), "Checked out at 18:00"),
    ];

    for (qr_type, now, expected) in steps {
        let scan = service
            .submit_at(scan_for(Some(id.clone()), qr_type), now)
            .await
            .unwrap();
        assert_eq!(scan.status, ScanStatus::Processed);
        assert_eq!(scan.result.as_deref(), Some(expected));
        assert_eq!(scan.location, "Office Company N");
        assert_eq!(scan.timestamp, now.timestamp_millis());
    }

    let after = reload(&state, &employee).await;
    assert_eq!(after.work_status, WorkStatus::Offline);
    assert_eq!(after.current_location, Location::NotInOffice);
    assert_eq!(
        after.last_check_in.map(|t| t.timestamp_millis()),
        Some(at(8, 55).timestamp_millis())
    );

    let history = service.list_by_employee(&id).await.unwrap();
    let results: Vec<_> = history.iter().filter_map(|s| s.result.as_deref()).collect();
    assert_eq!(
        results,
        vec![
            "Checked out at 18:00",
            "Lunch ended at 13:55",
            "Lunch started at 13:05",
            "Checked in at 08:55",
        ]
    );
    assert_eq!(history[0].employee_name.as_deref(), Some("Employee anna"));
}

#[tokio::test]
async fn check_in_state_is_visible_between_scans() {
    let state = test_state().await;
    let employee = create_employee(&state, "boris").await;
    let id = employee.id.clone().unwrap().to_string();

    state
        .scan_service
        .submit_at(scan_for(Some(id), QrType::CheckinOut), at(8, 55))
        .await
        .unwrap();

    let after = reload(&state, &employee).await;
    assert_eq!(after.work_status, WorkStatus::Online);
    assert_eq!(after.current_location, Location::InOffice);
}

#[tokio::test]
async fn late_check_in_is_an_error_scan_and_leaves_employee_untouched() {
    let state = test_state().await;
    let employee = create_employee(&state, "vera").await;
    let id = employee.id.clone().unwrap().to_string();

    for minute in [15, 30] {
        let scan = state
            .scan_service
            .submit_at(scan_for(Some(id.clone()), QrType::CheckinOut), at(9, minute))
            .await
            .unwrap();
        assert_eq!(scan.status, ScanStatus::Error);
        assert!(
            scan.result
                .as_deref()
                .unwrap()
                .starts_with("Check-in allowed only between 08:50 and 09:10.")
        );
    }

    let after = reload(&state, &employee).await;
    assert_eq!(after.work_status, WorkStatus::Offline);
    assert_eq!(after.current_location, Location::NotInOffice);
    assert!(after.last_check_in.is_none());
    assert_eq!(after.updated_at, employee.updated_at);
}

#[tokio::test]
async fn lunch_without_check_in_is_processed_without_change() {
    let state = test_state().await;
    let employee = create_employee(&state, "gleb").await;
    let id = employee.id.clone().unwrap().to_string();

    let scan = state
        .scan_service
        .submit_at(scan_for(Some(id), QrType::LunchBreak), at(13, 0))
        .await
        .unwrap();
    assert_eq!(scan.status, ScanStatus::Processed);
    assert_eq!(
        scan.result.as_deref(),
        Some("Invalid status for lunch: Not in office")
    );
    assert_eq!(reload(&state, &employee).await.current_location, Location::NotInOffice);
}

#[tokio::test]
async fn unknown_qr_type_is_recorded_as_error() {
    let state = test_state().await;
    let employee = create_employee(&state, "dina").await;
    let id = employee.id.clone().unwrap().to_string();

    let scan = state
        .scan_service
        .submit_at(scan_for(Some(id), QrType::Unknown), at(10, 0))
        .await
        .unwrap();
    assert_eq!(scan.status, ScanStatus::Error);
    assert_eq!(
        scan.result.as_deref(),
        Some("Unknown QR code type: mobile-pass://coffee")
    );
    assert_eq!(scan.qr_type, QrType::Unknown);
}

#[tokio::test]
async fn missing_employee_id_falls_back_to_configured_login() {
    let state = test_state().await;
    let fallback = create_employee(&state, "test1").await;

    let scan = state
        .scan_service
        .submit_at(scan_for(None, QrType::CheckinOut), at(8, 0))
        .await
        .unwrap();
    assert_eq!(Some(scan.employee_id.clone()), fallback.id);
    assert_eq!(scan.status, ScanStatus::Processed);

    // blank id counts as missing
    let scan = state
        .scan_service
        .submit_at(scan_for(Some("  ".into()), QrType::LunchBreak), at(13, 0))
        .await
        .unwrap();
    assert_eq!(Some(scan.employee_id), fallback.id);
}

#[tokio::test]
async fn unresolvable_fallback_is_rejected_without_storing() {
    let state = test_state().await;

    let err = state
        .scan_service
        .submit_at(scan_for(None, QrType::CheckinOut), at(8, 0))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ScanEmployeeUnresolved);
    assert_eq!(err.message, "Employee not found");
    assert!(state.scan_service.list_all().await.unwrap().is_empty());

    let no_fallback = ScanService::new(state.get_db(), Tz::UTC, None);
    let err = no_fallback
        .submit_at(scan_for(None, QrType::CheckinOut), at(8, 0))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ScanEmployeeUnresolved);
}

#[tokio::test]
async fn unknown_employee_id_ends_as_error_scan() {
    let state = test_state().await;

    let scan = state
        .scan_service
        .submit_at(
            scan_for(Some("employee:ghost".into()), QrType::CheckinOut),
            at(8, 0),
        )
        .await
        .unwrap();
    assert_eq!(scan.status, ScanStatus::Error);
    assert_eq!(scan.result.as_deref(), Some("Employee not found"));

    let err = state
        .scan_service
        .submit_at(scan_for(Some("scan:abc".into()), QrType::CheckinOut), at(8, 0))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ScanEmployeeUnresolved);
}

#[tokio::test]
async fn todays_scans_use_the_business_day() {
    let state = test_state().await;
    let employee = create_employee(&state, "egor").await;
    let id = employee.id.clone().unwrap().to_string();
    let service = &state.scan_service;

    let yesterday = at(8, 55) - Duration::days(1);
    service
        .submit_at(scan_for(Some(id.clone()), QrType::CheckinOut), yesterday)
        .await
        .unwrap();
    service
        .submit_at(scan_for(Some(id.clone()), QrType::CheckinOut), at(18, 0))
        .await
        .unwrap();
    service
        .submit_at(scan_for(Some(id.clone()), QrType::CheckinOut), at(23, 59))
        .await
        .unwrap();

    let today = service.list_day_of(&id, at(12, 0)).await.unwrap();
    let stamps: Vec<i64> = today.iter().map(|s| s.timestamp).collect();
    assert_eq!(
        stamps,
        vec![at(23, 59).timestamp_millis(), at(18, 0).timestamp_millis()]
    );

    assert_eq!(service.list_by_employee(&id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn business_time_zone_drives_windows() {
    let state = test_state().await;
    let employee = create_employee(&state, "fedor").await;
    let id = employee.id.clone().unwrap().to_string();

    // 05:55 UTC is 08:55 in Moscow
    let moscow = ScanService::new(state.get_db(), chrono_tz::Europe::Moscow, None);
    let scan = moscow
        .submit_at(scan_for(Some(id), QrType::CheckinOut), at(5, 55))
        .await
        .unwrap();
    assert_eq!(scan.result.as_deref(), Some("Checked in at 08:55"));
}

#[tokio::test]
async fn on_disk_database_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = common::test_config();
    config.work_dir = tmp.path().to_string_lossy().into_owned();

    let state = attendance_server::ServerState::initialize(&config)
        .await
        .unwrap();
    assert!(config.database_dir().exists());

    let employee = create_employee(&state, "test1").await;
    let scan = state
        .scan_service
        .submit_at(scan_for(None, QrType::CheckinOut), at(8, 30))
        .await
        .unwrap();
    assert_eq!(scan.status, ScanStatus::Processed);
    assert!(scan.status.is_final());

    let stored = state.scan_service.list_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(Some(stored[0].employee_id.clone()), employee.id);
}

#[tokio::test]
async fn failed_status_write_finalizes_scan_as_error() {
    let state = test_state().await;
    let employee = create_employee(&state, "irina").await;
    let id = employee.id.clone().unwrap().to_string();

    // Employees may never leave `offline`, so the check-in write-back is rejected
    state
        .get_db()
        .query(r#"DEFINE FIELD work_status ON TABLE employee ASSERT $value = "offline""#)
        .await
        .unwrap()
        .check()
        .unwrap();

    let scan = state
        .scan_service
        .submit_at(scan_for(Some(id.clone()), QrType::CheckinOut), at(8, 55))
        .await
        .unwrap();
    assert_eq!(scan.status, ScanStatus::Error);
    assert!(
        scan.result
            .as_deref()
            .unwrap()
            .starts_with("Processing error:")
    );

    let stored = state.scan_service.list_by_employee(&id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, ScanStatus::Error);

    let after = reload(&state, &employee).await;
    assert_eq!(after.work_status, WorkStatus::Offline);
    assert!(after.last_check_in.is_none());
}

#[tokio::test]
async fn failed_finalize_leaves_scan_pending_and_errors() {
    let state = test_state().await;
    let employee = create_employee(&state, "kirill").await;
    let id = employee.id.clone().unwrap().to_string();

    state
        .get_db()
        .query(r#"DEFINE FIELD status ON TABLE scan ASSERT $value = "pending""#)
        .await
        .unwrap()
        .check()
        .unwrap();

    let err = state
        .scan_service
        .submit_at(scan_for(Some(id.clone()), QrType::CheckinOut), at(8, 55))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);

    let stored = state.scan_service.list_by_employee(&id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, ScanStatus::Pending);
    assert!(stored[0].result.is_none());

    // the write-back happened before finalize
    assert_eq!(reload(&state, &employee).await.work_status, WorkStatus::Online);
}

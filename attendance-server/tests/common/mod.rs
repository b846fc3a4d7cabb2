//! Shared test fixtures

#![allow(dead_code)]

use attendance_server::db::models::Employee;
use attendance_server::db::repository::EmployeeRepository;
use attendance_server::{Config, ServerState};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use shared::models::EmployeeCreate;

/// Development config over a throwaway work dir, UTC, fallback login `test1`
pub fn test_config() -> Config {
    let mut config = Config::with_overrides(std::env::temp_dir().to_string_lossy(), 0).unwrap();
    config.environment = "development".into();
    config.timezone = Tz::UTC;
    config.fallback_employee_login = Some("test1".into());
    config.request_timeout_ms = 30_000;
    config
}

pub async fn test_state() -> ServerState {
    ServerState::in_memory(test_config()).await.unwrap()
}

pub fn employee_payload(login: &str) -> EmployeeCreate {
    EmployeeCreate {
        login: login.to_string(),
        password: "secret".to_string(),
        name: format!("Employee {login}"),
        position: "Engineer".to_string(),
        department: None,
        status: None,
        work_status: None,
        current_location: None,
        rating: None,
        penalties: None,
        shift_start: None,
        shift_end: None,
        lunch_start: None,
        lunch_end: None,
    }
}

pub async fn create_employee(state: &ServerState, login: &str) -> Employee {
    EmployeeRepository::new(state.get_db())
        .create(employee_payload(login))
        .await
        .unwrap()
}

pub async fn reload(state: &ServerState, employee: &Employee) -> Employee {
    let id = employee.id.as_ref().unwrap().to_string();
    EmployeeRepository::new(state.get_db())
        .find_by_id(&id)
        .await
        .unwrap()
        .unwrap()
}

/// UTC instant on a fixed test day
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, hour, minute, 0).unwrap()
}

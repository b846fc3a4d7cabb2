//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::ErrorCode;
use shared::models::{EmployeeCreate, EmployeeUpdate};

use crate::core::ServerState;
use crate::db::models::Employee;
use crate::db::repository::{EmployeeRepository, RepoError};
use crate::utils::validation::{
    MAX_LOGIN_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_optional_text,
    validate_rating, validate_required_text,
};
use crate::utils::{AppError, AppResult};

fn employee_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {} not found", id))
}

/// Repository errors in employee terms
fn employee_error(id: &str, err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => employee_not_found(id),
        RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::EmployeeLoginExists, msg),
        other => other.into(),
    }
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| employee_not_found(&id))?;
    Ok(Json(employee))
}

/// Get employee by login
pub async fn get_by_login(
    State(state): State<ServerState>,
    Path(login): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_login(&login)
        .await?
        .ok_or_else(|| employee_not_found(&login))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    validate_required_text(&payload.login, "login", MAX_LOGIN_LEN)?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.position, "position", MAX_NAME_LEN)?;
    validate_optional_text(&payload.department, "department", MAX_NAME_LEN)?;
    validate_rating(payload.rating)?;

    let login = payload.login.clone();
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .create(payload)
        .await
        .map_err(|e| employee_error(&login, e))?;

    tracing::info!(
        employee_id = ?employee.id.as_ref().map(|id| id.to_string()),
        login = %employee.login,
        "Employee created"
    );
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    validate_optional_text(&payload.login, "login", MAX_LOGIN_LEN)?;
    validate_optional_text(&payload.password, "password", MAX_PASSWORD_LEN)?;
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.position, "position", MAX_NAME_LEN)?;
    validate_optional_text(&payload.department, "department", MAX_NAME_LEN)?;
    validate_rating(payload.rating)?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .update(&id, payload)
        .await
        .map_err(|e| employee_error(&id, e))?;

    tracing::info!(employee_id = %id, "Employee updated");
    Ok(Json(employee))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = EmployeeRepository::new(state.get_db());
    let result = repo.delete(&id).await.map_err(|e| employee_error(&id, e))?;

    tracing::info!(employee_id = %id, "Employee deleted");
    Ok(Json(result))
}

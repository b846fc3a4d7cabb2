//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::client::{LoginRequest, LoginResponse};
use shared::error::ErrorCode;

use crate::core::ServerState;
use crate::db::repository::EmployeeRepository;
use crate::utils::validation::{MAX_LOGIN_LEN, MAX_PASSWORD_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Verifies login and password and returns the employee's id and name.
/// Unknown login and wrong password produce the same error.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_required_text(&req.login, "login", MAX_LOGIN_LEN)?;
    validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.find_by_login(&req.login).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let Some(employee) = employee else {
        tracing::warn!(login = %req.login, "Login failed - user not found");
        return Err(AppError::invalid_credentials());
    };

    let password_valid = employee
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
    if !password_valid {
        tracing::warn!(login = %req.login, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    if !employee.is_active() {
        tracing::warn!(login = %req.login, "Login failed - account disabled");
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }

    let employee_id = employee
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    tracing::info!(login = %req.login, employee_id = %employee_id, "Login succeeded");

    Ok(Json(LoginResponse {
        employee_id,
        name: employee.name,
    }))
}

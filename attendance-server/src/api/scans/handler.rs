//! Scan API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::ScanCreate;

use crate::core::ServerState;
use crate::db::models::Scan;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_SCAN_TEXT_LEN, validate_optional_text, validate_required_text,
};

/// Submit a scan
///
/// Responds 200 with the finalized scan, including scans whose status is `error`.
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ScanCreate>,
) -> AppResult<Json<Scan>> {
    validate_required_text(&payload.qr_code, "qr_code", MAX_SCAN_TEXT_LEN)?;
    validate_optional_text(&payload.location, "location", MAX_SCAN_TEXT_LEN)?;

    let scan = state.scan_service.submit(payload).await?;
    Ok(Json(scan))
}

/// List all scans, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Scan>>> {
    let scans = state.scan_service.list_all().await?;
    Ok(Json(scans))
}

/// List one employee's scans
pub async fn list_by_employee(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Vec<Scan>>> {
    let scans = state.scan_service.list_by_employee(&employee_id).await?;
    Ok(Json(scans))
}

/// List one employee's scans of today (business time zone)
pub async fn list_today(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Vec<Scan>>> {
    let scans = state.scan_service.list_today(&employee_id).await?;
    Ok(Json(scans))
}

/// Development helper: check-in/out scan for the fallback employee
pub async fn test_checkin(State(state): State<ServerState>) -> AppResult<Json<Scan>> {
    let scan = state.scan_service.test_checkin().await?;
    Ok(Json(scan))
}

/// Development helper: lunch scan for the fallback employee
pub async fn test_lunch(State(state): State<ServerState>) -> AppResult<Json<Scan>> {
    let scan = state.scan_service.test_lunch().await?;
    Ok(Json(scan))
}

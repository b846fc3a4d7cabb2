//! Scan API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Scan router
///
/// `dev_helpers` mounts the fixed test-checkin / test-lunch endpoints.
pub fn router(dev_helpers: bool) -> Router<ServerState> {
    Router::new().nest("/api/scans", routes(dev_helpers))
}

fn routes(dev_helpers: bool) -> Router<ServerState> {
    let routes = Router::new()
        .route("/", get(handler::list).post(handler::submit))
        .route("/employee/{employee_id}", get(handler::list_by_employee))
        .route("/employee/{employee_id}/today", get(handler::list_today));

    if dev_helpers {
        routes
            .route("/test-checkin", post(handler::test_checkin))
            .route("/test-lunch", post(handler::test_lunch))
    } else {
        routes
    }
}

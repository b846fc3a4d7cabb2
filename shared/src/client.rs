//! Client-related types shared between server and client
//!
//! Request/response types used by the mobile client's login flow.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Employee record id (`employee:xxx`)
    pub employee_id: String,
    pub name: String,
}

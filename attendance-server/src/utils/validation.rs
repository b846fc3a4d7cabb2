//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! CRUD handlers before anything reaches the repositories.

use shared::models::MAX_RATING;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names: employee name, position, department
pub const MAX_NAME_LEN: usize = 200;

/// Login identifiers
pub const MAX_LOGIN_LEN: usize = 64;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Raw QR payloads and free-text scan locations
pub const MAX_SCAN_TEXT_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")).with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-empty and within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate an integrity rating (0-100)
pub fn validate_rating(rating: Option<u8>) -> Result<(), AppError> {
    if let Some(r) = rating
        && r > MAX_RATING
    {
        return Err(
            AppError::validation(format!("rating must be between 0 and {MAX_RATING}"))
                .with_detail("field", "rating"),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Anna", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());

        let long = "x".repeat(MAX_LOGIN_LEN + 1);
        let err = validate_required_text(&long, "login", MAX_LOGIN_LEN).unwrap_err();
        assert!(err.message.contains("too long"));
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "department", MAX_NAME_LEN).is_ok());
        assert!(validate_optional_text(&Some("Sales".into()), "department", MAX_NAME_LEN).is_ok());
        assert!(validate_optional_text(&Some("".into()), "department", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_rating() {
        assert!(validate_rating(None).is_ok());
        assert!(validate_rating(Some(0)).is_ok());
        assert!(validate_rating(Some(100)).is_ok());
        assert!(validate_rating(Some(101)).is_err());
    }
}

//! Input validation helpers
//!
//! Centralized text length constants and required-field checks shared by the
//! CRUD handlers. The document store enforces no lengths of its own.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Person / product names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Short identifiers: phone, NIC, postal code, vehicle number, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Notes, descriptions, special instructions
pub const MAX_NOTE_LEN: usize = 500;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_text_is_rejected() {
        assert!(validate_required_text("  ", "customerName", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("John Doe", "customerName", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn overlong_text_is_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&Some(long), "note", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&None, "note", MAX_NAME_LEN).is_ok());
    }
}

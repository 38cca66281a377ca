//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - Reasonable UX limits for names, reasons, work reports
//! - SQLite TEXT has no built-in length enforcement

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employee, admin, category, position, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Leave reasons and uploaded work reports
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, dob, coordinates
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum password length (before hashing)
pub const MIN_PASSWORD_LEN: usize = 8;

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

/// Validate an email address: non-empty, one '@' with a dot in the domain.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::validation(format!("Invalid email: {value}")));
    }
    Ok(())
}

/// Validate a plaintext password before hashing.
///
/// Requires at least one uppercase, one lowercase, one digit and one
/// special character in addition to the length bounds.
pub fn validate_password(value: &str) -> Result<(), AppError> {
    if value.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} chars"
        )));
    }
    if value.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN} chars)"
        )));
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AppError::validation(
            "password must contain an uppercase letter",
        ));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(AppError::validation(
            "password must contain a lowercase letter",
        ));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation("password must contain a digit"));
    }
    if !value.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(AppError::validation(
            "password must contain a special character",
        ));
    }
    Ok(())
}

/// Validate a latitude/longitude pair given as decimal strings.
pub fn validate_coordinates(latitude: &str, longitude: &str) -> Result<(), AppError> {
    let lat: f64 = latitude
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid latitude: {latitude}")))?;
    let lon: f64 = longitude
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid longitude: {longitude}")))?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::validation(format!(
            "latitude out of range: {latitude}"
        )));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(AppError::validation(format!(
            "longitude out of range: {longitude}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank_and_oversize() {
        assert!(validate_required_text("Alice", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn email_requires_at_and_domain_dot() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("alice").is_err());
        assert!(validate_email("alice@localhost").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn password_requires_all_character_classes() {
        assert!(validate_password("Str0ng!pass").is_ok());
        // Length bounds
        assert!(validate_password("Ab1!x").is_err());
        assert!(validate_password(&format!("Ab1!{}", "x".repeat(125))).is_err());
        // One class missing each
        assert!(validate_password("aaaaaaaa").is_err());
        assert!(validate_password("str0ng!pass").is_err());
        assert!(validate_password("STR0NG!PASS").is_err());
        assert!(validate_password("Strong!pass").is_err());
        assert!(validate_password("Str0ngpass").is_err());
    }

    #[test]
    fn coordinates_must_be_in_range() {
        assert!(validate_coordinates("41.15", "-8.62").is_ok());
        assert!(validate_coordinates("91.0", "0.0").is_err());
        assert!(validate_coordinates("0.0", "181.0").is_err());
        assert!(validate_coordinates("abc", "0.0").is_err());
    }
}

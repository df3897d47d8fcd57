//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// Minimum user name length
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum user name length
pub const USER_NAME_MAX_LENGTH: usize = 32;

/// bcrypt only looks at the first 72 bytes of its input
pub const PASSWORD_MAX_BYTES: usize = 72;

static USER_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("user name pattern is valid"));

/// Validation error with field-level details
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) {
        self.errors.push(ValidationError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Convert into `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Check a user name: 3-32 characters of letters, digits, `_`, `.` or `-`
pub fn validate_user_name(user_name: &str, errors: &mut ValidationErrors) {
    let len = user_name.chars().count();
    if !(USER_NAME_MIN_LENGTH..=USER_NAME_MAX_LENGTH).contains(&len) {
        errors.add_error(
            "user_name",
            format!(
                "must be between {} and {} characters",
                USER_NAME_MIN_LENGTH, USER_NAME_MAX_LENGTH
            ),
            "length",
        );
    } else if !USER_NAME_PATTERN.is_match(user_name) {
        errors.add_error(
            "user_name",
            "may only contain letters, digits, '_', '.' and '-'",
            "pattern",
        );
    }
}

/// Check a plaintext password before it is hashed
pub fn validate_password(password: &str, errors: &mut ValidationErrors) {
    if password.is_empty() {
        errors.add_error("password", "must not be empty", "required");
    } else if password.len() > PASSWORD_MAX_BYTES {
        errors.add_error(
            "password",
            format!("must be at most {} bytes", PASSWORD_MAX_BYTES),
            "length",
        );
    }
}

/// Check a required free-text field such as a first or last name
pub fn validate_required(field: &str, value: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add_error(field, "must not be empty", "required");
    }
}

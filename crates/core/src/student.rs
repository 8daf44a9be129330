//! Field rules for student records.
//!
//! Handlers and stores call these before anything is written so that every
//! backend sees the same canonical values. Emails in particular are compared
//! after normalization, which is what makes uniqueness case-insensitive.

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::Date;

/// Longest accepted student name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// The form emails are stored and compared in. Does not check syntax.
pub fn canonical_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Canonicalize an email address, rejecting anything that is not a
/// syntactically valid address.
pub fn normalize_email(raw: &str) -> Result<String, CoreError> {
    let email = canonical_email(raw);
    if email.is_empty() {
        return Err(CoreError::Validation("email must not be empty".into()));
    }
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(email)
}

/// Trim a student name and check it is non-blank and within [`MAX_NAME_LEN`].
pub fn validate_name(raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(name.to_string())
}

/// Reject dates of birth later than `today`.
pub fn validate_date_of_birth(dob: Date, today: Date) -> Result<(), CoreError> {
    if dob > today {
        return Err(CoreError::Validation(format!(
            "date_of_birth {dob} is in the future"
        )));
    }
    Ok(())
}

//! Email format check.

use super::contract::enforce_text;
use super::value::Value;
use crate::error::{FormError, Result};

/// Whether `email` has the shape `local@domain.tld`.
///
/// Exactly one `@`; the domain holds at least one `.`; the last `.` is not the
/// final character.
pub fn is_valid_email(email: &str) -> bool {
    let Some((_, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot + 1 < domain.len(),
        None => false,
    }
}

/// Require a non-blank string in email format.
pub fn enforce_email(email: &str, property: &str) -> Result<()> {
    enforce_text(email, property)?;
    if !is_valid_email(email) {
        return Err(FormError::invalid_format(property, format!("'{email}' is not an email address")));
    }
    Ok(())
}

/// Dynamic-value counterpart of [`enforce_email`].
pub fn enforce_email_value(value: &Value, property: &str) -> Result<String> {
    let email = super::contract::enforce_string(value, property)?;
    enforce_email(email, property)?;
    Ok(email.to_owned())
}

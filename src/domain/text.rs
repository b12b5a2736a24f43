// src/domain/text.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Normalise an optional free-text field: blank input is stored as NULL and
/// values longer than `max_len` characters are rejected.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max_len: Option<usize>,
) -> DomainResult<Option<String>> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    if let Some(max_len) = max_len {
        if value.chars().count() > max_len {
            return Err(DomainError::Validation(format!(
                "{field} must be at most {max_len} characters"
            )));
        }
    }
    Ok(Some(value))
}

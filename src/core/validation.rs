//! Input validation for actseal operations.
//!
//! Validates secret names and values before anything is sent.

use crate::core::constants::RESERVED_PREFIX;
use crate::error::{Result, ValidationError};

/// Validate a secret name.
///
/// Secret names:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot start with the reserved `GITHUB_` prefix (any case)
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid(name, "cannot start with a digit"));
    }

    if name.to_ascii_uppercase().starts_with(RESERVED_PREFIX) {
        return Err(invalid(
            name,
            &format!("cannot start with {}", RESERVED_PREFIX),
        ));
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid(
                name,
                &format!(
                    "invalid character '{}' at position {}. Only letters, digits, and underscore are allowed",
                    ch,
                    i + 1
                ),
            ));
        }
    }

    Ok(())
}

/// Validate a secret value. Values cannot be empty.
pub fn validate_value(name: &str, value: &[u8]) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(name.to_string()).into());
    }
    Ok(())
}

/// Validate an organization name. It becomes one path segment, so it must be
/// non-empty and contain no `/`.
pub fn validate_org(org: &str) -> Result<()> {
    if org.trim().is_empty() || org.contains('/') {
        return Err(ValidationError::InvalidOrg(org.to_string()).into());
    }
    Ok(())
}

fn invalid(name: &str, reason: &str) -> crate::error::Error {
    ValidationError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

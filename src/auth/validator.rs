//! Signup input validation

use crate::error::{AuthError, Field};

/// Rejects empty fields. Whitespace-only input is not empty.
pub fn check_fields(username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() {
        return Err(AuthError::EmptyField(Field::Username));
    }
    if password.is_empty() {
        return Err(AuthError::EmptyField(Field::Password));
    }
    Ok(())
}

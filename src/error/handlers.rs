//! Error handlers
//!
//! Maps errors to the status text shown on the form and to log records.

use crate::error::types::{AuthError, FormError, PreviewError, StorageError};
use log::{error, warn};

/// Log a form error at a level matching its severity
pub fn handle_error(err: &FormError) {
    match err {
        FormError::Auth(_) | FormError::Preview(_) => warn!("Form action rejected: {}", err),
        FormError::Storage(_) => error!("{}", err),
    }
}

/// Convert error to the text shown in the status line
pub fn status_message(err: &FormError) -> &'static str {
    match err {
        FormError::Auth(AuthError::EmptyField(_)) => "Username or password cannot be empty",
        FormError::Auth(AuthError::DuplicateUsername(_)) => "Username already exists",
        FormError::Auth(AuthError::InvalidCredentials) => "Incorrect username/password",
        FormError::Storage(StorageError::FileUnwritable { .. }) => {
            "Could not save user, please try again"
        }
        FormError::Storage(StorageError::FileUnreadable { .. }) => {
            "Could not read user database"
        }
        FormError::Preview(PreviewError::NotFound(_)) => "Image file not found",
        FormError::Preview(PreviewError::NotAFile(_)) => "Selected path is not a file",
        FormError::Preview(PreviewError::UnsupportedFormat(_)) => {
            "Selected file is not a supported image"
        }
        FormError::Preview(PreviewError::Unreadable { .. }) => "Could not read image file",
    }
}

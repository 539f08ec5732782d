//! Error types
//!
//! Defines domain-specific error types for the credential store and its backends.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which form field an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Username => write!(f, "username"),
            Field::Password => write!(f, "password"),
        }
    }
}

/// Authentication module errors
#[derive(Debug)]
pub enum AuthError {
    EmptyField(Field),
    DuplicateUsername(String),
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyField(field) => write!(f, "Empty {} field", field),
            AuthError::DuplicateUsername(u) => write!(f, "Username already taken: {}", u),
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
        }
    }
}

impl std::error::Error for AuthError {}

/// A backing-store line that is not `username:password`.
///
/// Only produced while parsing; loads count and skip these lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedLine {
    pub line_number: usize,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed credential line {}", self.line_number)
    }
}

impl std::error::Error for MalformedLine {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    FileUnreadable { path: PathBuf, source: io::Error },
    FileUnwritable { path: PathBuf, source: io::Error },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::FileUnreadable { path, source } => {
                write!(f, "Cannot read {}: {}", path.display(), source)
            }
            StorageError::FileUnwritable { path, source } => {
                write!(f, "Cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::FileUnreadable { source, .. }
            | StorageError::FileUnwritable { source, .. } => Some(source),
        }
    }
}

/// Image selection errors
#[derive(Debug)]
pub enum PreviewError {
    NotFound(PathBuf),
    NotAFile(PathBuf),
    UnsupportedFormat(PathBuf),
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::NotFound(p) => write!(f, "Image not found: {}", p.display()),
            PreviewError::NotAFile(p) => write!(f, "Not a file: {}", p.display()),
            PreviewError::UnsupportedFormat(p) => {
                write!(f, "Unsupported image format: {}", p.display())
            }
            PreviewError::Unreadable { path, source } => {
                write!(f, "Cannot read image {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PreviewError {}

/// General form error that encompasses all error types
#[derive(Debug)]
pub enum FormError {
    Auth(AuthError),
    Storage(StorageError),
    Preview(PreviewError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Auth(e) => write!(f, "Authentication error: {}", e),
            FormError::Storage(e) => write!(f, "Storage error: {}", e),
            FormError::Preview(e) => write!(f, "Preview error: {}", e),
        }
    }
}

impl std::error::Error for FormError {}

impl From<AuthError> for FormError {
    fn from(error: AuthError) -> Self {
        FormError::Auth(error)
    }
}

impl From<StorageError> for FormError {
    fn from(error: StorageError) -> Self {
        FormError::Storage(error)
    }
}

impl From<PreviewError> for FormError {
    fn from(error: PreviewError) -> Self {
        FormError::Preview(error)
    }
}

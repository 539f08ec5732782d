//! Storage result types
//!
//! Defines the records and summaries exchanged with a backend.

use std::collections::HashMap;

/// In-memory mapping from username to plaintext password
pub type CredentialSet = HashMap<String, String>;

/// A single username/password pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    pub password: String,
}

impl CredentialRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Summary of a load pass over a backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Well-formed lines inserted into the set
    pub loaded: usize,
    /// Lines skipped as malformed
    pub skipped: usize,
}

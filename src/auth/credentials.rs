//! Credential storage and management
//!
//! Owns the in-memory credential set and mediates every read and write of
//! the backing store.

use super::validator::check_fields;
use crate::error::{AuthError, FormError, StorageError};
use crate::storage::{
    CredentialBackend, CredentialRecord, CredentialSet, FlatFileBackend, LoadReport,
};
use log::{error, info};
use std::path::PathBuf;

/// Known username/password pairs plus the medium they persist to.
///
/// The set only grows: records are added by [`CredentialStore::register`] and
/// never updated or removed.
pub struct CredentialStore<B: CredentialBackend = FlatFileBackend> {
    users: CredentialSet,
    backend: B,
}

impl CredentialStore<FlatFileBackend> {
    /// Creates an empty store over a flat file. Call [`load`](Self::load) to populate it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FlatFileBackend::new(path))
    }
}

impl<B: CredentialBackend> CredentialStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            users: CredentialSet::new(),
            backend,
        }
    }

    /// Reads all records from the backend.
    ///
    /// A missing file yields an empty store. On a read fault the error is
    /// logged and returned, and records read before the fault are kept.
    pub fn load(&mut self) -> Result<LoadReport, StorageError> {
        match self.backend.load(&mut self.users) {
            Ok(report) => {
                info!(
                    "Loaded {} users ({} lines skipped)",
                    report.loaded, report.skipped
                );
                Ok(report)
            }
            Err(e) => {
                error!("{} ({} users loaded before failure)", e, self.users.len());
                Err(e)
            }
        }
    }

    /// True iff `username` is known and its password matches byte for byte.
    pub fn validate(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|stored| stored == password)
    }

    /// Adds a new user, persisting before caching.
    ///
    /// Fails with [`AuthError::EmptyField`] or [`AuthError::DuplicateUsername`]
    /// without touching storage. If the append fails the set is left unchanged.
    ///
    /// Fields are written verbatim. A `:` or `\n` in either field, or a trailing
    /// `\r` on the password, does not survive a reload intact; see
    /// [`storage::format`](crate::storage::format).
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), FormError> {
        check_fields(username, password)?;

        if self.users.contains_key(username) {
            return Err(AuthError::DuplicateUsername(username.to_string()).into());
        }

        let record = CredentialRecord::new(username, password);
        self.backend.append(&record)?;

        info!("Registered user {}", record.username);
        self.users.insert(record.username, record.password);
        Ok(())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

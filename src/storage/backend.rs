//! Backend interface
//!
//! The credential store only talks to persistence through this trait, so a
//! flat file can be swapped for another medium without touching the store.

use super::format;
use super::results::{CredentialRecord, CredentialSet, LoadReport};
use crate::error::StorageError;
use log::{debug, warn};

/// Persistence medium for credential records.
pub trait CredentialBackend {
    /// Reads every record into `set`.
    ///
    /// Malformed entries are skipped and counted. On an I/O fault the records
    /// inserted before the fault stay in `set` and the error is returned.
    fn load(&self, set: &mut CredentialSet) -> Result<LoadReport, StorageError>;

    /// Appends one record. Must not report success unless the record is durable
    /// enough to be seen by the next `load`.
    fn append(&mut self, record: &CredentialRecord) -> Result<(), StorageError>;
}

/// Parses one line and inserts it into `set`, updating `report`.
pub(crate) fn apply_line(
    set: &mut CredentialSet,
    line: &str,
    line_number: usize,
    report: &mut LoadReport,
) {
    match format::parse_line(line, line_number) {
        Ok(record) => {
            if set.contains_key(&record.username) {
                warn!(
                    "Duplicate entry for user {} on line {}, later entry wins",
                    record.username, line_number
                );
            }
            set.insert(record.username, record.password);
            report.loaded += 1;
        }
        Err(e) => {
            debug!("Skipping: {}", e);
            report.skipped += 1;
        }
    }
}

//! In-memory backend
//!
//! Keeps formatted lines in a vector. Useful where no file should be touched.

use super::backend::{CredentialBackend, apply_line};
use super::format::format_record;
use super::results::{CredentialRecord, CredentialSet, LoadReport};
use crate::error::StorageError;

/// Backend holding lines in memory, in the same format as the flat file
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    lines: Vec<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the backend with raw lines, malformed ones included
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl CredentialBackend for MemoryBackend {
    fn load(&self, set: &mut CredentialSet) -> Result<LoadReport, StorageError> {
        let mut report = LoadReport::default();
        for (index, line) in self.lines.iter().enumerate() {
            apply_line(set, line, index + 1, &mut report);
        }
        Ok(report)
    }

    fn append(&mut self, record: &CredentialRecord) -> Result<(), StorageError> {
        self.lines.push(format_record(record));
        Ok(())
    }
}

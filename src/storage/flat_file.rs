//! Flat file backend
//!
//! Stores credentials as `username:password` lines in a text file.

use super::backend::{CredentialBackend, apply_line};
use super::format::{LINE_ENDING, format_record};
use super::results::{CredentialRecord, CredentialSet, LoadReport};
use crate::error::StorageError;
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Backend persisting credentials to a plain text file
#[derive(Debug, Clone)]
pub struct FlatFileBackend {
    path: PathBuf,
}

impl FlatFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unreadable(&self, source: io::Error) -> StorageError {
        StorageError::FileUnreadable {
            path: self.path.clone(),
            source,
        }
    }

    fn unwritable(&self, source: io::Error) -> StorageError {
        StorageError::FileUnwritable {
            path: self.path.clone(),
            source,
        }
    }
}

impl CredentialBackend for FlatFileBackend {
    fn load(&self, set: &mut CredentialSet) -> Result<LoadReport, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No user file at {}, starting empty", self.path.display());
                return Ok(LoadReport::default());
            }
            Err(e) => return Err(self.unreadable(e)),
        };

        let mut report = LoadReport::default();
        let reader = BufReader::new(file);

        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes.map_err(|e| self.unreadable(e))?;
            let line_number = index + 1;

            match String::from_utf8(bytes) {
                Ok(line) => apply_line(set, &line, line_number, &mut report),
                Err(_) => {
                    debug!("Skipping non UTF-8 line {}", line_number);
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }

    fn append(&mut self, record: &CredentialRecord) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unwritable(e))?;

        // One write call per record
        let line = format!("{}{}", format_record(record), LINE_ENDING);
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.unwritable(e))
    }
}

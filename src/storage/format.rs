//! Credential line format
//!
//! One record per line, `username:password`, no escaping. A `:` inside a
//! field cannot be represented and makes the line malformed on the next load.
//! A `\n` inside a field splits the record across lines, and a trailing `\r`
//! on a password is dropped when the line is read back.

use super::results::CredentialRecord;
use crate::error::MalformedLine;

/// Field separator
pub const DELIMITER: char = ':';

/// Line terminator written after each record
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Parses one line of the backing store.
///
/// A line is well-formed when it holds exactly one delimiter with a non-empty
/// field on each side. A trailing `\r` is ignored.
pub fn parse_line(line: &str, line_number: usize) -> Result<CredentialRecord, MalformedLine> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    match line.split_once(DELIMITER) {
        Some((username, password))
            if !username.is_empty() && !password.is_empty() && !password.contains(DELIMITER) =>
        {
            Ok(CredentialRecord::new(username, password))
        }
        _ => Err(MalformedLine { line_number }),
    }
}

/// Formats a record as a line body, without the terminator
pub fn format_record(record: &CredentialRecord) -> String {
    format!("{}{}{}", record.username, DELIMITER, record.password)
}

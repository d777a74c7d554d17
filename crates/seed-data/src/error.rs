//! Error types for the seed-data crate.
//!
//! Snapshot loading fails for file access, JSON shape, version, and date
//! problems. Each failure is a distinct variant so callers can report the
//! offending record.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a directory snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot file at '{path}': {message}")]
    IoError {
        /// Path to the snapshot file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The snapshot JSON is malformed or missing required fields.
    #[error("invalid snapshot JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The snapshot version is not supported.
    #[error("unsupported snapshot version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the snapshot.
        actual: u32,
    },

    /// A user's join date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid join date for user at index {index}: {value}")]
    InvalidJoinDate {
        /// Index of the user in the `users` array.
        index: usize,
        /// The rejected value.
        value: String,
    },

    /// A user's last-active timestamp could not be parsed.
    #[error("invalid last-active timestamp for user at index {index}: {value}")]
    InvalidLastActive {
        /// Index of the user in the `users` array.
        index: usize,
        /// The rejected value.
        value: String,
    },

    /// A role history entry's change timestamp could not be parsed.
    #[error("invalid change timestamp for role history entry at index {index}: {value}")]
    InvalidChangedAt {
        /// Index of the entry in the `roleHistory` array.
        index: usize,
        /// The rejected value.
        value: String,
    },
}

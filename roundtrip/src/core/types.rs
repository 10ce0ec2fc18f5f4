//! Result records produced by the file helpers.
//!
//! Failures are not stored in these records; the helpers return
//! `Result<_, FileError>` and a value only exists on success.

use std::path::PathBuf;

use serde::Serialize;

use super::verify::Verification;

/// Outcome of creating a file and writing content to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteResult {
    pub path: PathBuf,
    /// Number of bytes written; always the UTF-8 length of the content.
    pub bytes: usize,
}

/// Full textual content read back from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadResult {
    pub path: PathBuf,
    pub content: String,
}

impl ReadResult {
    pub fn bytes(&self) -> usize {
        self.content.len()
    }
}

/// Everything a write-then-read pass observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTripReport {
    pub write: WriteResult,
    pub read: ReadResult,
    pub verification: Verification,
}

impl RoundTripReport {
    pub fn is_match(&self) -> bool {
        self.verification == Verification::Match
    }
}

//! Comparison of written content against what was read back.

use serde::Serialize;

/// Whether the read-back content equals what was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verification {
    Match,
    Mismatch {
        expected_bytes: usize,
        actual_bytes: usize,
        /// Byte offset of the first differing byte (or the shorter length).
        first_difference: usize,
    },
}

/// Compare `expected` with `actual` byte-for-byte.
pub fn verify(expected: &str, actual: &str) -> Verification {
    if expected == actual {
        return Verification::Match;
    }
    let first_difference = expected
        .bytes()
        .zip(actual.bytes())
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| expected.len().min(actual.len()));
    Verification::Mismatch {
        expected_bytes: expected.len(),
        actual_bytes: actual.len(),
        first_difference,
    }
}

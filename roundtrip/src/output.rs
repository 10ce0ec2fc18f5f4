//! Human-readable console lines. Not a machine-readable protocol; use
//! `run --json` for that.

use std::path::Path;

use crate::core::types::WriteResult;
use crate::core::verify::Verification;
use crate::error::FileError;

pub fn write_line(result: &WriteResult) -> String {
    format!(
        "created {} and wrote {} bytes",
        result.path.display(),
        result.bytes
    )
}

pub fn verification_line(verification: &Verification) -> String {
    match verification {
        Verification::Match => "round trip ok".to_string(),
        Verification::Mismatch {
            expected_bytes,
            actual_bytes,
            first_difference,
        } => format!(
            "round trip mismatch: wrote {expected_bytes} bytes, read {actual_bytes} bytes, first difference at byte {first_difference}"
        ),
    }
}

pub fn opened_line(path: &Path, len: u64) -> String {
    format!("opened {} ({len} bytes)", path.display())
}

pub fn open_failed_line(err: &FileError) -> String {
    format!("could not open file: {err}: {}", err.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn write_line_reports_path_and_count() {
        let line = write_line(&WriteResult {
            path: PathBuf::from("files/go2.txt"),
            bytes: 34,
        });
        assert_eq!(line, "created files/go2.txt and wrote 34 bytes");
    }

    #[test]
    fn mismatch_line_includes_offsets() {
        let line = verification_line(&Verification::Mismatch {
            expected_bytes: 5,
            actual_bytes: 3,
            first_difference: 3,
        });
        assert!(line.starts_with("round trip mismatch"));
        assert!(line.contains("first difference at byte 3"));
    }
}

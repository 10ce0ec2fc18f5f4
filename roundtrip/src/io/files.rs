//! Create-and-write and read-back operations on a single path.

use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use super::handle::FileHandle;
use crate::core::types::{ReadResult, WriteResult};
use crate::error::{FileError, FileOp};

/// Create (or truncate) `path` and write `content` to it in full.
///
/// The parent directory must already exist; it is never created here, so a
/// missing directory leaves nothing behind on disk.
#[instrument(level = "debug", skip_all, fields(path = %path.display(), len = content.len()))]
pub fn create_and_write(path: &Path, content: &str) -> Result<WriteResult, FileError> {
    let mut handle = FileHandle::create(path)?;
    let bytes = handle.write_str(content)?;
    handle.close()?;
    info!(bytes, "content written");
    Ok(WriteResult {
        path: path.to_path_buf(),
        bytes,
    })
}

/// Read the whole file at `path` as UTF-8 text.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_all(path: &Path) -> Result<ReadResult, FileError> {
    let content = fs::read_to_string(path).map_err(|e| FileError::io(FileOp::Read, path, e))?;
    debug!(bytes = content.len(), "content read");
    Ok(ReadResult {
        path: path.to_path_buf(),
        content,
    })
}

/// Open an existing file; failure is returned to the caller to handle.
pub fn open_existing(path: &Path) -> Result<FileHandle, FileError> {
    FileHandle::open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DEFAULT_CONTENT_BYTES, TestDir};

    #[test]
    fn write_then_read_returns_same_content() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir.path().join("note.txt");

        let written = create_and_write(&path, "line one\nline two\n").expect("write");
        let read = read_all(&path).expect("read");

        assert_eq!(written.bytes, 18);
        assert_eq!(read.content, "line one\nline two\n");
        assert_eq!(read.bytes(), written.bytes);
    }

    #[test]
    fn default_sample_is_thirty_four_bytes() {
        let dir = TestDir::with_files_dir().expect("tempdir");
        let path = dir.default_target();

        let written = create_and_write(&path, crate::io::config::DEFAULT_CONTENT).expect("write");
        assert_eq!(written.bytes, DEFAULT_CONTENT_BYTES);
        assert_eq!(
            read_all(&path).expect("read").content,
            crate::io::config::DEFAULT_CONTENT
        );
    }

    #[test]
    fn byte_count_is_utf8_length() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir.path().join("utf8.txt");

        let written = create_and_write(&path, "naïve café").expect("write");
        assert_eq!(written.bytes, "naïve café".len());
        assert_eq!(written.bytes, 12);
    }

    #[test]
    fn existing_file_is_truncated() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir.path().join("note.txt");
        fs::write(&path, "a much longer previous body").expect("seed");

        create_and_write(&path, "short").expect("write");
        assert_eq!(read_all(&path).expect("read").content, "short");
    }

    #[test]
    fn empty_content_writes_zero_bytes() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir.path().join("empty.txt");

        let written = create_and_write(&path, "").expect("write");
        assert_eq!(written.bytes, 0);
        assert!(path.is_file());
        assert_eq!(read_all(&path).expect("read").content, "");
    }

    #[test]
    fn missing_parent_fails_both_operations() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir.missing_target();

        let write_err = create_and_write(&path, "x").unwrap_err();
        assert_eq!(write_err.op(), FileOp::Create);
        assert!(!path.exists());
        assert!(!path.parent().expect("parent").exists());

        let read_err = read_all(&path).unwrap_err();
        assert_eq!(read_err.op(), FileOp::Read);
        assert_eq!(read_err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = TestDir::new().expect("tempdir");
        let path = dir.path().join("bin.dat");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("seed");

        let err = read_all(&path).unwrap_err();
        assert_eq!(err.op(), FileOp::Read);
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn open_existing_reports_missing_file() {
        let dir = TestDir::new().expect("tempdir");
        let err = open_existing(&dir.path().join("example.txt")).unwrap_err();
        assert_eq!(err.op(), FileOp::Open);
    }
}

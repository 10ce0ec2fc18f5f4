//! Exclusively owned file handle with a single, guaranteed release.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FileError, FileOp};

/// An open file bound to the path it was opened at.
///
/// The handle is released exactly once: by [`FileHandle::close`], or by `Drop`
/// on any other exit path (early return through `?`, unwinding panic).
#[derive(Debug)]
pub struct FileHandle {
    path: PathBuf,
    file: Option<File>,
}

impl FileHandle {
    /// Create or truncate the file at `path`. The parent directory must exist.
    pub fn create(path: &Path) -> Result<Self, FileError> {
        let file = File::create(path).map_err(|e| FileError::io(FileOp::Create, path, e))?;
        debug!(path = %path.display(), "file created");
        Ok(Self::new(path, file))
    }

    /// Open an existing file read-only.
    pub fn open(path: &Path) -> Result<Self, FileError> {
        let file = File::open(path).map_err(|e| FileError::io(FileOp::Open, path, e))?;
        debug!(path = %path.display(), "file opened");
        Ok(Self::new(path, file))
    }

    fn new(path: &Path, file: File) -> Self {
        Self {
            path: path.to_path_buf(),
            file: Some(file),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all of `content`, returning the number of bytes written.
    pub fn write_str(&mut self, content: &str) -> Result<usize, FileError> {
        let path = &self.path;
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| FileError::io(FileOp::Write, path, released()))?;
        file.write_all(content.as_bytes())
            .map_err(|e| FileError::io(FileOp::Write, path, e))?;
        Ok(content.len())
    }

    /// Size of the file on disk in bytes.
    pub fn len(&self) -> Result<u64, FileError> {
        let file = self
            .file
            .as_ref()
            .ok_or_else(|| FileError::io(FileOp::Open, &self.path, released()))?;
        let meta = file
            .metadata()
            .map_err(|e| FileError::io(FileOp::Open, &self.path, e))?;
        Ok(meta.len())
    }

    pub fn is_empty(&self) -> Result<bool, FileError> {
        Ok(self.len()? == 0)
    }

    /// Flush to disk and release the handle.
    pub fn close(mut self) -> Result<(), FileError> {
        let Some(file) = self.file.take() else {
            return Ok(());
        };
        let synced = file.sync_all();
        drop(file);
        record_release(&self.path);
        synced.map_err(|e| FileError::io(FileOp::Close, &self.path, e))
    }
}

impl Drop for FileHandle {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            if std::thread::panicking() {
                warn!(path = %self.path.display(), "releasing file handle while unwinding");
            }
            drop(file);
            record_release(&self.path);
        }
    }
}

fn released() -> std::io::Error {
    std::io::Error::other("file handle already released")
}

fn record_release(path: &Path) {
    debug!(path = %path.display(), "file handle released");
    #[cfg(test)]
    RELEASES.with(|count| count.set(count.get() + 1));
}

#[cfg(test)]
thread_local! {
    static RELEASES: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

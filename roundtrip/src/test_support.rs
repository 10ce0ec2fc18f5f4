//! Test-only helpers for scratch directories and well-known paths.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::io::config::DEFAULT_PATH;

/// Byte length of [`crate::io::config::DEFAULT_CONTENT`].
pub const DEFAULT_CONTENT_BYTES: usize = 34;

/// Temporary working directory, removed on drop.
pub struct TestDir {
    temp: TempDir,
}

impl TestDir {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir()?,
        })
    }

    /// Create a scratch dir that already has the default target's parent.
    pub fn with_files_dir() -> io::Result<Self> {
        let dir = Self::new()?;
        if let Some(parent) = dir.default_target().parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(dir)
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Default target (`files/go2.txt`) inside this directory.
    pub fn default_target(&self) -> PathBuf {
        self.path().join(DEFAULT_PATH)
    }

    /// A file path whose parent directory does not exist.
    pub fn missing_target(&self) -> PathBuf {
        self.path().join("missing").join("x.txt")
    }
}

//! Typed errors returned by the file helpers in [`crate::io`].

use std::fmt;
use std::path::{Path, PathBuf};

/// The file operation that was in flight when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Create,
    Write,
    Read,
    Open,
    Close,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileOp::Create => "create",
            FileOp::Write => "write",
            FileOp::Read => "read",
            FileOp::Open => "open",
            FileOp::Close => "close",
        };
        f.write_str(name)
    }
}

/// Failure of a file operation.
///
/// There is a single kind: every create, write, read, open or close failure is
/// an I/O error tagged with the operation and path it happened on.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("{op} {}", .path.display())]
    Io {
        op: FileOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    pub fn io(op: FileOp, path: &Path, source: std::io::Error) -> Self {
        FileError::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn op(&self) -> FileOp {
        match self {
            FileError::Io { op, .. } => *op,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FileError::Io { path, .. } => path,
        }
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            FileError::Io { source, .. } => source.kind(),
        }
    }
}

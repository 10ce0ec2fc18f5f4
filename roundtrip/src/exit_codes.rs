//! Stable exit codes for roundtrip CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// A file could not be created, written, read or closed.
pub const IO_ERROR: i32 = 1;
/// Invalid config or arguments, or any other non-file error.
pub const INVALID: i32 = 2;
/// `roundtrip run` read back content that differs from what it wrote.
pub const MISMATCH: i32 = 3;

//! Side-effecting helpers: the scoped file handle, the file operations built
//! on it, and the config file.

pub mod config;
pub mod files;
pub mod handle;
pub mod init;

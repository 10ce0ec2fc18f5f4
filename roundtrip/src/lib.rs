//! Create a file, write text to it, and read it back.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (result records, verification,
//!   failure policy). No I/O.
//! - **[`io`]**: Side-effecting operations (scoped file handle, file
//!   operations, config file).
//!
//! [`trip`] composes the two into a write-then-read pass. Errors travel as
//! values up to the binary, where [`fatal::halt`] is the only exit.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod fatal;
pub mod io;
pub mod logging;
pub mod output;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod trip;

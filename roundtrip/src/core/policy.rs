//! What the CLI does once an error reaches it.

use serde::{Deserialize, Serialize};

/// How a fatal error terminates the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Print the error and exit with a status from [`crate::exit_codes`].
    #[default]
    Exit,
    /// Print the error and panic; unwinding releases any open handles first.
    Panic,
}

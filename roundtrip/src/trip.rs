//! Write-then-read orchestration for `roundtrip run`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::types::RoundTripReport;
use crate::core::verify::{Verification, verify};
use crate::io::files::{create_and_write, read_all};

/// Write `content` to `path`, read the file back independently, and compare.
///
/// I/O failures are returned as errors; a content mismatch is not an error and
/// is reported through [`RoundTripReport::verification`].
pub fn run_round_trip(path: &Path, content: &str) -> Result<RoundTripReport> {
    debug!(path = %path.display(), "starting round trip");
    let write = create_and_write(path, content)
        .with_context(|| format!("write step for {}", path.display()))?;
    let read = read_all(path).with_context(|| format!("read step for {}", path.display()))?;

    let verification = verify(content, &read.content);
    match &verification {
        Verification::Match => info!(bytes = write.bytes, "round trip matched"),
        Verification::Mismatch {
            first_difference, ..
        } => warn!(first_difference, "round trip mismatch"),
    }

    Ok(RoundTripReport {
        write,
        read,
        verification,
    })
}

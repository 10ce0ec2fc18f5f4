//! The one place where an error stops the process.

use tracing::error;

use crate::core::policy::FailurePolicy;
use crate::error::FileError;
use crate::exit_codes;

/// Map an error to an exit code: file errors anywhere in the chain are
/// `IO_ERROR`, everything else is `INVALID`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.chain().any(|cause| cause.is::<FileError>()) {
        exit_codes::IO_ERROR
    } else {
        exit_codes::INVALID
    }
}

/// Print `err` and terminate according to `policy`.
///
/// `Panic` unwinds, so handles still alive further up the stack are released
/// before the process exits.
pub fn halt(policy: FailurePolicy, err: &anyhow::Error) -> ! {
    let code = exit_code_for(err);
    error!(code, ?policy, "fatal error");
    eprintln!("error: {err:#}");
    match policy {
        FailurePolicy::Exit => std::process::exit(code),
        FailurePolicy::Panic => panic!("{err:#}"),
    }
}

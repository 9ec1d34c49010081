//! crates/logging/src/internal.rs
//! Internal-consistency violations and the abort path that handles them.

use std::io::{self, Write};

/// A severity value outside the known scales reached the sink.
///
/// These are programmer errors. The sink never guesses a severity for them;
/// see [`fatal`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InternalError {
    /// The threshold cell held a code that is not a [`Level`](crate::Level).
    #[error("Unknown LogLevel: {0}")]
    UnknownLevel(u8),
    /// The transport delivered a severity this crate does not know.
    #[error("Unknown transport log severity: {0}")]
    UnknownExternalSeverity(String),
}

/// Reports `error` on stderr and aborts the process.
///
/// Misrouting a severity could hide a genuinely critical message, so there is
/// no degraded fallback.
#[cold]
pub fn fatal(error: InternalError) -> ! {
    let _ = writeln!(io::stderr().lock(), "INTERNAL ERROR: {error}");
    std::process::abort()
}

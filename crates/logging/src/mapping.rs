//! crates/logging/src/mapping.rs
//! Translation between [`Level`] and the transport's [`Severity`] scale.
//!
//! | Level   | Transport severity |
//! |---------|--------------------|
//! | Debug   | Debug              |
//! | Notice  | Info               |
//! | Warning | Error              |
//! | Error   | Error              |
//!
//! The reverse direction maps Info back to Notice, so a Warning that
//! crosses the transport comes back as an Error.

use transport::log::Severity;

use crate::internal::{InternalError, fatal};
use crate::level::Level;

/// Map a sink level onto the transport's scale.
#[must_use]
pub const fn to_external(level: Level) -> Severity {
    match level {
        Level::Debug => Severity::Debug,
        Level::Notice => Severity::Info,
        Level::Warning | Level::Error => Severity::Error,
    }
}

/// Map a transport severity back onto the sink's scale.
///
/// Aborts the process on a severity this crate does not recognise.
#[must_use]
pub fn to_internal(severity: Severity) -> Level {
    try_to_internal(severity).unwrap_or_else(|error| fatal(error))
}

/// Fallible form of [`to_internal`].
pub fn try_to_internal(severity: Severity) -> Result<Level, InternalError> {
    match severity {
        Severity::Debug => Ok(Level::Debug),
        Severity::Info => Ok(Level::Notice),
        Severity::Error => Ok(Level::Error),
        other => Err(InternalError::UnknownExternalSeverity(format!("{other:?}"))),
    }
}

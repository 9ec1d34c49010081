#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the single choke point for diagnostics in the client library.
//! Every component (authentication, app attestation, update distribution and
//! the rest) reports through three operations: [`set_level`],
//! [`is_loggable`] and [`emit`]. Messages that pass the threshold are written
//! to standard output, one line each:
//!
//! ```text
//! >iOS< Wed Jun 30 21:49:08 1993 -- WARNING: token close to expiry
//! ```
//!
//! # Design
//!
//! - [`Logger`] owns the threshold (an atomic), the writer and the installed
//!   flag (both behind one mutex). [`Logger::global`] is the process-wide
//!   instance the free functions delegate to.
//! - The first message that passes the threshold installs the logger as the
//!   log function of the networking [`transport`] through the [`LogBridge`]
//!   seam, so transport records are printed by the same sink, marked with
//!   [`TRANSPORT_PREFIX`].
//! - [`mapping`] translates between [`Level`] and the transport's three-level
//!   [`transport::log::Severity`].
//!
//! # Invariants
//!
//! - The bridge is registered at most once per logger.
//! - Lines are never interleaved: each one is written and flushed under the
//!   mutex.
//! - Transport records pass the same threshold check as native messages.
//!
//! # Errors
//!
//! Nothing here returns an error to callers. Severity values outside the known
//! scales are programmer errors and abort the process through
//! [`internal::fatal`]; write failures on the output stream are ignored.
//!
//! # Examples
//!
//! ```
//! use logging::Level;
//!
//! logging::set_level(Level::Warning);
//! assert!(!logging::is_loggable(Level::Notice));
//!
//! logging::emit(Level::Error, "update check failed");
//! logging::log_warning!("retrying in {}s", 30);
//! ```

mod bridge;
mod config;
pub mod internal;
mod level;
mod logger;
mod macros;
pub mod mapping;
pub mod timestamp;

pub use bridge::{BridgeCallback, LogBridge};
pub use config::{LoggerConfig, default_platform};
pub use internal::InternalError;
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, TRANSPORT_PREFIX};

/// Sets the threshold of the process-wide logger.
///
/// See [`Logger::set_level`].
pub fn set_level(level: Level) {
    Logger::global().set_level(level);
}

/// Reports whether the process-wide logger would write a message at `level`.
#[must_use]
pub fn is_loggable(level: Level) -> bool {
    Logger::global().is_loggable(level)
}

/// Writes `message` through the process-wide logger.
///
/// See [`Logger::emit`].
pub fn emit(level: Level, message: &str) {
    Logger::global().emit(level, message);
}

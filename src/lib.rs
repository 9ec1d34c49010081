#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `diagnostics` is the logging surface the client library's components
//! depend on. Authentication, app attestation and update distribution code
//! only ever need the three operations re-exported here:
//!
//! - [`set_level`] changes the process-wide threshold,
//! - [`is_loggable`] asks whether a level would currently be written,
//! - [`emit`] writes a message.
//!
//! The networking transport's own diagnostics are routed into the same
//! output the first time a message is written; see [`logging`] for the
//! details of that bridge.
//!
//! # Examples
//!
//! ```
//! use diagnostics::Level;
//!
//! diagnostics::set_level(Level::Debug);
//! diagnostics::emit(Level::Notice, "app distribution: checking for releases");
//! diagnostics::log_debug!("found {} releases", 2);
//! ```

pub use logging::{
    InternalError, Level, LogBridge, Logger, LoggerConfig, ParseLevelError, TRANSPORT_PREFIX,
    emit, is_loggable, log_debug, log_error, log_notice, log_warning, set_level,
};

/// Installs a global `tracing` subscriber that forwards transport events to
/// the transport log hook.
///
/// Useful when the transport is instrumented with `tracing` and no other
/// subscriber is in use.
///
/// # Panics
///
/// Panics if a global default subscriber has already been set.
pub fn init_transport_tracing() {
    transport::log::init_tracing();
}

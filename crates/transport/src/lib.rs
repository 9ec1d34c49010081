#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/transport/src/lib.rs
//!
//! # Overview
//!
//! `transport` is the networking layer the client library talks through. The
//! only surface the rest of the workspace depends on is its diagnostics hook in
//! [`log`]: a process-wide registry holding an optional log function and a
//! minimum verbosity, in the shape of the classic `set_log_function` /
//! `set_log_verbosity` pair exposed by C-era networking stacks.
//!
//! # Design
//!
//! - [`log::Severity`] is the transport's own three-level scale. It is marked
//!   `#[non_exhaustive]` because the transport reserves the right to grow it,
//!   so consumers must handle values they do not recognise.
//! - [`log::TransportLog`] filters records by verbosity and hands the survivors
//!   either to the installed log function or to the default stderr writer.
//! - [`log::TransportLayer`] lets transport code written against `tracing`
//!   reach the same hook.
//!
//! # Invariants
//!
//! - The registry lock is never held while the log function runs. Installed
//!   functions are free to take their own locks, including locks that are also
//!   held around calls to [`log::TransportLog::set_log_function`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use transport::log::{LogRecord, Severity, TransportLog};
//!
//! static HOOK: TransportLog = TransportLog::new();
//!
//! HOOK.set_log_verbosity(Severity::Debug);
//! HOOK.set_log_function(Some(Arc::new(|record: &LogRecord<'_>| {
//!     assert_eq!(record.message, "connected");
//! })));
//! HOOK.log(file!(), line!(), Severity::Info, "connected");
//! ```

pub mod log;

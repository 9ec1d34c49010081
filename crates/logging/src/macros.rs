//! crates/logging/src/macros.rs
//! Level-specific emission macros for the process-wide logger.
//!
//! Each macro formats its arguments only when the level passes the current
//! threshold of [`Logger::global`](crate::Logger::global).

/// Emit a debug message.
///
/// # Example
/// ```ignore
/// log_debug!("token refreshed, expires in {}s", ttl);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::Logger::global().emit_args($crate::Level::Debug, ::std::format_args!($($arg)+))
    };
}

/// Emit a notice, printed with the word `INFO`.
///
/// # Example
/// ```ignore
/// log_notice!("attestation provider ready");
/// ```
#[macro_export]
macro_rules! log_notice {
    ($($arg:tt)+) => {
        $crate::Logger::global().emit_args($crate::Level::Notice, ::std::format_args!($($arg)+))
    };
}

/// Emit a warning.
///
/// # Example
/// ```ignore
/// log_warning!("release {} has no notes", version);
/// ```
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {
        $crate::Logger::global().emit_args($crate::Level::Warning, ::std::format_args!($($arg)+))
    };
}

/// Emit an error.
///
/// # Example
/// ```ignore
/// log_error!("second factor rejected: {}", reason);
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::Logger::global().emit_args($crate::Level::Error, ::std::format_args!($($arg)+))
    };
}

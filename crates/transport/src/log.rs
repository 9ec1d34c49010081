//! crates/transport/src/log.rs
//! Diagnostics hook shared by every transport component.

mod hook;
mod layer;
mod severity;

pub use hook::{LogFunction, LogRecord, TransportLog};
pub use layer::{TransportLayer, init_tracing};
pub use severity::{Severity, UnknownSeverity};

/// Logs a formatted message through the process-wide [`TransportLog`].
///
/// The source location is captured automatically. Arguments are only
/// formatted when the severity passes the current verbosity.
///
/// # Example
///
/// ```
/// use transport::log::Severity;
///
/// transport::transport_log!(Severity::Info, "resolved {} addresses", 3);
/// ```
#[macro_export]
macro_rules! transport_log {
    ($severity:expr, $($arg:tt)+) => {{
        let hook = $crate::log::TransportLog::global();
        let severity = $severity;
        if hook.should_log(severity) {
            hook.log(
                ::std::file!(),
                ::std::line!(),
                severity,
                &::std::format!($($arg)+),
            );
        }
    }};
}

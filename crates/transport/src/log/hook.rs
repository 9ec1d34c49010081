//! crates/transport/src/log/hook.rs
//! Process-wide registry for the transport's log function and verbosity.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::severity::Severity;

/// A single record handed to the installed log function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogRecord<'a> {
    /// Source file that produced the record.
    pub file: &'static str,
    /// Source line that produced the record.
    pub line: u32,
    /// Severity of the record.
    pub severity: Severity,
    /// Rendered message text.
    pub message: &'a str,
}

/// Callback receiving every record that passes the verbosity filter.
///
/// The transport may invoke it from any of its threads, concurrently with
/// itself.
pub type LogFunction = Arc<dyn Fn(&LogRecord<'_>) + Send + Sync>;

/// Registry holding the transport's log function and minimum verbosity.
///
/// The transport uses the instance returned by [`global`](Self::global);
/// independent instances exist so embedders and tests can drive the hook
/// without touching process state.
pub struct TransportLog {
    function: RwLock<Option<LogFunction>>,
    verbosity: AtomicU8,
}

impl TransportLog {
    /// Creates a registry with no log function and verbosity [`Severity::Error`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            function: RwLock::new(None),
            verbosity: AtomicU8::new(Severity::Error.as_raw()),
        }
    }

    /// Returns the registry the transport logs through.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: TransportLog = TransportLog::new();
        &GLOBAL
    }

    /// Replaces the log function. `None` restores the default stderr writer.
    pub fn set_log_function(&self, function: Option<LogFunction>) {
        *self
            .function
            .write()
            .unwrap_or_else(PoisonError::into_inner) = function;
    }

    /// Sets the minimum severity that reaches the log function.
    pub fn set_log_verbosity(&self, min: Severity) {
        self.verbosity.store(min.as_raw(), Ordering::Relaxed);
    }

    /// Returns the current minimum severity.
    #[must_use]
    pub fn verbosity(&self) -> Severity {
        // Only `set_log_verbosity` writes the cell, always with a valid code.
        Severity::try_from(self.verbosity.load(Ordering::Relaxed)).unwrap_or(Severity::Error)
    }

    /// Reports whether a record of `severity` would be delivered.
    #[must_use]
    pub fn should_log(&self, severity: Severity) -> bool {
        severity.as_raw() >= self.verbosity.load(Ordering::Relaxed)
    }

    /// Reports whether a custom log function is installed.
    #[must_use]
    pub fn has_log_function(&self) -> bool {
        self.function
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Delivers a record to the installed log function or the default writer.
    ///
    /// Records below the current verbosity are dropped.
    pub fn log(&self, file: &'static str, line: u32, severity: Severity, message: &str) {
        if !self.should_log(severity) {
            return;
        }

        // Clone the function out so the registry lock is released before it runs.
        let function = self
            .function
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let record = LogRecord {
            file,
            line,
            severity,
            message,
        };

        match function {
            Some(function) => function(&record),
            None => default_log_function(&record),
        }
    }
}

impl Default for TransportLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransportLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportLog")
            .field("verbosity", &self.verbosity())
            .field("has_log_function", &self.has_log_function())
            .finish()
    }
}

fn default_log_function(record: &LogRecord<'_>) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "transport {} {}:{}: {}",
        record.severity, record.file, record.line, record.message
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording(hook: &TransportLog) -> Arc<Mutex<Vec<(Severity, String)>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        hook.set_log_function(Some(Arc::new(move |record: &LogRecord<'_>| {
            sink.lock()
                .unwrap()
                .push((record.severity, record.message.to_owned()));
        })));
        seen
    }

    #[test]
    fn default_verbosity_is_error() {
        let hook = TransportLog::new();
        assert_eq!(hook.verbosity(), Severity::Error);
        assert!(hook.should_log(Severity::Error));
        assert!(!hook.should_log(Severity::Info));
        assert!(!hook.has_log_function());
    }

    #[test]
    fn records_below_verbosity_are_dropped() {
        let hook = TransportLog::new();
        let seen = recording(&hook);

        hook.log(file!(), line!(), Severity::Debug, "dropped");
        hook.log(file!(), line!(), Severity::Info, "dropped");
        hook.log(file!(), line!(), Severity::Error, "kept");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[(Severity::Error, "kept".to_owned())]);
    }

    #[test]
    fn lowering_verbosity_admits_debug_records() {
        let hook = TransportLog::new();
        let seen = recording(&hook);
        hook.set_log_verbosity(Severity::Debug);

        hook.log(file!(), line!(), Severity::Debug, "handshake");
        hook.log(file!(), line!(), Severity::Info, "connected");

        assert_eq!(seen.lock().unwrap().len(), 2);
        assert_eq!(hook.verbosity(), Severity::Debug);
    }

    #[test]
    fn record_carries_source_location() {
        let hook = TransportLog::new();
        let location = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&location);
        hook.set_log_function(Some(Arc::new(move |record: &LogRecord<'_>| {
            *sink.lock().unwrap() = Some((record.file, record.line));
        })));

        hook.log("channel.rs", 42, Severity::Error, "reset");

        assert_eq!(*location.lock().unwrap(), Some(("channel.rs", 42)));
    }

    #[test]
    fn clearing_function_restores_default_writer() {
        let hook = TransportLog::new();
        let _seen = recording(&hook);
        assert!(hook.has_log_function());

        hook.set_log_function(None);
        assert!(!hook.has_log_function());
    }

    #[test]
    fn function_may_reinstall_itself_while_running() {
        static HOOK: TransportLog = TransportLog::new();
        HOOK.set_log_function(Some(Arc::new(|_record: &LogRecord<'_>| {
            // Would deadlock if `log` still held the registry lock.
            HOOK.set_log_function(None);
        })));

        HOOK.log(file!(), line!(), Severity::Error, "reentrant");

        assert!(!HOOK.has_log_function());
    }
}

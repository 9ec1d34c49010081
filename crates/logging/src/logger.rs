//! crates/logging/src/logger.rs
//! The diagnostics sink: threshold, emission lock and the one-time bridge.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use transport::log::{Severity, TransportLog};

use crate::bridge::{BridgeCallback, LogBridge};
use crate::config::LoggerConfig;
use crate::internal::fatal;
use crate::level::Level;
use crate::mapping::{to_external, to_internal};
use crate::timestamp;

/// Prefix marking lines that originated in the transport.
pub const TRANSPORT_PREFIX: &str = "<TRANSPORT> ";

/// Line-oriented diagnostics sink shared by every component of the client.
///
/// A logger owns a threshold, a writer and a [`LogBridge`]. Messages at or
/// above the threshold are written as
///
/// ```text
/// >PLATFORM< Wed Jun 30 21:49:08 1993 -- INFO: message
/// ```
///
/// and the first such message also installs the logger as the bridge's log
/// function, so records produced by the dependency come out of the same
/// writer in the same format, marked with [`TRANSPORT_PREFIX`].
///
/// The process-wide instance is [`Logger::global`], writing to standard output
/// and bridged into [`TransportLog::global`]. `Logger` is a cheap handle;
/// clones share all state.
///
/// # Thread Safety
///
/// Every method may be called from any thread. Writes are serialized by one
/// mutex, which also guards the installed flag, so registration with the
/// bridge happens exactly once. The threshold is an atomic read before the
/// mutex is taken; a message racing [`set_level`](Self::set_level) may be
/// filtered against either value.
///
/// # Examples
///
/// ```
/// use logging::{Level, Logger, LoggerConfig};
/// use transport::log::TransportLog;
///
/// static HOOK: TransportLog = TransportLog::new();
///
/// let logger = Logger::with_parts(LoggerConfig::default().with_platform("iOS"), Vec::new(), &HOOK);
/// logger.emit(Level::Debug, "hidden");
/// assert!(!logger.is_bridge_installed());
///
/// logger.emit(Level::Notice, "ready");
/// assert!(logger.is_bridge_installed());
/// assert!(HOOK.has_log_function());
/// ```
pub struct Logger<W = Stdout, B = &'static TransportLog> {
    shared: Arc<Shared<W, B>>,
}

struct Shared<W, B> {
    platform: Cow<'static, str>,
    threshold: AtomicU8,
    state: Mutex<EmitState<W>>,
    bridge: B,
}

struct EmitState<W> {
    writer: W,
    bridge_installed: bool,
}

impl Logger {
    /// Returns the process-wide logger.
    ///
    /// Created on first use with [`LoggerConfig::default`], writing to
    /// standard output and bridged into [`TransportLog::global`].
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Logger> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            Self::with_parts(LoggerConfig::default(), io::stdout(), TransportLog::global())
        })
    }
}

impl<W, B> Logger<W, B>
where
    W: Write + Send + 'static,
    B: LogBridge + 'static,
{
    /// Creates a logger from explicit parts.
    #[must_use]
    pub fn with_parts(config: LoggerConfig, writer: W, bridge: B) -> Self {
        Self {
            shared: Arc::new(Shared {
                platform: config.platform,
                threshold: AtomicU8::new(config.level.as_raw()),
                state: Mutex::new(EmitState {
                    writer,
                    bridge_installed: false,
                }),
                bridge,
            }),
        }
    }

    /// Sets the threshold.
    ///
    /// Once the bridge is installed the mapped severity is forwarded to it as
    /// well, keeping both sides equally verbose. Before that the bridge is not
    /// touched; installation reads the threshold itself.
    pub fn set_level(&self, level: Level) {
        self.shared.threshold.store(level.as_raw(), Ordering::Relaxed);

        let state = self.shared.lock_state();
        if state.bridge_installed {
            self.shared.bridge.set_log_verbosity(to_external(level));
        }
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        self.shared.threshold()
    }

    /// Reports whether a message at `level` would be written.
    #[must_use]
    pub fn is_loggable(&self, level: Level) -> bool {
        self.shared.is_loggable(level)
    }

    /// Writes `message` at `level` if it passes the threshold.
    pub fn emit(&self, level: Level, message: &str) {
        self.shared.emit_args(level, format_args!("{message}"));
    }

    /// Like [`emit`](Self::emit), formatting `args` only when the message
    /// passes the threshold.
    pub fn emit_args(&self, level: Level, args: fmt::Arguments<'_>) {
        self.shared.emit_args(level, args);
    }

    /// Installs the bridge unless it already is.
    ///
    /// [`emit`](Self::emit) calls this for every message that passes the
    /// threshold; calling it directly wires the bridge up ahead of the first
    /// message.
    pub fn ensure_installed(&self) {
        let mut state = self.shared.lock_state();
        self.shared.install_locked(&mut state);
    }

    /// Reports whether the bridge has been installed.
    #[must_use]
    pub fn is_bridge_installed(&self) -> bool {
        self.shared.lock_state().bridge_installed
    }

    /// Returns the platform tag printed on every line.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.shared.platform
    }

    /// Borrows the bridge.
    #[must_use]
    pub fn bridge(&self) -> &B {
        &self.shared.bridge
    }
}

impl<W, B> Shared<W, B>
where
    W: Write + Send + 'static,
    B: LogBridge + 'static,
{
    fn is_loggable(&self, level: Level) -> bool {
        level.as_raw() >= self.threshold.load(Ordering::Relaxed)
    }

    fn threshold(&self) -> Level {
        Level::from_raw(self.threshold.load(Ordering::Relaxed)).unwrap_or_else(|error| fatal(error))
    }

    fn lock_state(&self) -> MutexGuard<'_, EmitState<W>> {
        // The guarded state stays consistent even if a writer panicked.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn install_locked(self: &Arc<Self>, state: &mut EmitState<W>) {
        if state.bridge_installed {
            return;
        }

        self.bridge.set_log_function(self.bridge_callback());
        self.bridge.set_log_verbosity(to_external(self.threshold()));
        state.bridge_installed = true;
    }

    /// Callback registered with the bridge.
    ///
    /// Holds a weak reference so the bridge does not keep a dropped logger
    /// alive. Records go through the ordinary emission path, threshold
    /// included.
    fn bridge_callback(self: &Arc<Self>) -> BridgeCallback {
        let shared = Arc::downgrade(self);
        Arc::new(move |severity: Severity, message: &str| {
            if let Some(shared) = shared.upgrade() {
                shared.emit_args(
                    to_internal(severity),
                    format_args!("{TRANSPORT_PREFIX}{message}"),
                );
            }
        })
    }

    fn emit_args(self: &Arc<Self>, level: Level, args: fmt::Arguments<'_>) {
        if !self.is_loggable(level) {
            return;
        }

        let mut state = self.lock_state();
        self.install_locked(&mut state);

        let timestamp = timestamp::now();
        let _ = writeln!(
            state.writer,
            ">{}< {} -- {}: {}",
            self.platform,
            timestamp,
            level.as_str(),
            args
        );
        let _ = state.writer.flush();
    }
}

impl<W, B> Clone for Logger<W, B> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<W, B> fmt::Debug for Logger<W, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("platform", &self.shared.platform)
            .field("threshold", &self.shared.threshold.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

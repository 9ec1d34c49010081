//! crates/transport/src/log/layer.rs
//! Bridge from `tracing` events emitted by transport code to the log hook.
//!
//! Transport internals are free to use the standard `tracing` macros. The
//! [`TransportLayer`] picks out events whose target lives under `transport`,
//! maps their level onto [`Severity`] and delivers them through a
//! [`TransportLog`], so whatever log function the host installed sees them
//! exactly like records logged through [`crate::transport_log!`].
//!
//! # Usage
//!
//! ```rust,ignore
//! transport::log::init_tracing();
//!
//! tracing::info!(target: "transport::channel", "channel ready");
//! ```

use super::hook::TransportLog;
use super::severity::Severity;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

const TARGET_ROOT: &str = "transport";

/// A tracing layer forwarding transport events to a [`TransportLog`].
#[derive(Debug)]
pub struct TransportLayer {
    hook: &'static TransportLog,
}

impl TransportLayer {
    /// Create a layer delivering into `hook`.
    #[must_use]
    pub const fn new(hook: &'static TransportLog) -> Self {
        Self { hook }
    }

    /// Reports whether a tracing target belongs to the transport.
    fn is_transport_target(target: &str) -> bool {
        target == TARGET_ROOT
            || target
                .strip_prefix(TARGET_ROOT)
                .is_some_and(|rest| rest.starts_with("::"))
    }

    /// Map a tracing level onto the transport's coarser scale.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN | Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl<S> Layer<S> for TransportLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !Self::is_transport_target(metadata.target()) {
            return;
        }

        let severity = Self::level_to_severity(metadata.level());
        if !self.hook.should_log(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.hook.log(
                metadata.file().unwrap_or("<unknown>"),
                metadata.line().unwrap_or(0),
                severity,
                &message,
            );
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Install a global subscriber that forwards transport events to
/// [`TransportLog::global`].
///
/// # Panics
///
/// Panics if a global default subscriber has already been set.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let layer = TransportLayer::new(TransportLog::global());

    tracing_subscriber::registry().with(layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogRecord;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    fn capture(hook: &'static TransportLog) -> Arc<Mutex<Vec<(Severity, String)>>> {
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
    fn test_is_transport_target() {
        assert!(TransportLayer::is_transport_target("transport"));
        assert!(TransportLayer::is_transport_target("transport::channel"));
        assert!(TransportLayer::is_transport_target("transport::dns::resolver"));
        assert!(!TransportLayer::is_transport_target("transports"));
        assert!(!TransportLayer::is_transport_target("client::auth"));
    }

    #[test]
    fn test_level_to_severity() {
        assert_eq!(TransportLayer::level_to_severity(&Level::ERROR), Severity::Error);
        assert_eq!(TransportLayer::level_to_severity(&Level::WARN), Severity::Info);
        assert_eq!(TransportLayer::level_to_severity(&Level::INFO), Severity::Info);
        assert_eq!(TransportLayer::level_to_severity(&Level::DEBUG), Severity::Debug);
        assert_eq!(TransportLayer::level_to_severity(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn transport_events_reach_hook() {
        static HOOK: TransportLog = TransportLog::new();
        let seen = capture(&HOOK);
        HOOK.set_log_verbosity(Severity::Debug);

        let subscriber = tracing_subscriber::registry().with(TransportLayer::new(&HOOK));
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "transport::channel", "keepalive missed");
            tracing::error!(target: "transport::channel", "connection reset");
        });

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            &[
                (Severity::Info, "keepalive missed".to_owned()),
                (Severity::Error, "connection reset".to_owned()),
            ]
        );
    }

    #[test]
    fn foreign_targets_are_ignored() {
        static HOOK: TransportLog = TransportLog::new();
        let seen = capture(&HOOK);
        HOOK.set_log_verbosity(Severity::Debug);

        let subscriber = tracing_subscriber::registry().with(TransportLayer::new(&HOOK));
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(target: "client::auth", "not ours");
        });

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn events_below_verbosity_are_dropped() {
        static HOOK: TransportLog = TransportLog::new();
        let seen = capture(&HOOK);

        let subscriber = tracing_subscriber::registry().with(TransportLayer::new(&HOOK));
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "transport::dns", "lookup started");
            tracing::info!(target: "transport::dns", "lookup finished");
        });

        assert!(seen.lock().unwrap().is_empty());
    }
}

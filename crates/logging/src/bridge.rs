//! crates/logging/src/bridge.rs
//! The seam between the sink and the transport's log hook.

use std::sync::Arc;

use transport::log::{LogRecord, Severity, TransportLog};

/// Callback the sink hands to the transport.
pub type BridgeCallback = Arc<dyn Fn(Severity, &str) + Send + Sync>;

/// Registration API of a dependency whose logging is routed through the sink.
///
/// [`Logger`](crate::Logger) calls both methods while holding its emission
/// lock, and only during the one-time installation or a threshold change once
/// installed. Implementations must not log through the callback from inside
/// either method.
pub trait LogBridge: Send + Sync {
    /// Makes `callback` the dependency's log handler.
    fn set_log_function(&self, callback: BridgeCallback);

    /// Sets the least severe record the dependency should deliver.
    fn set_log_verbosity(&self, severity: Severity);
}

impl LogBridge for TransportLog {
    fn set_log_function(&self, callback: BridgeCallback) {
        self.set_log_function(Some(Arc::new(move |record: &LogRecord<'_>| {
            callback(record.severity, record.message);
        })));
    }

    fn set_log_verbosity(&self, severity: Severity) {
        self.set_log_verbosity(severity);
    }
}

impl<B: LogBridge + ?Sized> LogBridge for &B {
    fn set_log_function(&self, callback: BridgeCallback) {
        (**self).set_log_function(callback);
    }

    fn set_log_verbosity(&self, severity: Severity) {
        (**self).set_log_verbosity(severity);
    }
}

impl<B: LogBridge + ?Sized> LogBridge for Arc<B> {
    fn set_log_function(&self, callback: BridgeCallback) {
        (**self).set_log_function(callback);
    }

    fn set_log_verbosity(&self, severity: Severity) {
        (**self).set_log_verbosity(severity);
    }
}

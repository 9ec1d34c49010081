//! Helpers shared by the logging integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use logging::{BridgeCallback, Level, LogBridge, Logger, LoggerConfig};
use test_support::CaptureBuffer;
use transport::log::Severity;

/// Bridge that records every registration call instead of logging.
#[derive(Default)]
pub struct RecordingBridge {
    registrations: AtomicUsize,
    verbosity: Mutex<Vec<Severity>>,
    callback: Mutex<Option<BridgeCallback>>,
}

impl RecordingBridge {
    pub fn registrations(&self) -> usize {
        self.registrations.load(Ordering::SeqCst)
    }

    pub fn verbosity_calls(&self) -> Vec<Severity> {
        self.verbosity.lock().unwrap().clone()
    }

    /// Invokes the registered callback as the dependency would.
    pub fn deliver(&self, severity: Severity, message: &str) {
        let callback = self
            .callback
            .lock()
            .unwrap()
            .clone()
            .expect("callback registered");
        callback(severity, message);
    }
}

impl LogBridge for RecordingBridge {
    fn set_log_function(&self, callback: BridgeCallback) {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        *self.callback.lock().unwrap() = Some(callback);
    }

    fn set_log_verbosity(&self, severity: Severity) {
        self.verbosity.lock().unwrap().push(severity);
    }
}

pub type TestLogger = Logger<CaptureBuffer, Arc<RecordingBridge>>;

/// Builds a logger tagged `iOS` writing into a fresh capture buffer.
pub fn recording_logger(level: Level) -> (TestLogger, CaptureBuffer, Arc<RecordingBridge>) {
    let capture = CaptureBuffer::new();
    let bridge = Arc::new(RecordingBridge::default());
    let config = LoggerConfig::default()
        .with_platform("iOS")
        .with_level(level);
    let logger = Logger::with_parts(config, capture.clone(), Arc::clone(&bridge));
    (logger, capture, bridge)
}

/// Returns the part of a line after the timestamp, e.g. `INFO: ready`.
pub fn body(line: &str) -> &str {
    line.split_once(" -- ").expect("separator").1
}

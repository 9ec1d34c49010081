//! Shared test utilities for the diagnostics workspace.
//!
//! [`CaptureBuffer`] stands in for standard output when a test needs to see
//! exactly which lines a logger wrote.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable in-memory writer.
///
/// Every clone appends to the same buffer, so a test can hand one clone to a
/// logger and read the output back through another.
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap_or_else(PoisonError::into_inner))
            .into_owned()
    }

    /// Returns the written lines without their terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let capture = CaptureBuffer::new();
        let mut writer = capture.clone();

        writeln!(writer, "first").unwrap();
        write!(writer, "second").unwrap();

        assert_eq!(capture.contents(), "first\nsecond");
        assert_eq!(capture.lines(), ["first", "second"]);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let capture = CaptureBuffer::new();
        capture.clone().write_all(b"data").unwrap();
        assert!(!capture.is_empty());

        capture.clear();
        assert!(capture.is_empty());
    }
}

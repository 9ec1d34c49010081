//! crates/transport/src/log/severity.rs
//! The transport's severity scale.

use std::fmt;

/// Severity attached to every transport log record.
///
/// Variants are ordered from least to most severe. The numeric codes are the
/// ones used on the raw hook boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Severity {
    /// Detailed tracing of connection and stream internals.
    Debug = 0,
    /// Lifecycle events worth surfacing by default.
    Info = 1,
    /// Failures.
    Error = 2,
}

impl Severity {
    /// Returns the raw code used on the hook boundary.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Returns the upper-case name used by the default stderr writer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "D",
            Self::Info => "I",
            Self::Error => "E",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw severity code outside the transport's scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport log severity: {0}")]
pub struct UnknownSeverity(pub u8);

impl TryFrom<u8> for Severity {
    type Error = UnknownSeverity;

    fn try_from(raw: u8) -> Result<Self, UnknownSeverity> {
        match raw {
            0 => Ok(Self::Debug),
            1 => Ok(Self::Info),
            2 => Ok(Self::Error),
            other => Err(UnknownSeverity(other)),
        }
    }
}

//! crates/logging/src/level.rs
//! Severity levels understood by the diagnostics sink.

use std::fmt;
use std::str::FromStr;

use crate::internal::InternalError;

/// Severity of a diagnostic message.
///
/// The derived ordering is the filtering order: a message is written when its
/// level compares greater than or equal to the current threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// Developer detail, hidden by default.
    Debug = 0,
    /// Normal operational messages. Printed with the word `INFO`.
    Notice = 1,
    /// Something unexpected that the library recovered from.
    Warning = 2,
    /// A failure.
    Error = 3,
}

impl Level {
    /// Every level, least severe first.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Notice, Self::Warning, Self::Error];

    /// Returns the word printed in front of the message.
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::Notice.as_str(), "INFO");
    /// assert_eq!(Level::Warning.as_str(), "WARNING");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Notice => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Returns the raw code stored in the threshold cell.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Decodes a raw threshold code.
    pub fn from_raw(raw: u8) -> Result<Self, InternalError> {
        match raw {
            0 => Ok(Self::Debug),
            1 => Ok(Self::Notice),
            2 => Ok(Self::Warning),
            3 => Ok(Self::Error),
            other => Err(InternalError::UnknownLevel(other)),
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Notice
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Level {
    type Error = InternalError;

    fn try_from(raw: u8) -> Result<Self, InternalError> {
        Self::from_raw(raw)
    }
}

/// Error returned when a textual level name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "notice" | "info" => Ok(Self::Notice),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

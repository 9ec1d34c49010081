//! crates/logging/src/config.rs
//! Construction-time settings for a [`Logger`](crate::Logger).

use std::borrow::Cow;

use crate::level::Level;

/// Settings fixed when a logger is created.
///
/// The platform tag is printed between `>` and `<` at the start of every
/// line; the level seeds the threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Tag identifying the host platform in each line.
    pub platform: Cow<'static, str>,
    /// Initial threshold.
    pub level: Level,
}

impl LoggerConfig {
    /// Replaces the platform tag.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<Cow<'static, str>>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Replaces the initial threshold.
    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            platform: Cow::Borrowed(default_platform()),
            level: Level::Notice,
        }
    }
}

/// Platform tag for the compilation target.
#[must_use]
pub fn default_platform() -> &'static str {
    platform_tag(std::env::consts::OS)
}

fn platform_tag(os: &'static str) -> &'static str {
    match os {
        "ios" => "iOS",
        "android" => "Android",
        "macos" => "macOS",
        "linux" => "Linux",
        "windows" => "Windows",
        other => other,
    }
}

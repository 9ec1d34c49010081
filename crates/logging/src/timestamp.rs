//! crates/logging/src/timestamp.rs
//! Wall-clock and elapsed-time rendering for log lines.

use std::time::Instant;

use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

/// `ctime(3)` layout: `Wed Jun 30 21:49:08 1993`.
const CTIME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day padding:space] [hour]:[minute]:[second] [year]"
);

const EPOCH_CTIME: &str = "Thu Jan  1 00:00:00 1970";

/// Returns the current local time in `ctime` layout without trailing whitespace.
///
/// Falls back to UTC when the local offset cannot be determined, which the
/// `time` crate reports on some platforms once several threads are running.
#[must_use]
pub fn now() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_ctime(now)
}

/// Renders `datetime` in `ctime` layout without trailing whitespace.
#[must_use]
pub fn format_ctime(datetime: OffsetDateTime) -> String {
    let mut formatted = datetime
        .format(CTIME_FORMAT)
        .unwrap_or_else(|_| EPOCH_CTIME.to_string());
    formatted.truncate(formatted.trim_end().len());
    formatted
}

/// Returns the seconds elapsed since `start` with two decimals, e.g. `1.25s`.
#[must_use]
pub fn elapsed_since(start: Instant) -> String {
    format!("{:.2}s", start.elapsed().as_secs_f64())
}

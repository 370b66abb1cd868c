//! Wall-clock time stamps for log prefixes.

use std::fmt;
use std::sync::Arc;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// Current UTC time as `hh:mm:ss.mmm`.
#[must_use]
pub fn format_time() -> String {
    format_time_at(OffsetDateTime::now_utc())
}

/// Format `instant` as `hh:mm:ss.mmm` in UTC, truncated to milliseconds.
#[must_use]
pub fn format_time_at(instant: OffsetDateTime) -> String {
    let utc = instant.to_offset(time::UtcOffset::UTC);
    // The format is static, so this only fails on a broken writer.
    utc.format(TIME_FORMAT).unwrap_or_default()
}

/// Source of the time segment, read once per logged line.
#[derive(Clone)]
pub struct Clock(Arc<dyn Fn() -> String + Send + Sync>);

impl Clock {
    /// Wrap a custom time source.
    pub fn new<F>(now: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self(Arc::new(now))
    }

    /// Read the current time string.
    #[must_use]
    pub fn now(&self) -> String {
        (self.0)()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(format_time)
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Clock").finish_non_exhaustive()
    }
}

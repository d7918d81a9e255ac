//! Clock abstraction and timestamp formatting

use std::sync::Arc;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Timestamp layout used for the date decoration (`YYYY-MM-DD-HH-mm-ss`)
pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month padding:zero]-[day padding:zero]-[hour padding:zero]-[minute padding:zero]-[second padding:zero]"
);

/// Source of the current date and time
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Type alias for an Arc-wrapped clock
pub type SharedClock = Arc<dyn Clock>;

/// Wall clock in the local time zone
///
/// Falls back to UTC when the local offset cannot be determined
/// (for example in multi-threaded processes on some Unix platforms).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Format a timestamp as `YYYY-MM-DD-HH-mm-ss`
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| "0000-00-00-00-00-00".to_string())
}

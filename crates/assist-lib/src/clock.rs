//! Time source for record timestamps and timestamp-derived identifiers

use chrono::{Local, NaiveDateTime};

/// Format used inside generated identifiers (`dash-api-20260115093000`)
pub const ID_STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Format used for human-readable record timestamps
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of "now" for recorders
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Compact stamp embedded in generated identifiers
    fn id_stamp(&self) -> String {
        self.now().format(ID_STAMP_FORMAT).to_string()
    }

    /// Timestamp stored on log entries and conversations
    fn log_timestamp(&self) -> String {
        self.now().format(LOG_TIMESTAMP_FORMAT).to_string()
    }
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant, for reproducible identifiers
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

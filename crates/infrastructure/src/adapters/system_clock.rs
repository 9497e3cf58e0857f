//! System clock adapter

use chrono::{DateTime, Utc};
use chronodeck_application::ports::Clock;

/// Clock implementation backed by the system time. Stamps fallback
/// snapshots when a fetch fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

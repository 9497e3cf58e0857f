//! Clock port for local time readings.

use chrono::{DateTime, Utc};

/// Port for reading the local wall clock.
///
/// Used to stamp fallback snapshots when the time service cannot be
/// reached. The abstraction keeps fallback instants testable with a fixed
/// mock implementation.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}

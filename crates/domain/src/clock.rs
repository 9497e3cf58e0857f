//! The ticking clock state machine.
//!
//! Each clock is seeded from one [`TimeSnapshot`] and then advances its
//! displayed value by exactly one second per cadence firing. Advancement is
//! purely additive from the last value; the wall clock is never re-read, so
//! the display never jumps to drift-correct.

use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::snapshot::TimeSnapshot;

/// Lifecycle of a ticking clock.
///
/// `Seeded → Running → Disposed`, with `Disposed` terminal. There is no
/// transition back to `Seeded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    /// Constructed from a snapshot; cadence not yet attached.
    #[default]
    Seeded,
    /// Cadence attached; advancing one second per firing.
    Running,
    /// Cadence cancelled; no further advancement ever.
    Disposed,
}

/// A locally advancing clock derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickingClock {
    snapshot: TimeSnapshot,
    current_local: DateTime<Utc>,
    state: ClockState,
}

impl TickingClock {
    /// Seeds a clock from a snapshot, entering the `Seeded` state with the
    /// displayed value initialized to the snapshot instant.
    #[must_use]
    pub fn seed(snapshot: TimeSnapshot) -> Self {
        let current_local = snapshot.instant();
        Self {
            snapshot,
            current_local,
            state: ClockState::Seeded,
        }
    }

    /// Attaches the cadence, entering `Running`. A no-op unless the clock is
    /// in `Seeded`; a disposed clock can never be restarted.
    pub fn start(&mut self) {
        if self.state == ClockState::Seeded {
            self.state = ClockState::Running;
        }
    }

    /// Advances the displayed value by exactly one second.
    ///
    /// Only a `Running` clock advances; firings delivered before `start` or
    /// after `dispose` are ignored.
    pub fn advance(&mut self) {
        if self.state == ClockState::Running {
            self.current_local += Duration::seconds(1);
        }
    }

    /// Cancels the cadence, entering the terminal `Disposed` state.
    /// Idempotent: disposing twice is safe.
    pub fn dispose(&mut self) {
        self.state = ClockState::Disposed;
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ClockState {
        self.state
    }

    /// True once the clock has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.state == ClockState::Disposed
    }

    /// The snapshot this clock was seeded from.
    #[must_use]
    pub const fn snapshot(&self) -> &TimeSnapshot {
        &self.snapshot
    }

    /// The currently displayed instant.
    #[must_use]
    pub const fn current_local(&self) -> DateTime<Utc> {
        self.current_local
    }

    /// The displayed instant expressed at the snapshot's UTC offset, for
    /// rendering in the zone's own local time regardless of where the host
    /// is located.
    #[must_use]
    pub fn zone_local(&self) -> DateTime<FixedOffset> {
        self.current_local.with_timezone(&self.snapshot.utc_offset())
    }
}

//! Shared cadence scheduler for ticking clocks.
//!
//! Rather than registering one timer per card, a single one-second cadence
//! fans out to every active clock. Each clock still advances independently
//! (its own counter, no shared state between clocks); the scheduler only
//! owns the registry and the fan-out.

use chronodeck_domain::{TickingClock, TimeSnapshot};

/// Opaque handle to a clock registered with a [`ClockScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockHandle(usize);

/// Registry of ticking clocks driven by one shared cadence.
#[derive(Debug, Default)]
pub struct ClockScheduler {
    clocks: Vec<TickingClock>,
}

impl ClockScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub const fn new() -> Self {
        Self { clocks: Vec::new() }
    }

    /// Seeds a clock from a snapshot, starts it and returns its handle.
    pub fn seed(&mut self, snapshot: TimeSnapshot) -> ClockHandle {
        let mut clock = TickingClock::seed(snapshot);
        clock.start();
        self.clocks.push(clock);
        ClockHandle(self.clocks.len() - 1)
    }

    /// Seeds one clock per snapshot, preserving order.
    pub fn seed_all(&mut self, snapshots: Vec<TimeSnapshot>) -> Vec<ClockHandle> {
        snapshots
            .into_iter()
            .map(|snapshot| self.seed(snapshot))
            .collect()
    }

    /// Delivers one cadence firing to every registered clock.
    ///
    /// Disposed clocks ignore the firing; they are kept in the registry so
    /// handles stay valid and the card grid keeps its cardinality.
    pub fn tick(&mut self) {
        for clock in &mut self.clocks {
            clock.advance();
        }
    }

    /// Stops further advancement for one clock. Idempotent; unknown handles
    /// are ignored.
    pub fn dispose(&mut self, handle: ClockHandle) {
        if let Some(clock) = self.clocks.get_mut(handle.0) {
            clock.dispose();
        }
    }

    /// Stops every clock. Called on dashboard teardown; safe to call more
    /// than once.
    pub fn dispose_all(&mut self) {
        for clock in &mut self.clocks {
            clock.dispose();
        }
    }

    /// Returns the clock behind a handle, if it exists.
    #[must_use]
    pub fn clock(&self, handle: ClockHandle) -> Option<&TickingClock> {
        self.clocks.get(handle.0)
    }

    /// All registered clocks in seeding order.
    #[must_use]
    pub fn clocks(&self) -> &[TickingClock] {
        &self.clocks
    }

    /// Number of registered clocks, disposed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    /// True when no clock has been seeded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }
}

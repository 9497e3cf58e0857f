//! Dashboard synchronization use case.
//!
//! One fetch per configured zone, issued concurrently, settling only when
//! every zone has either a service reading or a locally synthesized
//! fallback. This use case is infallible outward: the caller always gets
//! exactly one snapshot per zone, in configured order.

use chronodeck_domain::{TimeSnapshot, ZoneId, ZoneMetadata};
use futures::future::join_all;

use crate::ports::{Clock, TimeService, ZoneTimePayload};

/// Use case performing the once-per-activation synchronization pass.
pub struct SynchronizeDashboard<S, C> {
    service: S,
    clock: C,
}

impl<S: TimeService, C: Clock> SynchronizeDashboard<S, C> {
    /// Creates the use case from a time service adapter and a local clock.
    pub const fn new(service: S, clock: C) -> Self {
        Self { service, clock }
    }

    /// Synchronizes every configured zone concurrently and waits for all of
    /// them to settle.
    ///
    /// Failures are absorbed per zone: a failed fetch yields a fallback
    /// snapshot stamped with the local wall-clock time and is logged, never
    /// raised. One zone's failure cannot delay or corrupt another's result.
    pub async fn execute(&self, zones: &[ZoneId]) -> Vec<TimeSnapshot> {
        join_all(zones.iter().map(|zone| self.synchronize_zone(zone))).await
    }

    async fn synchronize_zone(&self, zone: &ZoneId) -> TimeSnapshot {
        match self.service.fetch_current_time(zone).await {
            Ok(payload) => {
                tracing::debug!(zone = %zone, instant = %payload.instant, "zone synchronized");
                into_snapshot(zone.clone(), payload)
            }
            Err(error) => {
                tracing::warn!(zone = %zone, %error, "time fetch failed, substituting local fallback");
                TimeSnapshot::fallback(zone.clone(), self.clock.now())
            }
        }
    }
}

fn into_snapshot(zone: ZoneId, payload: ZoneTimePayload) -> TimeSnapshot {
    TimeSnapshot::synchronized(
        zone,
        payload.instant,
        payload.utc_offset,
        ZoneMetadata {
            abbreviation: payload.abbreviation,
            dst: payload.dst,
            day_of_week: payload.day_of_week,
            day_of_year: payload.day_of_year,
            week_number: payload.week_number,
            unix_time: payload.unix_time,
        },
    )
}

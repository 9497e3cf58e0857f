//! Snapshots: one authoritative point-in-time reading per zone.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::zone::ZoneId;

/// Abbreviation sentinel carried by snapshots synthesized after a failed
/// fetch.
pub const FALLBACK_ABBREVIATION: &str = "N/A";

/// Zone metadata reported by the time service alongside the instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZoneMetadata {
    /// Short zone code, e.g. `GMT` or `JST`.
    pub abbreviation: String,
    /// Whether daylight saving time is currently in effect.
    pub dst: bool,
    /// Day of week, 0 = Sunday.
    pub day_of_week: u8,
    /// Ordinal day of the year.
    pub day_of_year: u16,
    /// ISO week number.
    pub week_number: u8,
    /// Seconds since the Unix epoch as reported by the service.
    pub unix_time: i64,
}

/// Immutable result of one synchronization with a time zone.
///
/// A snapshot is created exactly once per fetch (or per fetch failure) and
/// then seeds a [`crate::clock::TickingClock`]. It is never mutated; the
/// clock derives its advancing local value from the snapshot instant rather
/// than writing back into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSnapshot {
    zone: ZoneId,
    label: String,
    instant: DateTime<Utc>,
    utc_offset: FixedOffset,
    metadata: ZoneMetadata,
    is_fallback: bool,
}

impl TimeSnapshot {
    /// Creates a snapshot from a successful time service reading.
    #[must_use]
    pub fn synchronized(
        zone: ZoneId,
        instant: DateTime<Utc>,
        utc_offset: FixedOffset,
        metadata: ZoneMetadata,
    ) -> Self {
        let label = zone.display_label();
        Self {
            zone,
            label,
            instant,
            utc_offset,
            metadata,
            is_fallback: false,
        }
    }

    /// Creates a locally synthesized snapshot after a failed fetch.
    ///
    /// The instant is the local wall-clock time at the moment of failure,
    /// the abbreviation is the [`FALLBACK_ABBREVIATION`] sentinel and the
    /// offset is UTC. The card still renders and ticks; it just carries no
    /// authoritative service data.
    #[must_use]
    pub fn fallback(zone: ZoneId, now: DateTime<Utc>) -> Self {
        let label = zone.error_label();
        Self {
            zone,
            label,
            instant: now,
            utc_offset: Utc.fix(),
            metadata: ZoneMetadata {
                abbreviation: FALLBACK_ABBREVIATION.to_string(),
                ..ZoneMetadata::default()
            },
            is_fallback: true,
        }
    }

    /// The zone identifier this snapshot was requested for.
    #[must_use]
    pub fn zone(&self) -> &ZoneId {
        &self.zone
    }

    /// Short human-readable card label derived from the zone identifier.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Short zone code, `"N/A"` for fallback snapshots.
    #[must_use]
    pub fn abbreviation(&self) -> &str {
        &self.metadata.abbreviation
    }

    /// The authoritative instant at the moment of fetch.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The zone's UTC offset at the moment of fetch.
    #[must_use]
    pub const fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Service-provided zone metadata (zeroed for fallback snapshots).
    #[must_use]
    pub const fn metadata(&self) -> &ZoneMetadata {
        &self.metadata
    }

    /// True when this snapshot was synthesized locally because the fetch
    /// failed.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.is_fallback
    }
}

//! Time service port.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use chronodeck_domain::ZoneId;
use thiserror::Error;

/// Errors an adapter can report for one zone fetch.
///
/// These never escape the synchronization use case; every variant collapses
/// into a fallback snapshot there.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeServiceError {
    /// The endpoint plus zone identifier did not form a valid request URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The request could not be completed at the transport level.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned status {code}")]
    Status {
        /// HTTP status code of the response.
        code: u16,
    },

    /// The response body did not match the expected shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// One successful reading from the external time service.
///
/// This is the service's wire shape translated into domain-friendly types;
/// the use case turns it into a [`chronodeck_domain::TimeSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTimePayload {
    /// The authoritative instant reported for the zone.
    pub instant: DateTime<Utc>,
    /// Short zone code, e.g. `GMT`.
    pub abbreviation: String,
    /// The zone's current UTC offset.
    pub utc_offset: FixedOffset,
    /// Whether daylight saving time is in effect.
    pub dst: bool,
    /// Start of the current DST period, if any.
    pub dst_from: Option<DateTime<Utc>>,
    /// End of the current DST period, if any.
    pub dst_until: Option<DateTime<Utc>>,
    /// The zone's base offset from UTC in seconds, DST excluded.
    pub raw_offset: i32,
    /// Additional DST offset in seconds, zero outside DST.
    pub dst_offset: i32,
    /// Day of week, 0 = Sunday.
    pub day_of_week: u8,
    /// Ordinal day of the year.
    pub day_of_year: u16,
    /// ISO week number.
    pub week_number: u8,
    /// Seconds since the Unix epoch as reported by the service.
    pub unix_time: i64,
}

/// Port for fetching the current time of a zone from an external service.
#[async_trait]
pub trait TimeService: Send + Sync {
    /// Fetches one authoritative reading for `zone`.
    ///
    /// # Errors
    /// Returns a [`TimeServiceError`] for transport failures, non-success
    /// statuses and unparseable bodies.
    async fn fetch_current_time(&self, zone: &ZoneId) -> Result<ZoneTimePayload, TimeServiceError>;
}

//! Dashboard configuration.
//!
//! Settings are in-memory only: every dashboard activation starts from these
//! values, performs one synchronization cycle and seeds fresh clocks.
//! Nothing is persisted across runs.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::zone::ZoneId;

/// Default time service base endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://worldtimeapi.org/api/timezone/";

/// Zones shown on a fresh dashboard.
const DEFAULT_ZONES: &[&str] = &[
    "Europe/London",
    "America/New_York",
    "Asia/Tokyo",
    "Asia/Dubai",
    "Australia/Sydney",
];

/// Configuration for one dashboard activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Base endpoint the zone identifier is appended to.
    pub endpoint: Url,
    /// Zones to synchronize and display, in card order.
    pub zones: Vec<ZoneId>,
}

impl DashboardSettings {
    /// Creates settings from an endpoint string and zone identifiers.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidEndpoint`] if the endpoint does not
    /// parse as a URL, or [`DomainError::InvalidZoneId`] for an empty zone
    /// identifier.
    pub fn new<I, S>(endpoint: &str, zones: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| DomainError::InvalidEndpoint(format!("{e}: {endpoint}")))?;
        let zones = zones
            .into_iter()
            .map(ZoneId::new)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { endpoint, zones })
    }
}

impl Default for DashboardSettings {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_ZONES.iter().copied())
            .expect("default settings are well-formed")
    }
}

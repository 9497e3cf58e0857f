//! Time zone identifiers and display labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Placeholder label used when a valid identifier yields no usable city
/// segment (e.g. no `/` separator).
const UNKNOWN_LABEL: &str = "Unknown";

/// Placeholder label used on the fallback path for the same degenerate
/// identifiers.
const ERROR_LABEL: &str = "Error";

/// A canonical region/city time zone identifier (e.g. `Europe/London`).
///
/// The identifier is the request key against the time service. It is
/// validated to be non-empty at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneId(String);

impl ZoneId {
    /// Creates a zone identifier from a region/city string.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidZoneId`] if the identifier is empty or
    /// whitespace-only.
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidZoneId(id));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the short human-readable label shown on a clock card.
    ///
    /// The label is the trailing path segment with underscores replaced by
    /// spaces: `Asia/Tokyo` becomes `Tokyo`, `America/New_York` becomes
    /// `New York`. Identifiers without a `/` separator fall back to a fixed
    /// placeholder.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label_or(UNKNOWN_LABEL)
    }

    /// Derives the card label for a snapshot synthesized after a failed
    /// fetch. Same derivation as [`Self::display_label`], different
    /// placeholder for degenerate identifiers.
    #[must_use]
    pub fn error_label(&self) -> String {
        self.label_or(ERROR_LABEL)
    }

    fn label_or(&self, placeholder: &str) -> String {
        match self.0.rsplit_once('/') {
            Some((_, city)) if !city.is_empty() => city.replace('_', " "),
            _ => placeholder.to_string(),
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ZoneId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ZoneId> for String {
    fn from(zone: ZoneId) -> Self {
        zone.0
    }
}

//! Chronodeck Domain - Core business types
//!
//! This crate defines the domain model for the Chronodeck world clock
//! dashboard. All types here are pure Rust with no I/O dependencies.

pub mod clock;
pub mod error;
pub mod settings;
pub mod snapshot;
pub mod zone;

pub use clock::{ClockState, TickingClock};
pub use error::{DomainError, DomainResult};
pub use settings::{DEFAULT_ENDPOINT, DashboardSettings};
pub use snapshot::{FALLBACK_ABBREVIATION, TimeSnapshot, ZoneMetadata};
pub use zone::ZoneId;

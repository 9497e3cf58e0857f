//! Chronodeck Application - Use case orchestration
//!
//! This crate defines the ports to the outside world (time service, system
//! clock) and the use cases that drive the dashboard: one synchronization
//! pass per activation, then a shared one-second cadence fanning out to
//! every seeded clock.

pub mod ports;
pub mod scheduler;
pub mod use_cases;

pub use scheduler::{ClockHandle, ClockScheduler};
pub use use_cases::SynchronizeDashboard;

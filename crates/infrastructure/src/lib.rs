//! Chronodeck Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer: the World Time API client and the system clock.

pub mod adapters;

pub use adapters::{SystemClock, WorldTimeClient};

//! Port adapters.

mod system_clock;
mod world_time_client;

pub use system_clock::SystemClock;
pub use world_time_client::WorldTimeClient;

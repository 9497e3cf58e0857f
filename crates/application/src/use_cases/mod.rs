//! Application use cases (business logic orchestration).

mod synchronize_dashboard;

pub use synchronize_dashboard::SynchronizeDashboard;

//! Chronodeck UI - Presentation layer
//!
//! Pure view state and rendering for the dashboard: clock card formatting,
//! the loading/ready view state, informational overlays and the long-form
//! article. No I/O or timing behavior lives here; the app crate drives this
//! layer from its event loop.

pub mod card;
pub mod state;

pub use card::{format_date, format_time, render_card, render_dashboard};
pub use state::{Article, DashboardState, OverlaySection, OverlayState};

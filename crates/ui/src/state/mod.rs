//! UI view state.

mod dashboard_state;
mod overlay;

pub use dashboard_state::DashboardState;
pub use overlay::{Article, OverlaySection, OverlayState};

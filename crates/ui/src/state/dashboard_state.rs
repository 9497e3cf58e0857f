//! Dashboard view state.

use chronodeck_domain::DEFAULT_ENDPOINT;

/// View state for the dashboard surface.
///
/// Starts in the loading state; the app flips it to ready once the
/// synchronization join settles. The endpoint field mirrors the
/// configuration card's text input: edits are held here only and take
/// effect on the next activation, they do not trigger a refetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    loading: bool,
    endpoint_input: String,
}

impl DashboardState {
    /// Creates the initial loading state with the default endpoint shown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            loading: true,
            endpoint_input: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// True until the synchronization pass has settled.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks the synchronization pass as settled.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// The endpoint text as currently shown in the configuration card.
    #[must_use]
    pub fn endpoint_input(&self) -> &str {
        &self.endpoint_input
    }

    /// Replaces the endpoint text. Display-only until the next activation.
    pub fn set_endpoint_input(&mut self, value: impl Into<String>) {
        self.endpoint_input = value.into();
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

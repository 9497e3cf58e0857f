//! Clock card rendering.
//!
//! All formatting happens at the snapshot's UTC offset, so a card shows the
//! zone's own local time regardless of where the host machine sits.

use chronodeck_domain::TickingClock;

use crate::state::DashboardState;

/// Formats the displayed instant as a 24-hour `HH:MM:SS` string in the
/// card's zone.
#[must_use]
pub fn format_time(clock: &TickingClock) -> String {
    clock.zone_local().format("%H:%M:%S").to_string()
}

/// Formats the displayed instant as a long calendar date in the card's
/// zone, e.g. `Friday, June 21, 2024`.
#[must_use]
pub fn format_date(clock: &TickingClock) -> String {
    clock.zone_local().format("%A, %B %-d, %Y").to_string()
}

/// Renders one clock card: label and abbreviation, zone identifier, time
/// and date.
#[must_use]
pub fn render_card(clock: &TickingClock) -> String {
    let snapshot = clock.snapshot();
    format!(
        "{label}  [{abbr}]\n{zone}\n{time}\n{date}",
        label = snapshot.label().to_uppercase(),
        abbr = snapshot.abbreviation(),
        zone = snapshot.zone(),
        time = format_time(clock),
        date = format_date(clock),
    )
}

/// Renders the whole dashboard: a synchronizing notice while loading, then
/// one card per clock plus the endpoint configuration footer.
#[must_use]
pub fn render_dashboard(clocks: &[TickingClock], state: &DashboardState) -> String {
    if state.is_loading() {
        return "Synchronizing atomic clocks...".to_string();
    }

    let cards: Vec<String> = clocks.iter().map(render_card).collect();
    format!(
        "{}\n\nTime Zone API Endpoint: {}",
        cards.join("\n\n"),
        state.endpoint_input()
    )
}

//! End-to-end dashboard scenarios against a mocked time service.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use chronodeck_application::ports::{Clock, TimeService, TimeServiceError, ZoneTimePayload};
use chronodeck_application::{ClockScheduler, SynchronizeDashboard};
use chronodeck_domain::ZoneId;
use chronodeck_ui::{DashboardState, render_dashboard};
use pretty_assertions::assert_eq;

struct ScriptedTimeService {
    responses: HashMap<String, Result<ZoneTimePayload, TimeServiceError>>,
}

impl ScriptedTimeService {
    fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    fn respond(mut self, zone: &str, response: Result<ZoneTimePayload, TimeServiceError>) -> Self {
        self.responses.insert(zone.to_string(), response);
        self
    }
}

#[async_trait]
impl TimeService for ScriptedTimeService {
    async fn fetch_current_time(
        &self,
        zone: &ZoneId,
    ) -> Result<ZoneTimePayload, TimeServiceError> {
        self.responses
            .get(zone.as_str())
            .cloned()
            .unwrap_or(Err(TimeServiceError::Transport("unconfigured".to_string())))
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn london_payload() -> ZoneTimePayload {
    ZoneTimePayload {
        instant: "2024-06-21T09:15:00Z".parse().unwrap(),
        abbreviation: "BST".to_string(),
        utc_offset: FixedOffset::east_opt(3600).unwrap(),
        dst: true,
        dst_from: None,
        dst_until: None,
        raw_offset: 0,
        dst_offset: 3600,
        day_of_week: 5,
        day_of_year: 173,
        week_number: 25,
        unix_time: 1_718_961_300,
    }
}

fn zones(ids: &[&str]) -> Vec<ZoneId> {
    ids.iter().map(|id| ZoneId::new(*id).unwrap()).collect()
}

#[tokio::test]
async fn partial_failure_still_renders_every_card() {
    let service = ScriptedTimeService::new()
        .respond("Europe/London", Ok(london_payload()))
        .respond("Asia/Tokyo", Err(TimeServiceError::Status { code: 500 }));
    let clock = FixedClock("2024-06-21T08:15:30Z".parse().unwrap());
    let synchronize = SynchronizeDashboard::new(service, clock);

    let snapshots = synchronize
        .execute(&zones(&["Europe/London", "Asia/Tokyo"]))
        .await;
    assert_eq!(snapshots.len(), 2);

    let london = &snapshots[0];
    assert!(!london.is_fallback());
    assert_eq!(london.abbreviation(), "BST");

    let tokyo = &snapshots[1];
    assert!(tokyo.is_fallback());
    assert_eq!(tokyo.abbreviation(), "N/A");

    let mut scheduler = ClockScheduler::new();
    scheduler.seed_all(snapshots);

    let mut view = DashboardState::new();
    view.finish_loading();
    let rendered = render_dashboard(scheduler.clocks(), &view);

    assert!(rendered.contains("LONDON"));
    assert!(rendered.contains("TOKYO"));
    assert!(rendered.contains("[N/A]"));
}

#[tokio::test]
async fn seeded_clocks_tick_across_midnight() {
    let service = ScriptedTimeService::new().respond(
        "Europe/London",
        Err(TimeServiceError::Transport("offline".to_string())),
    );
    let clock = FixedClock("2024-01-01T23:59:59Z".parse().unwrap());
    let synchronize = SynchronizeDashboard::new(service, clock);

    let snapshots = synchronize.execute(&zones(&["Europe/London"])).await;

    let mut scheduler = ClockScheduler::new();
    let handle = scheduler.seed_all(snapshots)[0];
    scheduler.tick();

    assert_eq!(
        scheduler.clock(handle).unwrap().current_local(),
        "2024-01-02T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[tokio::test]
async fn teardown_stops_every_clock_even_if_the_cadence_keeps_firing() {
    let service = ScriptedTimeService::new().respond("Europe/London", Ok(london_payload()));
    let clock = FixedClock("2024-06-21T08:15:30Z".parse().unwrap());
    let synchronize = SynchronizeDashboard::new(service, clock);

    let snapshots = synchronize
        .execute(&zones(&["Europe/London", "Asia/Tokyo"]))
        .await;

    let mut scheduler = ClockScheduler::new();
    scheduler.seed_all(snapshots);
    scheduler.tick();
    scheduler.dispose_all();
    scheduler.tick();
    scheduler.tick();

    for clock in scheduler.clocks() {
        assert!(clock.is_disposed());
        assert_eq!(
            clock.current_local(),
            clock.snapshot().instant() + chrono::Duration::seconds(1)
        );
    }
}

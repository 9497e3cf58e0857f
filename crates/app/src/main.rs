//! Chronodeck - Main Entry Point
//!
//! Wires the World Time API client and system clock into the
//! synchronization use case, seeds one ticking clock per configured zone
//! and drives a shared one-second cadence until shutdown.

use std::time::Duration;

use chronodeck_application::{ClockScheduler, SynchronizeDashboard};
use chronodeck_domain::DashboardSettings;
use chronodeck_infrastructure::{SystemClock, WorldTimeClient};
use chronodeck_ui::{DashboardState, render_dashboard};
use tokio::time::{self, MissedTickBehavior};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = DashboardSettings::default();
    let mut view = DashboardState::new();
    view.set_endpoint_input(settings.endpoint.as_str());

    println!("{}", render_dashboard(&[], &view));

    let service = WorldTimeClient::new(settings.endpoint.clone())?;
    let synchronize = SynchronizeDashboard::new(service, SystemClock::new());

    tracing::info!(zones = settings.zones.len(), "synchronizing dashboard");
    let snapshots = synchronize.execute(&settings.zones).await;

    let mut scheduler = ClockScheduler::new();
    scheduler.seed_all(snapshots);
    view.finish_loading();

    let mut cadence = time::interval(Duration::from_secs(1));
    cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first interval tick completes immediately; consume it so the
    // clocks show the seeded instant for a full second.
    cadence.tick().await;

    draw(&scheduler, &view);

    loop {
        tokio::select! {
            _ = cadence.tick() => {
                scheduler.tick();
                draw(&scheduler, &view);
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(error) = result {
                    tracing::error!(%error, "failed to listen for shutdown signal");
                }
                break;
            }
        }
    }

    // Teardown: cancel the cadence for every card exactly once.
    scheduler.dispose_all();
    tracing::info!("dashboard torn down");
    Ok(())
}

fn draw(scheduler: &ClockScheduler, view: &DashboardState) {
    // ANSI clear-and-home keeps the grid in place between firings
    print!("\x1B[2J\x1B[H");
    println!("{}", render_dashboard(scheduler.clocks(), view));
}

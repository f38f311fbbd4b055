// SIREN Console - headless driver for the emergency alert simulation
// Copyright (c) 2025 Rayan Drissi
//
// Licensed under AGPL-3.0.

//! # SIREN Console
//!
//! Runs a full simulation session without a browser: spawns the device
//! fleet, drives the simulation manager at its polling cadence, merges
//! generated alerts into the feed and logs what the dashboard would show.
//!
//! ## Usage
//!
//! ```bash
//! # One minute of normal operation with 100 devices
//! siren-console
//!
//! # A reproducible emergency session
//! siren-console --scenario emergency --seed 42 --duration-secs 120
//! ```

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;
use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use siren::{
    analytics, AlertFeed, FeedCounters, FleetSimulator, ParamsUpdate, Scenario, SimulationManager,
    SimulationSnapshot,
};

/// SIREN simulation console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of devices in the simulated fleet
    #[arg(short, long, default_value = "100")]
    devices: usize,

    /// Seed for reproducible sessions (entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Scenario preset (normal, peak, emergency, maintenance)
    #[arg(long, default_value = "normal")]
    scenario: String,

    /// How long to run, in seconds
    #[arg(long, default_value = "60")]
    duration_secs: u64,

    /// Seconds between statistics log lines
    #[arg(long, default_value = "10")]
    snapshot_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// End-of-session report printed as JSON
#[derive(Serialize)]
struct SessionSummary {
    snapshot: SimulationSnapshot,
    counters: FeedCounters,
    active_device_percentage: u64,
    zones: Vec<analytics::ZoneActivity>,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };
        EnvFilter::from_default_env().add_directive(level.into())
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("SIREN Console v{}", env!("CARGO_PKG_VERSION"));

    let scenario = match args.scenario.parse::<Scenario>() {
        Ok(scenario) => scenario,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    let start_ms = now_ms();
    let mut fleet = match args.seed {
        Some(seed) => FleetSimulator::with_seed(args.devices, seed, start_ms),
        None => FleetSimulator::with_count(args.devices, start_ms),
    };
    let mut manager = match args.seed {
        Some(seed) => SimulationManager::with_seed(start_ms, seed),
        None => SimulationManager::new(start_ms),
    };
    let mut feed = AlertFeed::new();

    manager.update_params(ParamsUpdate::new().with_scenario(scenario), start_ms);
    info!(
        "Scenario: {} ({}), {} devices, running for {}s",
        scenario.label(),
        scenario.description(),
        fleet.len(),
        args.duration_secs
    );

    let deadline_ms = start_ms.saturating_add(args.duration_secs.saturating_mul(1000));
    let mut next_snapshot_ms = start_ms.saturating_add(args.snapshot_secs.saturating_mul(1000));

    loop {
        // Re-read each tick so a scenario change retimes the loop
        sleep(Duration::from_millis(manager.poll_interval_ms())).await;

        let now = now_ms();
        if now >= deadline_ms {
            break;
        }

        fleet.tick();

        if fleet.is_empty() {
            debug!("Empty roster, nothing to generate against");
        }

        if let Some(alert) = manager.generate(fleet.devices(), now) {
            info!(
                "Alert {}: {} from {} priority={} battery={:.0}% signal={:.0}%",
                alert.id,
                alert.kind,
                alert.device_id,
                alert.priority,
                alert.battery_level,
                alert.signal_strength
            );
            feed.push(alert);
        }

        if now >= next_snapshot_ms {
            let snapshot = manager.snapshot(now);
            info!(
                "Stats: uptime={} total={} events/h={} reliability={}% active_devices={}%",
                snapshot.uptime,
                snapshot.total_generated,
                snapshot.events_per_hour,
                snapshot.reliability,
                analytics::active_device_percentage(fleet.devices())
            );
            next_snapshot_ms = now.saturating_add(args.snapshot_secs.saturating_mul(1000));
        }
    }

    let end_ms = now_ms();
    let summary = SessionSummary {
        snapshot: manager.snapshot(end_ms),
        counters: feed.counters(),
        active_device_percentage: analytics::active_device_percentage(fleet.devices()),
        zones: analytics::alerts_by_zone(feed.alerts(), fleet.devices()),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("Failed to serialize summary: {}", e),
    }
}

//! # SIREN - Synthetic Incident & Response Emergency Network
//!
//! A simulation of an IoT personal emergency alert network: fall-detection
//! and panic-button wearables spread across geographic zones, generating
//! synthetic alerts that a dashboard consumes.
//!
//! ## Key Pieces
//!
//! - **Simulation Manager**: decides per tick whether to synthesize an
//!   alert, against which device, of which kind and priority
//! - **Fleet Simulator**: spawns and ages the device roster
//! - **Alert Feed**: bounded newest-first history with running counters
//! - **Scenarios**: presets scaling probabilities and cadence
//!
//! Time is always an explicit epoch-milliseconds argument and every
//! random source is seedable, so whole sessions replay deterministically.
//!
//! ## Quick Start
//!
//! ```rust
//! use siren::{AlertFeed, FleetSimulator, ParamsUpdate, Scenario, SimulationManager};
//!
//! // One session: a fleet, a manager, a feed
//! let mut fleet = FleetSimulator::with_seed(100, 1, 0);
//! let mut manager = SimulationManager::with_seed(0, 1);
//! let mut feed = AlertFeed::new();
//!
//! manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Peak), 0);
//!
//! // Host loop: age the fleet, attempt a generation, merge the result
//! for tick in 1..=20u64 {
//!     let now_ms = tick * manager.poll_interval_ms();
//!     fleet.tick();
//!     if let Some(alert) = manager.generate(fleet.devices(), now_ms) {
//!         feed.push(alert);
//!     }
//! }
//!
//! assert_eq!(feed.counters().total, manager.stats().total_generated);
//! ```
//!
//! ## Modules
//!
//! - [`simulation`]: the core manager (parameters, statistics, generation)
//! - [`fleet`]: device roster lifecycle
//! - [`feed`]: bounded alert history and lifecycle transitions
//! - [`alert`]: alert entity and its closed vocabularies
//! - [`device`]: device entity and status classification
//! - [`zone`]: geographic zones and selectors
//! - [`scenario`]: scenario presets
//! - [`analytics`]: aggregations for the dashboard widgets
//! - [`config`]: fixed configuration table

// Modules
pub mod alert;
pub mod analytics;
pub mod config;
pub mod device;
pub mod error;
pub mod feed;
pub mod fleet;
pub mod scenario;
pub mod simulation;
pub mod zone;

// Re-exports for convenient access
pub use alert::{Alert, AlertKind, AlertPriority, AlertStatus, KindSelector};
pub use device::{Device, DeviceStatus};
pub use error::{Result, SirenError};
pub use feed::{AlertFeed, FeedCounters};
pub use fleet::FleetSimulator;
pub use scenario::Scenario;
pub use simulation::{
    ParamsUpdate, SimulationManager, SimulationParams, SimulationSnapshot, SimulationStats,
};
pub use zone::{ZoneId, ZoneSelector};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Static configuration table for the simulation
//!
//! Every tunable in this module is fixed at process start; runtime
//! adjustments go through [`ParamsUpdate`](crate::ParamsUpdate) overrides
//! instead. Values mirror the deployed dashboard profile for Paris.

/// Number of devices spawned by the default fleet
pub const DEVICE_COUNT: usize = 100;

/// Base polling interval for the generation check, in milliseconds
pub const BASE_POLL_INTERVAL_MS: u64 = 3000;

/// Maximum alerts retained by the feed
pub const MAX_ALERT_HISTORY: usize = 50;

/// Base probability of emitting an alert once the minimum interval elapsed
pub const BASE_ALERT_PROBABILITY: f64 = 0.3;

/// Base probability that a generated alert is a fall rather than a button press
pub const BASE_FALL_PROBABILITY: f64 = 0.6;

// --- Device thresholds ---

/// Battery level at or below which a device reads as low battery
pub const BATTERY_LOW: f64 = 20.0;

/// Battery level at or below which a device reads as inactive
pub const BATTERY_CRITICAL: f64 = 10.0;

/// Signal strength at or below which a device reads as weak signal
pub const SIGNAL_WEAK: f64 = 30.0;

/// Floor for signal strength drift
pub const SIGNAL_CRITICAL: f64 = 10.0;

/// Battery drained per fleet tick, before the random component
pub const BATTERY_DRAIN_RATE: f64 = 0.05;

/// Full span of the per-tick signal drift
pub const SIGNAL_VARIATION_RANGE: f64 = 3.0;

// --- Geography ---

/// Latitude of the deployment center (Paris)
pub const CENTER_LAT: f64 = 48.8566;

/// Longitude of the deployment center (Paris)
pub const CENTER_LNG: f64 = 2.3522;

/// Radius of a zone, in degrees
pub const ZONE_RADIUS: f64 = 0.1;

/// Base spread applied when jittering an alert position around its device
pub const DEVICE_SPREAD: f64 = 0.001;

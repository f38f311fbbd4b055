//! Simulation manager
//!
//! The core of the system: owns the tunable parameters and the running
//! statistics, decides on each generation check whether to synthesize an
//! alert against the supplied roster, and derives the uptime and
//! throughput figures shown on the dashboard.
//!
//! The manager never reads the wall clock. Every operation takes the
//! current time as epoch milliseconds, so the host loop and the tests
//! control time explicitly. Randomness comes from an owned generator
//! seeded at construction; a fixed seed replays a full session.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::alert::{alert_id, Alert, AlertKind, AlertPriority, AlertStatus, KindSelector};
use crate::config::{BASE_ALERT_PROBABILITY, BASE_FALL_PROBABILITY, DEVICE_SPREAD};
use crate::device::Device;
use crate::scenario::Scenario;
use crate::zone::ZoneSelector;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Minimum seconds between generated alerts, at least 1
    pub alert_interval_secs: u64,
    /// Zone filter for device selection
    pub zone_selector: ZoneSelector,
    /// Kind filter for generated alerts
    pub kind_selector: KindSelector,
    /// Active scenario preset
    pub scenario: Scenario,
    /// Master gate; nothing generates while false
    pub running: bool,
    /// Operator override of the base alert probability, clamped to [0,1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_probability: Option<f64>,
    /// Operator override of the base fall probability, clamped to [0,1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fall_probability: Option<f64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            alert_interval_secs: 3,
            zone_selector: ZoneSelector::Any,
            kind_selector: KindSelector::Any,
            scenario: Scenario::Normal,
            running: true,
            alert_probability: None,
            fall_probability: None,
        }
    }
}

impl SimulationParams {
    /// Merge the supplied fields of a partial update
    pub fn merge(&mut self, update: ParamsUpdate) {
        if let Some(secs) = update.alert_interval_secs {
            self.alert_interval_secs = secs;
        }
        if let Some(zone) = update.zone_selector {
            self.zone_selector = zone;
        }
        if let Some(kind) = update.kind_selector {
            self.kind_selector = kind;
        }
        if let Some(scenario) = update.scenario {
            self.scenario = scenario;
        }
        if let Some(running) = update.running {
            self.running = running;
        }
        if let Some(p) = update.alert_probability {
            self.alert_probability = Some(p);
        }
        if let Some(p) = update.fall_probability {
            self.fall_probability = Some(p);
        }
    }

    /// Clamp fields to their documented ranges
    pub fn clamp(&mut self) {
        self.alert_interval_secs = self.alert_interval_secs.max(1);
        if let Some(p) = self.alert_probability {
            self.alert_probability = Some(p.clamp(0.0, 1.0));
        }
        if let Some(p) = self.fall_probability {
            self.fall_probability = Some(p.clamp(0.0, 1.0));
        }
    }
}

/// Partial parameter update from the operator UI.
///
/// Absent fields leave the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsUpdate {
    /// New minimum inter-alert interval in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_interval_secs: Option<u64>,
    /// New zone filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_selector: Option<ZoneSelector>,
    /// New kind filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind_selector: Option<KindSelector>,
    /// New scenario preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<Scenario>,
    /// New gate state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
    /// New alert probability override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_probability: Option<f64>,
    /// New fall probability override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fall_probability: Option<f64>,
}

impl ParamsUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum inter-alert interval
    pub fn with_alert_interval_secs(mut self, secs: u64) -> Self {
        self.alert_interval_secs = Some(secs);
        self
    }

    /// Set the zone filter
    pub fn with_zone_selector(mut self, zone: ZoneSelector) -> Self {
        self.zone_selector = Some(zone);
        self
    }

    /// Set the kind filter
    pub fn with_kind_selector(mut self, kind: KindSelector) -> Self {
        self.kind_selector = Some(kind);
        self
    }

    /// Set the scenario preset
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Open or close the generation gate
    pub fn with_running(mut self, running: bool) -> Self {
        self.running = Some(running);
        self
    }

    /// Set the alert probability override
    pub fn with_alert_probability(mut self, probability: f64) -> Self {
        self.alert_probability = Some(probability);
        self
    }

    /// Set the fall probability override
    pub fn with_fall_probability(mut self, probability: f64) -> Self {
        self.fall_probability = Some(probability);
        self
    }
}

/// Running statistics, cleared only by an explicit reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Alerts generated since start or last reset
    pub total_generated: u64,
    /// Session start, epoch milliseconds
    pub started_at_ms: u64,
    /// Timestamp of the most recent successful generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_alert_ms: Option<u64>,
    /// Timestamp of the most recent scenario change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_since_ms: Option<u64>,
}

impl SimulationStats {
    fn new(now_ms: u64) -> Self {
        Self {
            total_generated: 0,
            started_at_ms: now_ms,
            last_alert_ms: None,
            scenario_since_ms: None,
        }
    }
}

/// Point-in-time statistics record for the display layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// Wall-clock moment the snapshot describes
    pub generated_at: DateTime<Utc>,
    /// Formatted uptime ("3h25m", or "42m" under one hour)
    pub uptime: String,
    /// Rounded generation throughput
    pub events_per_hour: u64,
    /// Synthetic reliability percentage with one decimal ("95.3")
    pub reliability: String,
    /// Alerts generated since start or last reset
    pub total_generated: u64,
    /// Active scenario
    pub scenario: Scenario,
    /// Whether generation is running
    pub running: bool,
}

impl SimulationSnapshot {
    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Owns the parameters, statistics and random source for one session
#[derive(Debug)]
pub struct SimulationManager {
    params: SimulationParams,
    stats: SimulationStats,
    rng: StdRng,
}

impl SimulationManager {
    /// Create a manager with default parameters and entropy seeding
    pub fn new(now_ms: u64) -> Self {
        Self::build(SimulationParams::default(), None, now_ms)
    }

    /// Create a manager with a fixed seed for reproducible sessions
    pub fn with_seed(now_ms: u64, seed: u64) -> Self {
        Self::build(SimulationParams::default(), Some(seed), now_ms)
    }

    /// Create a manager with explicit parameters
    pub fn with_params(params: SimulationParams, now_ms: u64) -> Self {
        Self::build(params, None, now_ms)
    }

    /// Create a manager with explicit parameters and a fixed seed
    pub fn with_params_and_seed(params: SimulationParams, seed: u64, now_ms: u64) -> Self {
        Self::build(params, Some(seed), now_ms)
    }

    fn build(mut params: SimulationParams, seed: Option<u64>, now_ms: u64) -> Self {
        params.clamp();
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            params,
            stats: SimulationStats::new(now_ms),
            rng,
        }
    }

    /// Current parameters
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Current statistics
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Apply a partial parameter update.
    ///
    /// Supplied fields replace current values and are clamped to their
    /// documented ranges. Supplying `scenario` stamps the scenario-start
    /// time, even when the value is unchanged.
    pub fn update_params(&mut self, update: ParamsUpdate, now_ms: u64) {
        let scenario_supplied = update.scenario.is_some();
        self.params.merge(update);
        self.params.clamp();
        if scenario_supplied {
            self.stats.scenario_since_ms = Some(now_ms);
        }
    }

    /// Current alert probability: override or base, scaled by the scenario
    pub fn alert_probability(&self) -> f64 {
        let base = self
            .params
            .alert_probability
            .unwrap_or(BASE_ALERT_PROBABILITY);
        base * self.params.scenario.alert_multiplier()
    }

    /// Current fall probability; emergency and maintenance pin it
    pub fn fall_probability(&self) -> f64 {
        match self.params.scenario.fall_override() {
            Some(p) => p,
            None => self.params.fall_probability.unwrap_or(BASE_FALL_PROBABILITY),
        }
    }

    /// Decide whether an alert should be generated at `now_ms`.
    ///
    /// Enforces the gate and the minimum inter-alert interval, then
    /// draws once against the scenario-scaled alert probability. The
    /// interval is a floor, not a schedule: a passing draw is still
    /// required once it has elapsed.
    pub fn should_generate(&mut self, now_ms: u64) -> bool {
        if !self.params.running {
            return false;
        }

        // No alert yet counts as one at the epoch
        let last = self.stats.last_alert_ms.unwrap_or(0);
        // Saturate: an absurd operator interval means "never", not a panic
        let interval_ms = self.params.alert_interval_secs.saturating_mul(1000);
        if now_ms.saturating_sub(last) < interval_ms {
            return false;
        }

        self.rng.gen::<f64>() < self.alert_probability()
    }

    /// Run one generation attempt against the supplied roster.
    ///
    /// Returns `None` without touching statistics when the roster is
    /// empty, the gate is closed, the minimum interval has not elapsed
    /// or the probability draw fails. On success the counter and the
    /// last-alert timestamp are updated before the alert is built, so a
    /// returned alert is always accounted for.
    pub fn generate(&mut self, devices: &[Device], now_ms: u64) -> Option<Alert> {
        if devices.is_empty() || !self.should_generate(now_ms) {
            return None;
        }

        self.stats.total_generated += 1;
        self.stats.last_alert_ms = Some(now_ms);

        let device = self.select_device(devices);
        let kind = self.pick_kind();
        let priority = self.priority_for(kind);

        let battery_variation = (self.rng.gen::<f64>() - 0.5) * 20.0; // ±10 points
        let signal_variation = (self.rng.gen::<f64>() - 0.5) * 30.0; // ±15 points
        // Spread factor redrawn per alert, 1x to 3x the base spread
        let spread = DEVICE_SPREAD * (1.0 + self.rng.gen::<f64>() * 2.0);

        Some(Alert {
            id: alert_id(now_ms, &mut self.rng),
            device_id: device.id.clone(),
            kind,
            timestamp_ms: now_ms,
            latitude: device.latitude + (self.rng.gen::<f64>() - 0.5) * spread,
            longitude: device.longitude + (self.rng.gen::<f64>() - 0.5) * spread,
            battery_level: (device.battery_level + battery_variation).clamp(0.0, 100.0),
            signal_strength: (device.signal_strength + signal_variation).clamp(0.0, 100.0),
            status: AlertStatus::Received,
            priority,
        })
    }

    /// Pick the source device honoring the zone filter.
    ///
    /// An empty zone falls back to the full roster, so selection never
    /// fails on a non-empty roster.
    fn select_device<'a>(&mut self, devices: &'a [Device]) -> &'a Device {
        let zone = match self.params.zone_selector {
            ZoneSelector::Any => return &devices[self.rng.gen_range(0..devices.len())],
            ZoneSelector::Zone(zone) => zone,
        };

        let in_zone: Vec<&Device> = devices.iter().filter(|d| d.zone == zone.name()).collect();
        if in_zone.is_empty() {
            return &devices[self.rng.gen_range(0..devices.len())];
        }
        in_zone[self.rng.gen_range(0..in_zone.len())]
    }

    fn pick_kind(&mut self) -> AlertKind {
        if let Some(kind) = self.params.kind_selector.forced() {
            return kind;
        }
        if self.rng.gen::<f64>() < self.fall_probability() {
            AlertKind::FallDetected
        } else {
            AlertKind::ButtonPressed
        }
    }

    fn priority_for(&self, kind: AlertKind) -> AlertPriority {
        match kind {
            AlertKind::FallDetected => AlertPriority::Critical,
            AlertKind::ButtonPressed => self.params.scenario.button_priority(),
        }
    }

    /// Polling cadence the host loop should use for generation checks
    pub fn poll_interval_ms(&self) -> u64 {
        self.params.scenario.poll_interval_ms()
    }

    /// Elapsed time since start, formatted as "XhYm" or "Ym"
    pub fn uptime(&self, now_ms: u64) -> String {
        let elapsed = now_ms.saturating_sub(self.stats.started_at_ms);
        let hours = elapsed / 3_600_000;
        let minutes = (elapsed % 3_600_000) / 60_000;
        if hours > 0 {
            format!("{}h{}m", hours, minutes)
        } else {
            format!("{}m", minutes)
        }
    }

    /// Rounded generation throughput; 0 before any time has elapsed
    pub fn events_per_hour(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.stats.started_at_ms);
        if elapsed == 0 {
            return 0;
        }
        let hours = elapsed as f64 / 3_600_000.0;
        (self.stats.total_generated as f64 / hours).round() as u64
    }

    /// Synthetic reliability percentage, one decimal.
    ///
    /// Base figure plus a stability bonus growing 0.1 per hour (capped
    /// at 3), minus 2 under the emergency scenario. Cosmetic, not a
    /// measured value.
    pub fn reliability(&self, now_ms: u64) -> String {
        let hours = now_ms.saturating_sub(self.stats.started_at_ms) as f64 / 3_600_000.0;
        let stability_bonus = (hours * 0.1).min(3.0);
        let malus = if self.params.scenario == Scenario::Emergency {
            2.0
        } else {
            0.0
        };
        format!("{:.1}", 95.0 + stability_bonus - malus)
    }

    /// Statistics snapshot for the display layer
    pub fn snapshot(&self, now_ms: u64) -> SimulationSnapshot {
        SimulationSnapshot {
            generated_at: DateTime::from_timestamp_millis(now_ms as i64)
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            uptime: self.uptime(now_ms),
            events_per_hour: self.events_per_hour(now_ms),
            reliability: self.reliability(now_ms),
            total_generated: self.stats.total_generated,
            scenario: self.params.scenario,
            running: self.params.running,
        }
    }

    /// Clear statistics; parameters are untouched
    pub fn reset(&mut self, now_ms: u64) {
        self.stats = SimulationStats::new(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceStatus;
    use crate::zone::ZoneId;

    const HOUR_MS: u64 = 3_600_000;

    fn seeded(now_ms: u64) -> SimulationManager {
        SimulationManager::with_seed(now_ms, 42)
    }

    fn test_device(id: usize, zone: &str) -> Device {
        Device {
            id: format!("device_{}", id),
            name: format!("Dispositif {}", id),
            latitude: 48.85,
            longitude: 2.35,
            battery_level: 80.0,
            signal_strength: 90.0,
            last_activity_ms: 0,
            status: DeviceStatus::Active,
            zone: zone.to_string(),
        }
    }

    fn roster(count: usize) -> Vec<Device> {
        (1..=count)
            .map(|i| test_device(i, ZoneId::Centre.name()))
            .collect()
    }

    /// Manager that passes every probability draw
    fn always_firing(now_ms: u64, interval_secs: u64) -> SimulationManager {
        let params = SimulationParams {
            alert_interval_secs: interval_secs,
            alert_probability: Some(1.0),
            ..Default::default()
        };
        SimulationManager::with_params_and_seed(params, 42, now_ms)
    }

    #[test]
    fn test_default_params() {
        let manager = SimulationManager::with_seed(0, 1);
        assert_eq!(manager.params().alert_interval_secs, 3);
        assert_eq!(manager.params().scenario, Scenario::Normal);
        assert!(manager.params().running);
        assert_eq!(manager.stats().total_generated, 0);
        assert!(manager.stats().last_alert_ms.is_none());
    }

    #[test]
    fn test_gating() {
        let mut manager = always_firing(0, 1);
        manager.update_params(ParamsUpdate::new().with_running(false), 0);

        let devices = roster(10);
        for t in 1..=20u64 {
            assert!(manager.generate(&devices, t * 10_000).is_none());
        }
        assert_eq!(manager.stats().total_generated, 0);
    }

    #[test]
    fn test_interval_throttle() {
        let mut manager = always_firing(0, 3);
        let devices = roster(10);

        assert!(manager.generate(&devices, 3000).is_some());
        // 1s later: below the 3s floor
        assert!(manager.generate(&devices, 4000).is_none());
        assert!(manager.generate(&devices, 5999).is_none());
        assert!(manager.generate(&devices, 6000).is_some());
        assert_eq!(manager.stats().total_generated, 2);
    }

    #[test]
    fn test_empty_roster_is_a_no_op() {
        let mut manager = always_firing(0, 1);
        assert!(manager.generate(&[], 10_000).is_none());
        assert_eq!(manager.stats().total_generated, 0);
        assert!(manager.stats().last_alert_ms.is_none());
    }

    #[test]
    fn test_zero_probability_override_suppresses_generation() {
        let mut manager = seeded(0);
        manager.update_params(ParamsUpdate::new().with_alert_probability(0.0), 0);

        let devices = roster(10);
        for t in 1..=50u64 {
            assert!(manager.generate(&devices, t * 10_000).is_none());
        }
    }

    #[test]
    fn test_fall_always_critical() {
        let mut manager = always_firing(0, 1);
        manager.update_params(
            ParamsUpdate::new().with_kind_selector(KindSelector::Only(AlertKind::FallDetected)),
            0,
        );

        let devices = roster(10);
        for t in 1..=20u64 {
            if let Some(alert) = manager.generate(&devices, t * 2000) {
                assert_eq!(alert.kind, AlertKind::FallDetected);
                assert_eq!(alert.priority, AlertPriority::Critical);
            }
        }
        assert!(manager.stats().total_generated > 0);
    }

    #[test]
    fn test_button_priority_by_scenario() {
        let mut manager = always_firing(0, 1);
        manager.update_params(
            ParamsUpdate::new().with_kind_selector(KindSelector::Only(AlertKind::ButtonPressed)),
            0,
        );
        let devices = roster(10);

        let alert = manager.generate(&devices, 2000).unwrap();
        assert_eq!(alert.priority, AlertPriority::High);

        manager.update_params(
            ParamsUpdate::new().with_scenario(Scenario::Maintenance),
            2000,
        );
        let alert = manager.generate(&devices, 4000).unwrap();
        assert_eq!(alert.priority, AlertPriority::Low);

        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Emergency), 4000);
        let alert = manager.generate(&devices, 6000).unwrap();
        assert_eq!(alert.priority, AlertPriority::High);
    }

    #[test]
    fn test_readings_stay_clamped() {
        let mut manager = always_firing(0, 1);
        let mut devices = roster(4);
        // Extremes so the variation would overflow without clamping
        for device in &mut devices {
            device.battery_level = 98.0;
            device.signal_strength = 3.0;
        }

        for t in 1..=100u64 {
            if let Some(alert) = manager.generate(&devices, t * 1000) {
                assert!((0.0..=100.0).contains(&alert.battery_level));
                assert!((0.0..=100.0).contains(&alert.signal_strength));
            }
        }
    }

    #[test]
    fn test_zone_filter_selects_tagged_devices() {
        let mut manager = always_firing(0, 1);
        manager.update_params(
            ParamsUpdate::new().with_zone_selector(ZoneSelector::Zone(ZoneId::Nord)),
            0,
        );

        let mut devices = roster(30);
        for device in devices.iter_mut().skip(20) {
            device.zone = ZoneId::Nord.name().to_string();
        }
        let nord_ids: Vec<String> = devices[20..].iter().map(|d| d.id.clone()).collect();

        for t in 1..=20u64 {
            let alert = manager.generate(&devices, t * 1000).unwrap();
            assert!(nord_ids.contains(&alert.device_id));
        }
    }

    #[test]
    fn test_empty_zone_falls_back_to_full_roster() {
        let mut manager = always_firing(0, 1);
        manager.update_params(
            ParamsUpdate::new().with_zone_selector(ZoneSelector::Zone(ZoneId::Ouest)),
            0,
        );

        // Nobody in Zone 5; selection still succeeds
        let devices = roster(10);
        let alert = manager.generate(&devices, 1000).unwrap();
        assert!(devices.iter().any(|d| d.id == alert.device_id));
    }

    #[test]
    fn test_update_clamps_out_of_range_values() {
        let mut manager = seeded(0);
        manager.update_params(
            ParamsUpdate::new()
                .with_alert_interval_secs(0)
                .with_alert_probability(1.5)
                .with_fall_probability(-0.2),
            0,
        );

        assert_eq!(manager.params().alert_interval_secs, 1);
        assert_eq!(manager.params().alert_probability, Some(1.0));
        assert_eq!(manager.params().fall_probability, Some(0.0));
    }

    #[test]
    fn test_huge_interval_suppresses_without_overflow() {
        let mut manager = always_firing(0, 1);
        manager.update_params(
            ParamsUpdate::new().with_alert_interval_secs(u64::MAX),
            0,
        );

        let devices = roster(10);
        // The ms conversion saturates; the interval simply never elapses
        assert!(manager.generate(&devices, u64::MAX).is_none());
        assert_eq!(manager.stats().total_generated, 0);
    }

    #[test]
    fn test_scenario_change_stamps_start_time() {
        let mut manager = seeded(0);
        assert!(manager.stats().scenario_since_ms.is_none());

        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Peak), 5000);
        assert_eq!(manager.stats().scenario_since_ms, Some(5000));

        // Same scenario again still stamps
        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Peak), 9000);
        assert_eq!(manager.stats().scenario_since_ms, Some(9000));

        // Unrelated update does not
        manager.update_params(ParamsUpdate::new().with_running(false), 12_000);
        assert_eq!(manager.stats().scenario_since_ms, Some(9000));
    }

    #[test]
    fn test_probability_scaling() {
        let mut manager = seeded(0);
        assert!((manager.alert_probability() - 0.3).abs() < 1e-9);

        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Peak), 0);
        assert!((manager.alert_probability() - 0.9).abs() < 1e-9);

        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Emergency), 0);
        assert!((manager.alert_probability() - 1.5).abs() < 1e-9);

        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Maintenance), 0);
        assert!((manager.alert_probability() - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_fall_probability_pinning() {
        let mut manager = seeded(0);
        manager.update_params(ParamsUpdate::new().with_fall_probability(0.4), 0);
        assert!((manager.fall_probability() - 0.4).abs() < 1e-9);

        // Scenario pins win over the operator override
        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Emergency), 0);
        assert!((manager.fall_probability() - 0.8).abs() < 1e-9);

        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Maintenance), 0);
        assert!((manager.fall_probability() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_poll_interval_follows_scenario() {
        let mut manager = seeded(0);
        assert_eq!(manager.poll_interval_ms(), 3000);
        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Emergency), 0);
        assert_eq!(manager.poll_interval_ms(), 1000);
    }

    #[test]
    fn test_uptime_formatting() {
        let manager = seeded(0);
        assert_eq!(manager.uptime(0), "0m");
        assert_eq!(manager.uptime(59 * 60_000), "59m");
        assert_eq!(manager.uptime(HOUR_MS), "1h0m");
        assert_eq!(manager.uptime(2 * HOUR_MS + 5 * 60_000), "2h5m");
    }

    #[test]
    fn test_events_per_hour() {
        let mut manager = always_firing(0, 1);
        let devices = roster(10);
        for t in 1..=5u64 {
            assert!(manager.generate(&devices, t * 1000).is_some());
        }

        assert_eq!(manager.events_per_hour(HOUR_MS), 5);
        assert_eq!(manager.events_per_hour(30 * 60_000), 10);
    }

    #[test]
    fn test_events_per_hour_zero_elapsed() {
        let manager = seeded(0);
        assert_eq!(manager.events_per_hour(0), 0);
    }

    #[test]
    fn test_reliability_figures() {
        let mut manager = seeded(0);
        assert_eq!(manager.reliability(0), "95.0");
        // Bonus caps at +3 past thirty hours
        assert_eq!(manager.reliability(50 * HOUR_MS), "98.0");

        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Emergency), 0);
        assert_eq!(manager.reliability(0), "93.0");
    }

    #[test]
    fn test_reset_clears_stats_only() {
        let mut manager = always_firing(0, 1);
        manager.update_params(ParamsUpdate::new().with_scenario(Scenario::Peak), 0);
        let devices = roster(10);
        for t in 1..=5u64 {
            manager.generate(&devices, t * 1000);
        }
        assert!(manager.stats().total_generated > 0);

        manager.reset(10_000);
        assert_eq!(manager.stats().total_generated, 0);
        assert_eq!(manager.stats().started_at_ms, 10_000);
        assert!(manager.stats().last_alert_ms.is_none());
        assert!(manager.stats().scenario_since_ms.is_none());
        // Parameters survive the reset
        assert_eq!(manager.params().scenario, Scenario::Peak);
        assert_eq!(manager.uptime(10_000), "0m");
    }

    #[test]
    fn test_counter_never_decreases_between_resets() {
        let mut manager = seeded(0);
        let devices = roster(10);
        let mut previous = 0;
        for t in 1..=200u64 {
            manager.generate(&devices, t * 1000);
            let total = manager.stats().total_generated;
            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn test_reproducibility_with_same_seed() {
        let devices = roster(10);

        let run = |seed: u64| -> Vec<Alert> {
            let mut manager = SimulationManager::with_seed(0, seed);
            (1..=100u64)
                .filter_map(|t| manager.generate(&devices, t * 1000))
                .collect()
        };

        let a = run(7);
        let b = run(7);
        let c = run(8);
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert_ne!(a, c);
    }

    #[test]
    fn test_snapshot_serializes() {
        let manager = seeded(0);
        let snapshot = manager.snapshot(90 * 60_000);
        assert_eq!(snapshot.uptime, "1h30m");
        assert_eq!(snapshot.scenario, Scenario::Normal);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"uptime\": \"1h30m\""));
        assert!(json.contains("\"reliability\""));
    }
}

//! Device fleet simulator
//!
//! Spawns the roster of wearable devices and ages it one step per tick:
//! battery drains, signal drifts, status is reclassified. The simulation
//! manager only ever borrows the roster; the fleet owns it.
//!
//! Like the manager, the fleet owns a seedable random source and never
//! reads the wall clock, so a fixed seed replays the same fleet history.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{
    BATTERY_DRAIN_RATE, DEVICE_COUNT, SIGNAL_CRITICAL, SIGNAL_VARIATION_RANGE,
};
use crate::device::{Device, DeviceStatus};
use crate::zone::ZoneId;

/// Owns and ages the device roster
#[derive(Debug)]
pub struct FleetSimulator {
    devices: Vec<Device>,
    rng: StdRng,
}

impl FleetSimulator {
    /// Spawn the default-sized fleet with entropy seeding
    pub fn new(now_ms: u64) -> Self {
        Self::build(DEVICE_COUNT, None, now_ms)
    }

    /// Spawn a fleet of `count` devices with entropy seeding
    pub fn with_count(count: usize, now_ms: u64) -> Self {
        Self::build(count, None, now_ms)
    }

    /// Spawn a fleet of `count` devices with a fixed seed
    pub fn with_seed(count: usize, seed: u64, now_ms: u64) -> Self {
        Self::build(count, Some(seed), now_ms)
    }

    fn build(count: usize, seed: Option<u64>, now_ms: u64) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let devices = (0..count).map(|i| Self::spawn(i, now_ms, &mut rng)).collect();
        Self { devices, rng }
    }

    /// Build one device at roster index `index`.
    ///
    /// Zones are assigned in blocks of 20 by index; the position scatters
    /// around the zone anchor; levels start uniform in [0,100); the last
    /// activity falls somewhere in the past hour.
    fn spawn(index: usize, now_ms: u64, rng: &mut StdRng) -> Device {
        let zone = ZoneId::for_device_index(index);
        let (latitude, longitude) = zone.scatter(rng);
        let battery_level = rng.gen::<f64>() * 100.0;
        let signal_strength = rng.gen::<f64>() * 100.0;
        Device {
            id: format!("device_{}", index + 1),
            name: format!("Dispositif {}", index + 1),
            latitude,
            longitude,
            battery_level,
            signal_strength,
            last_activity_ms: now_ms.saturating_sub((rng.gen::<f64>() * 3_600_000.0) as u64),
            status: DeviceStatus::classify(battery_level, signal_strength),
            zone: zone.name().to_string(),
        }
    }

    /// Current roster, read-only
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Number of devices in the roster
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Age every device one step.
    ///
    /// Battery drains by the base rate plus a small random component and
    /// floors at 0; devices never recharge. Signal drifts randomly within
    /// its variation range and stays in [critical, 100]. Status is then
    /// reclassified from the new levels.
    pub fn tick(&mut self) {
        for device in &mut self.devices {
            let drain = BATTERY_DRAIN_RATE + self.rng.gen::<f64>() * 0.02;
            device.battery_level = (device.battery_level - drain).max(0.0);

            let drift = (self.rng.gen::<f64>() - 0.5) * SIGNAL_VARIATION_RANGE;
            device.signal_strength =
                (device.signal_strength + drift).clamp(SIGNAL_CRITICAL, 100.0);

            device.reclassify();
        }
    }
}

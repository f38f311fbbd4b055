//! Device entity and status classification
//!
//! Devices are produced and mutated by the fleet simulator; everything
//! else reads them. Battery and signal are percentages in [0,100].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{BATTERY_CRITICAL, BATTERY_LOW, SIGNAL_WEAK};

/// Operational status derived from battery and signal levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    /// Nominal operation
    #[default]
    Active,
    /// Battery too low to report reliably
    Inactive,
    /// Battery below the low threshold
    LowBattery,
    /// Signal below the weak threshold
    WeakSignal,
}

impl DeviceStatus {
    /// Classify a device from its battery and signal levels.
    ///
    /// Battery wins over signal: a device with both a critical battery
    /// and a weak signal reads as inactive.
    pub fn classify(battery_level: f64, signal_strength: f64) -> DeviceStatus {
        if battery_level <= BATTERY_CRITICAL {
            return DeviceStatus::Inactive;
        }
        if battery_level <= BATTERY_LOW {
            return DeviceStatus::LowBattery;
        }
        if signal_strength <= SIGNAL_WEAK {
            return DeviceStatus::WeakSignal;
        }
        DeviceStatus::Active
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceStatus::Active => "active",
            DeviceStatus::Inactive => "inactive",
            DeviceStatus::LowBattery => "low_battery",
            DeviceStatus::WeakSignal => "weak_signal",
        };
        write!(f, "{}", s)
    }
}

/// A simulated fleet member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Stable identifier ("device_1", ...)
    pub id: String,
    /// Display name
    pub name: String,
    /// Latitude of the device position
    pub latitude: f64,
    /// Longitude of the device position
    pub longitude: f64,
    /// Battery level in [0,100]
    pub battery_level: f64,
    /// Signal strength in [0,100]
    pub signal_strength: f64,
    /// Timestamp of the last observed activity, epoch milliseconds
    pub last_activity_ms: u64,
    /// Derived operational status
    pub status: DeviceStatus,
    /// Zone label ("Zone 1 - Centre", ...)
    pub zone: String,
}

impl Device {
    /// Refresh the derived status from the current levels
    pub fn reclassify(&mut self) {
        self.status = DeviceStatus::classify(self.battery_level, self.signal_strength);
    }
}

//! Aggregations for the analytics widgets
//!
//! Pure functions over alert and device slices; nothing here holds state.
//! Hour bucketing uses UTC.

use chrono::{DateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::alert::{Alert, AlertStatus};
use crate::device::{Device, DeviceStatus};
use crate::zone::ZoneId;

/// Direction of a zone's alert activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// More than 5 alerts
    Up,
    /// Fewer than 2 alerts
    Down,
    /// In between
    Stable,
}

impl Trend {
    fn for_count(count: u64) -> Trend {
        if count > 5 {
            Trend::Up
        } else if count < 2 {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

/// Alert count and trend for one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneActivity {
    /// Zone display name
    pub zone: String,
    /// Alerts attributed to devices in this zone
    pub alerts: u64,
    /// Activity trend derived from the count
    pub trend: Trend,
}

/// Alert counts per UTC hour of day, index 0 = midnight
pub fn alerts_by_hour(alerts: &[Alert]) -> [u64; 24] {
    let mut buckets = [0u64; 24];
    for alert in alerts {
        if let Some(dt) = DateTime::from_timestamp_millis(alert.timestamp_ms as i64) {
            buckets[dt.hour() as usize] += 1;
        }
    }
    buckets
}

/// Alert counts per zone, resolved through the source device.
///
/// Zones without any attributed alert are omitted; alerts whose device
/// is no longer in the roster are skipped. Results follow the zone
/// display order.
pub fn alerts_by_zone(alerts: &[Alert], devices: &[Device]) -> Vec<ZoneActivity> {
    ZoneId::ALL
        .iter()
        .filter_map(|zone| {
            let count = alerts
                .iter()
                .filter(|alert| {
                    devices
                        .iter()
                        .any(|d| d.id == alert.device_id && d.zone == zone.name())
                })
                .count() as u64;
            if count == 0 {
                return None;
            }
            Some(ZoneActivity {
                zone: zone.name().to_string(),
                alerts: count,
                trend: Trend::for_count(count),
            })
        })
        .collect()
}

/// Mean response-time target over resolved alerts, in seconds.
///
/// The simulation has no real dispatch, so the figure averages the
/// per-priority targets of whatever got resolved. 0 when nothing has.
pub fn average_response_secs(alerts: &[Alert]) -> u64 {
    let resolved: Vec<&Alert> = alerts
        .iter()
        .filter(|a| a.status == AlertStatus::Resolved)
        .collect();
    if resolved.is_empty() {
        return 0;
    }

    let total: u64 = resolved
        .iter()
        .map(|a| a.priority.response_target_secs())
        .sum();
    ((total as f64) / (resolved.len() as f64)).round() as u64
}

/// Share of the roster currently reading active, rounded percentage
pub fn active_device_percentage(devices: &[Device]) -> u64 {
    if devices.is_empty() {
        return 0;
    }
    let active = devices
        .iter()
        .filter(|d| d.status == DeviceStatus::Active)
        .count();
    ((active as f64 / devices.len() as f64) * 100.0).round() as u64
}

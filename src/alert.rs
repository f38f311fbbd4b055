//! Alert entity and its closed vocabularies
//!
//! Alerts are synthesized by the simulation manager and owned by the
//! caller afterwards; lifecycle transitions happen in the feed.

use std::fmt;
use std::str::FromStr;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SirenError;

/// Kind of emergency event a device can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    /// Fall detected by the accelerometer
    FallDetected,
    /// Panic button pressed by the wearer
    ButtonPressed,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertKind::FallDetected => "FALL_DETECTED",
            AlertKind::ButtonPressed => "BUTTON_PRESSED",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AlertKind {
    type Err = SirenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fall_detected" | "fall" => Ok(AlertKind::FallDetected),
            "button_pressed" | "button" => Ok(AlertKind::ButtonPressed),
            _ => Err(SirenError::UnknownAlertKind(s.to_string())),
        }
    }
}

/// Operator kind filter: draw the kind, or force one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindSelector {
    /// Draw against the fall probability each generation
    Any,
    /// Force every generated alert to this kind
    Only(AlertKind),
}

impl KindSelector {
    /// Parse an operator key ("random", "any", "all", or an alert kind)
    pub fn from_key(key: &str) -> Result<KindSelector, SirenError> {
        match key {
            "random" | "any" | "all" => Ok(KindSelector::Any),
            other => AlertKind::from_str(other).map(KindSelector::Only),
        }
    }

    /// The forced kind, if any
    pub fn forced(&self) -> Option<AlertKind> {
        match self {
            KindSelector::Any => None,
            KindSelector::Only(kind) => Some(*kind),
        }
    }
}

impl Default for KindSelector {
    fn default() -> Self {
        KindSelector::Any
    }
}

impl FromStr for KindSelector {
    type Err = SirenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// Response priority of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    /// Immediate dispatch
    Critical,
    /// Urgent response
    High,
    /// Standard response
    Medium,
    /// Scheduled follow-up
    Low,
}

impl AlertPriority {
    /// Sort weight; higher means more urgent
    pub fn weight(&self) -> u8 {
        match self {
            AlertPriority::Critical => 4,
            AlertPriority::High => 3,
            AlertPriority::Medium => 2,
            AlertPriority::Low => 1,
        }
    }

    /// Target response time in seconds
    pub fn response_target_secs(&self) -> u64 {
        match self {
            AlertPriority::Critical => 120,
            AlertPriority::High => 180,
            AlertPriority::Medium => 300,
            AlertPriority::Low => 600,
        }
    }
}

impl fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertPriority::Critical => "critical",
            AlertPriority::High => "high",
            AlertPriority::Medium => "medium",
            AlertPriority::Low => "low",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle state of an alert in the response queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Just generated, awaiting triage
    #[default]
    Received,
    /// A response team is handling it
    InProgress,
    /// Closed
    Resolved,
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertStatus::Received => "received",
            AlertStatus::InProgress => "in_progress",
            AlertStatus::Resolved => "resolved",
        };
        write!(f, "{}", s)
    }
}

/// A synthesized emergency event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique identifier ("sim_alert_<timestamp>_<suffix>")
    pub id: String,
    /// Identifier of the source device
    pub device_id: String,
    /// Kind of event
    pub kind: AlertKind,
    /// Creation timestamp, epoch milliseconds
    pub timestamp_ms: u64,
    /// Latitude, jittered around the device position
    pub latitude: f64,
    /// Longitude, jittered around the device position
    pub longitude: f64,
    /// Battery reading at emission, in [0,100]
    pub battery_level: f64,
    /// Signal reading at emission, in [0,100]
    pub signal_strength: f64,
    /// Lifecycle state
    pub status: AlertStatus,
    /// Response priority
    pub priority: AlertPriority,
}

/// Build a unique alert id from a timestamp and a random suffix.
///
/// Nine alphanumeric characters keep the collision probability negligible
/// even for ids generated within the same millisecond.
pub fn alert_id<R: Rng>(timestamp_ms: u64, rng: &mut R) -> String {
    let suffix: String = std::iter::repeat_with(|| rng.sample(Alphanumeric))
        .take(9)
        .map(char::from)
        .collect();
    format!("sim_alert_{}_{}", timestamp_ms, suffix)
}

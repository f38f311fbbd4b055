//! Scenario presets
//!
//! A scenario scales the generation probabilities, pins the fall ratio,
//! shortens the polling cadence and shifts button-press priorities. The
//! four presets match the operator control panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alert::AlertPriority;
use crate::config::BASE_POLL_INTERVAL_MS;
use crate::error::SirenError;

/// Named simulation preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Sporadic baseline activity
    #[default]
    Normal,
    /// Rush hour, three times the alert rate
    Peak,
    /// Emergency situation, five times the rate and mostly falls
    Emergency,
    /// Maintenance window, test alerts at half rate
    Maintenance,
}

impl Scenario {
    /// All scenarios, in control-panel order
    pub const ALL: [Scenario; 4] = [
        Scenario::Normal,
        Scenario::Peak,
        Scenario::Emergency,
        Scenario::Maintenance,
    ];

    /// Operator key ("normal", "peak", "emergency", "maintenance")
    pub fn key(&self) -> &'static str {
        match self {
            Scenario::Normal => "normal",
            Scenario::Peak => "peak",
            Scenario::Emergency => "emergency",
            Scenario::Maintenance => "maintenance",
        }
    }

    /// Display name shown on the control panel
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Normal => "Fonctionnement Normal",
            Scenario::Peak => "Heure de Pointe",
            Scenario::Emergency => "Situation d'Urgence",
            Scenario::Maintenance => "Mode Maintenance",
        }
    }

    /// One-line description shown on the control panel
    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Normal => "Alertes sporadiques normales",
            Scenario::Peak => "Augmentation du trafic d'alertes",
            Scenario::Emergency => "Pic d'alertes critiques",
            Scenario::Maintenance => "Alertes de test système",
        }
    }

    /// Factor applied to the base alert probability
    pub fn alert_multiplier(&self) -> f64 {
        match self {
            Scenario::Normal => 1.0,
            Scenario::Peak => 3.0,
            Scenario::Emergency => 5.0,
            Scenario::Maintenance => 0.5,
        }
    }

    /// Pinned fall probability, overriding base and operator values
    pub fn fall_override(&self) -> Option<f64> {
        match self {
            Scenario::Emergency => Some(0.8),
            Scenario::Maintenance => Some(0.1),
            _ => None,
        }
    }

    /// Polling cadence for the generation check.
    ///
    /// Intense scenarios poll faster; the minimum inter-alert interval
    /// inside the manager remains the actual throttle.
    pub fn poll_interval_ms(&self) -> u64 {
        match self {
            Scenario::Emergency => 1000,
            Scenario::Peak => 1500,
            _ => BASE_POLL_INTERVAL_MS,
        }
    }

    /// Priority assigned to button-press alerts under this scenario
    pub fn button_priority(&self) -> AlertPriority {
        match self {
            Scenario::Emergency => AlertPriority::High,
            Scenario::Maintenance => AlertPriority::Low,
            _ => AlertPriority::High,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Scenario {
    type Err = SirenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Scenario::Normal),
            "peak" => Ok(Scenario::Peak),
            "emergency" => Ok(Scenario::Emergency),
            "maintenance" => Ok(Scenario::Maintenance),
            _ => Err(SirenError::UnknownScenario(s.to_string())),
        }
    }
}

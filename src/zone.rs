//! Geographic zones of the deployment
//!
//! The fleet is partitioned into five named sectors around the Paris
//! center. Zones carry their anchor coordinates and the short keys used
//! by the operator UI ("zone1".."zone5").

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ZONE_RADIUS;

/// A named geographic sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneId {
    /// Zone 1 - Centre
    Centre,
    /// Zone 2 - Nord
    Nord,
    /// Zone 3 - Sud
    Sud,
    /// Zone 4 - Est
    Est,
    /// Zone 5 - Ouest
    Ouest,
}

impl ZoneId {
    /// All zones, in display order
    pub const ALL: [ZoneId; 5] = [
        ZoneId::Centre,
        ZoneId::Nord,
        ZoneId::Sud,
        ZoneId::Est,
        ZoneId::Ouest,
    ];

    /// Short key used by the operator UI
    pub fn key(&self) -> &'static str {
        match self {
            ZoneId::Centre => "zone1",
            ZoneId::Nord => "zone2",
            ZoneId::Sud => "zone3",
            ZoneId::Est => "zone4",
            ZoneId::Ouest => "zone5",
        }
    }

    /// Full display name, as stored in device zone labels
    pub fn name(&self) -> &'static str {
        match self {
            ZoneId::Centre => "Zone 1 - Centre",
            ZoneId::Nord => "Zone 2 - Nord",
            ZoneId::Sud => "Zone 3 - Sud",
            ZoneId::Est => "Zone 4 - Est",
            ZoneId::Ouest => "Zone 5 - Ouest",
        }
    }

    /// Anchor coordinates (latitude, longitude)
    pub fn anchor(&self) -> (f64, f64) {
        match self {
            ZoneId::Centre => (48.8566, 2.3522),
            ZoneId::Nord => (48.88, 2.3522),
            ZoneId::Sud => (48.83, 2.3522),
            ZoneId::Est => (48.8566, 2.38),
            ZoneId::Ouest => (48.8566, 2.32),
        }
    }

    /// Look up a zone by its UI key
    pub fn from_key(key: &str) -> Option<ZoneId> {
        Self::ALL.iter().find(|z| z.key() == key).copied()
    }

    /// Zone at a position in display order, wrapping past the end
    pub fn from_index(index: usize) -> ZoneId {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Zone assigned to a device by roster index (blocks of 20)
    pub fn for_device_index(index: usize) -> ZoneId {
        Self::from_index(index / (Self::ALL.len() * 4))
    }

    /// Random position within the zone radius around the anchor
    pub fn scatter<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        let (lat, lng) = self.anchor();
        (
            lat + (rng.gen::<f64>() - 0.5) * ZONE_RADIUS,
            lng + (rng.gen::<f64>() - 0.5) * ZONE_RADIUS,
        )
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Operator zone filter: everything, or one sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneSelector {
    /// No filtering; any device may be selected
    Any,
    /// Restrict selection to one zone
    Zone(ZoneId),
}

impl ZoneSelector {
    /// Parse an operator key ("random", "any", "all", "zone1".."zone5").
    ///
    /// Unknown keys map to Zone 1 - Centre rather than failing; the UI
    /// only offers known keys, so this path is a safety net.
    pub fn from_key(key: &str) -> ZoneSelector {
        match key {
            "random" | "any" | "all" => ZoneSelector::Any,
            other => ZoneSelector::Zone(ZoneId::from_key(other).unwrap_or(ZoneId::Centre)),
        }
    }

    /// The selected zone, if any
    pub fn zone(&self) -> Option<ZoneId> {
        match self {
            ZoneSelector::Any => None,
            ZoneSelector::Zone(z) => Some(*z),
        }
    }
}

impl Default for ZoneSelector {
    fn default() -> Self {
        ZoneSelector::Any
    }
}

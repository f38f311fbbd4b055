//! Bounded alert feed
//!
//! The caller-side half of the generation contract: the manager hands an
//! alert over and the feed merges it into a bounded, newest-first history
//! while the aggregate counters keep counting past evictions. Lifecycle
//! transitions (received, in progress, resolved) happen here, never in
//! the manager.

use serde::{Deserialize, Serialize};

use crate::alert::{Alert, AlertPriority, AlertStatus};
use crate::config::MAX_ALERT_HISTORY;
use crate::error::{Result, SirenError};

/// Aggregate counters surviving feed eviction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCounters {
    /// Alerts ever pushed, including evicted ones
    pub total: u64,
    /// Critical-priority alerts ever pushed
    pub critical: u64,
}

/// Bounded newest-first alert history with running counters
#[derive(Debug, Clone)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
    counters: FeedCounters,
    capacity: usize,
}

impl Default for AlertFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertFeed {
    /// Create a feed with the default history cap
    pub fn new() -> Self {
        Self::with_capacity(MAX_ALERT_HISTORY)
    }

    /// Create a feed retaining at most `capacity` alerts
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            alerts: Vec::with_capacity(capacity),
            counters: FeedCounters::default(),
            capacity,
        }
    }

    /// Merge a freshly generated alert.
    ///
    /// The alert goes to the front; anything past the cap falls off the
    /// back. Counters always advance, even when the push evicts.
    pub fn push(&mut self, alert: Alert) {
        self.counters.total += 1;
        if alert.priority == AlertPriority::Critical {
            self.counters.critical += 1;
        }

        self.alerts.insert(0, alert);
        self.alerts.truncate(self.capacity);
    }

    /// Retained alerts, newest first
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Aggregate counters since creation
    pub fn counters(&self) -> FeedCounters {
        self.counters
    }

    /// Number of alerts currently retained
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Whether the feed holds no alerts
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Move an alert to a new lifecycle state.
    ///
    /// Fails only when the id is unknown, which includes alerts already
    /// evicted from the bounded history.
    pub fn set_status(&mut self, alert_id: &str, status: AlertStatus) -> Result<()> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == alert_id)
            .ok_or_else(|| SirenError::UnknownAlertId(alert_id.to_string()))?;
        alert.status = status;
        Ok(())
    }

    /// Retained alerts sorted for the response queue: priority weight
    /// descending, then newest first within a priority.
    pub fn ordered(&self) -> Vec<&Alert> {
        let mut sorted: Vec<&Alert> = self.alerts.iter().collect();
        sorted.sort_by(|a, b| {
            b.priority
                .weight()
                .cmp(&a.priority.weight())
                .then(b.timestamp_ms.cmp(&a.timestamp_ms))
        });
        sorted
    }

    /// Retained alerts in the given lifecycle state, newest first
    pub fn with_status(&self, status: AlertStatus) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.status == status).collect()
    }

    /// Number of retained alerts in the given lifecycle state
    pub fn count_with_status(&self, status: AlertStatus) -> usize {
        self.alerts.iter().filter(|a| a.status == status).count()
    }
}

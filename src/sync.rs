//! Keeps the grouped project list in step with the backend.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, warn};

use crate::client::AdminApi;
use crate::types::ProjectSnapshot;

/// Holds the last successfully fetched snapshot and a busy flag for the view.
#[derive(Debug)]
pub struct SyncController {
    snapshot: ProjectSnapshot,
    loading: bool,
    last_synced: Option<DateTime<Local>>,
}

impl Default for SyncController {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncController {
    pub fn new() -> Self {
        Self {
            snapshot: ProjectSnapshot::default(),
            loading: true,
            last_synced: None,
        }
    }

    pub fn snapshot(&self) -> &ProjectSnapshot {
        &self.snapshot
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_synced(&self) -> Option<DateTime<Local>> {
        self.last_synced
    }

    /// Raise the loading flag ahead of a refresh so the view can show it.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Fetch the full project list and replace the held snapshot.
    ///
    /// A failed fetch is logged and keeps the previous snapshot. The loading
    /// flag is cleared either way. Returns whether the snapshot was replaced.
    pub async fn refresh(&mut self, api: &dyn AdminApi) -> bool {
        self.begin();
        let result = api.fetch_projects().await;
        self.loading = false;

        match result {
            Ok(snapshot) => {
                debug!(count = snapshot.len(), "Snapshot replaced");
                self.snapshot = snapshot;
                self.last_synced = Some(Local::now());
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch projects");
                false
            }
        }
    }
}

/// Recurring refresh schedule for the lifetime of a view.
///
/// The first tick is one full period after `start`; the caller refreshes
/// immediately on its own. Dropping the timer cancels the schedule.
pub struct RefreshTimer {
    interval: Interval,
}

impl RefreshTimer {
    pub fn start(period: Duration) -> Self {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Wait for the next scheduled refresh.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }
}

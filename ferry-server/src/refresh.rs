//! Periodic schedule refresh.
//!
//! The scheduler owns the write side of the [`SnapshotStore`]: it fetches a
//! complete snapshot from a [`Producer`] and installs it, first once at
//! startup and then on a fixed period. A failed or timed-out fetch leaves
//! the previous snapshot in place; stale data beats no data.

use std::future::Future;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval, timeout};
use tracing::{info, warn};

use crate::capacity::CapacityError;
use crate::domain::ScheduleSnapshot;
use crate::store::SnapshotStore;
use crate::telemetry::Telemetry;

/// Source of complete schedule snapshots.
///
/// A producer yields either a full snapshot or an error, never a partial
/// result, so a successful fetch is always safe to install wholesale.
pub trait Producer: Send + Sync {
    /// Fetch a complete snapshot from the upstream source.
    fn fetch(&self) -> impl Future<Output = Result<ScheduleSnapshot, CapacityError>> + Send;
}

/// Drives the refresh cycle against a [`SnapshotStore`].
pub struct RefreshScheduler<P> {
    producer: P,
    store: SnapshotStore,
    telemetry: Telemetry,
    period: Duration,
    attempt_timeout: Duration,
}

impl<P: Producer> RefreshScheduler<P> {
    /// Create a scheduler.
    ///
    /// `attempt_timeout` bounds each fetch, so a hung producer cannot stall
    /// the refresh cycle past the next tick.
    pub fn new(
        producer: P,
        store: SnapshotStore,
        telemetry: Telemetry,
        period: Duration,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            producer,
            store,
            telemetry,
            period,
            attempt_timeout,
        }
    }

    /// Run one refresh attempt and install the result.
    ///
    /// On success, returns the number of sailings installed. On failure the
    /// store is untouched and the previous snapshot remains current.
    pub async fn refresh_once(&self) -> Result<usize, CapacityError> {
        let snapshot = timeout(self.attempt_timeout, self.producer.fetch())
            .await
            .map_err(|_| CapacityError::Timeout(self.attempt_timeout))??;

        let count = snapshot.sailing_count();
        self.store.replace(snapshot).await;
        Ok(count)
    }

    /// Run the refresh loop forever.
    ///
    /// A tick that comes due while the previous refresh is still in flight
    /// is skipped, so at most one fetch runs at a time and snapshots are
    /// installed in the order their ticks were issued.
    pub async fn run(self) {
        let mut ticks = interval(self.period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        ticks.tick().await; // First tick is immediate; startup already refreshed

        loop {
            ticks.tick().await;
            match self.refresh_once().await {
                Ok(count) => info!(sailings = count, "updated sailing data"),
                Err(e) => {
                    warn!(error = %e, "refresh failed, keeping previous snapshot");
                    self.telemetry.refresh_failed(&e);
                }
            }
        }
    }
}

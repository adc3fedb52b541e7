//! Query resolution against the current snapshot.

use std::sync::Arc;

use crate::domain::{DestinationSchedule, Sailing, ScheduleSnapshot, TerminalCode};
use crate::network::TerminalGraph;
use crate::store::SnapshotStore;

/// Resolves request parameters into views of the current snapshot.
///
/// Validation runs against the terminal graph before the snapshot is
/// consulted: an invalid code is not-found no matter what the snapshot
/// holds, and a valid code with no current sailings is an empty result,
/// not a missing one. Terminal codes match case-insensitively.
#[derive(Debug, Clone)]
pub struct QueryResolver {
    store: SnapshotStore,
    network: Arc<TerminalGraph>,
}

impl QueryResolver {
    /// Create a resolver over a store and route network.
    pub fn new(store: SnapshotStore, network: Arc<TerminalGraph>) -> Self {
        Self { store, network }
    }

    /// The full current snapshot.
    pub async fn resolve_all(&self) -> Arc<ScheduleSnapshot> {
        self.store.current().await
    }

    /// All sailings out of a departure terminal, keyed by destination.
    ///
    /// Returns `None` when `departure` is not a valid departure terminal.
    pub async fn resolve_departure(&self, departure: &str) -> Option<DestinationSchedule> {
        let departure = TerminalCode::parse_normalized(departure).ok()?;
        if !self.network.is_valid_departure(&departure) {
            return None;
        }

        let snapshot = self.store.current().await;
        Some(snapshot.departures(&departure).cloned().unwrap_or_default())
    }

    /// The sailings for a (departure, destination) pair.
    ///
    /// Returns `None` unless `departure` is a valid departure terminal and
    /// `destination` is reachable from it.
    pub async fn resolve_route(&self, departure: &str, destination: &str) -> Option<Vec<Sailing>> {
        let departure = TerminalCode::parse_normalized(departure).ok()?;
        let destination = TerminalCode::parse_normalized(destination).ok()?;
        if !self.network.is_valid_route(&departure, &destination) {
            return None;
        }

        let snapshot = self.store.current().await;
        Some(
            snapshot
                .route(&departure, &destination)
                .map(<[Sailing]>::to_vec)
                .unwrap_or_default(),
        )
    }
}

//! The schedule snapshot type.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::sailing::Sailing;
use super::terminal::TerminalCode;

/// Sailings for a single departure terminal, keyed by destination.
pub type DestinationSchedule = HashMap<TerminalCode, Vec<Sailing>>;

/// A complete, self-consistent copy of all currently known sailings.
///
/// Snapshots are immutable once published: the refresh loop builds a new one
/// from a full feed response and swaps it into the [`SnapshotStore`] wholesale.
/// Nothing ever patches an installed snapshot in place, which is what lets
/// readers use one without synchronization.
///
/// An empty snapshot is valid; it is what the server holds before the first
/// successful refresh.
///
/// [`SnapshotStore`]: crate::store::SnapshotStore
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    /// Departure terminal → destination terminal → sailings in schedule order.
    pub schedule: HashMap<TerminalCode, DestinationSchedule>,
}

impl ScheduleSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the sailings for one route. Replaces any previous entry for the pair.
    pub fn insert(&mut self, departure: TerminalCode, destination: TerminalCode, sailings: Vec<Sailing>) {
        self.schedule
            .entry(departure)
            .or_default()
            .insert(destination, sailings);
    }

    /// All known sailings out of a departure terminal, keyed by destination.
    pub fn departures(&self, departure: &TerminalCode) -> Option<&DestinationSchedule> {
        self.schedule.get(departure)
    }

    /// The sailings for one (departure, destination) pair.
    pub fn route(&self, departure: &TerminalCode, destination: &TerminalCode) -> Option<&[Sailing]> {
        self.schedule
            .get(departure)
            .and_then(|dests| dests.get(destination))
            .map(Vec::as_slice)
    }

    /// Total number of sailings across all routes.
    pub fn sailing_count(&self) -> usize {
        self.schedule
            .values()
            .flat_map(|dests| dests.values())
            .map(Vec::len)
            .sum()
    }

    /// Returns true if no sailings are known.
    pub fn is_empty(&self) -> bool {
        self.sailing_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> TerminalCode {
        TerminalCode::parse(s).unwrap()
    }

    fn sailing(time: &str) -> Sailing {
        Sailing {
            time: time.to_string(),
            arrival_time: None,
            vessel_name: "Test Vessel".to_string(),
            fill: 50,
            car_fill: 40,
            oversize_fill: 60,
        }
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = ScheduleSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.sailing_count(), 0);
        assert!(snapshot.departures(&code("TSA")).is_none());
        assert!(snapshot.route(&code("TSA"), &code("SWB")).is_none());
    }

    #[test]
    fn insert_and_lookup() {
        let mut snapshot = ScheduleSnapshot::new();
        snapshot.insert(code("TSA"), code("SWB"), vec![sailing("9:00 am"), sailing("11:00 am")]);
        snapshot.insert(code("TSA"), code("DUK"), vec![sailing("10:15 am")]);

        assert_eq!(snapshot.sailing_count(), 3);
        assert!(!snapshot.is_empty());

        let from_tsa = snapshot.departures(&code("TSA")).unwrap();
        assert_eq!(from_tsa.len(), 2);

        let tsa_swb = snapshot.route(&code("TSA"), &code("SWB")).unwrap();
        assert_eq!(tsa_swb.len(), 2);
        assert_eq!(tsa_swb[0].time, "9:00 am");

        assert!(snapshot.route(&code("SWB"), &code("TSA")).is_none());
    }

    #[test]
    fn json_shape_matches_feed() {
        let json = r#"{
            "schedule": {
                "TSA": {
                    "SWB": [
                        {
                            "time": "9:00 am",
                            "vesselName": "Spirit of Vancouver Island",
                            "fill": 40,
                            "carFill": 35,
                            "oversizeFill": 55
                        }
                    ],
                    "DUK": []
                }
            }
        }"#;

        let snapshot: ScheduleSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.sailing_count(), 1);
        assert_eq!(snapshot.route(&code("TSA"), &code("SWB")).unwrap().len(), 1);
        assert_eq!(snapshot.route(&code("TSA"), &code("DUK")).unwrap().len(), 0);
    }

    #[test]
    fn feed_keys_are_normalized() {
        // The feed is not trusted to send uppercase terminal codes
        let json = r#"{"schedule": {"tsa": {"swb": []}}}"#;

        let snapshot: ScheduleSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.departures(&code("TSA")).is_some());
        assert!(snapshot.route(&code("TSA"), &code("SWB")).is_some());
    }
}

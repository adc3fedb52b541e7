//! Sailing records from the capacity feed.

use serde::{Deserialize, Serialize};

/// One scheduled ferry departure with its capacity data.
///
/// The core cache and lookup code never inspects these fields; a sailing is
/// an opaque payload that is parsed from the feed and serialized back out to
/// API clients. Times are kept as the feed's display strings (e.g. "9:00 am")
/// rather than parsed, since the server never does time arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sailing {
    /// Scheduled departure time, as reported by the feed.
    pub time: String,

    /// Scheduled arrival time, if the feed reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,

    /// Name of the vessel operating the sailing.
    pub vessel_name: String,

    /// Overall deck space filled, as a percentage (0-100).
    pub fill: u8,

    /// Standard vehicle space filled, as a percentage.
    pub car_fill: u8,

    /// Oversize vehicle space filled, as a percentage.
    pub oversize_fill: u8,
}

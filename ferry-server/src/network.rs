//! The terminal route network.
//!
//! Which destination terminals are reachable from each departure terminal is
//! fixed configuration, not data from the capacity feed: the feed only
//! reports sailings for routes that exist, while request validation must
//! reject pairs that never exist. This module provides that adjacency table,
//! built once at startup and immutable for the process lifetime.

use std::collections::HashMap;

use crate::domain::TerminalCode;

/// The set of valid departure terminals and the destinations reachable
/// from each.
///
/// All lookups take [`TerminalCode`] values, which are uppercase by
/// construction, so matching is case-insensitive as long as inputs go
/// through [`TerminalCode::parse_normalized`].
#[derive(Debug, Clone, Default)]
pub struct TerminalGraph {
    /// Departure terminal → destinations, in route-table order.
    routes: HashMap<TerminalCode, Vec<TerminalCode>>,
}

impl TerminalGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a destination reachable from a departure terminal.
    ///
    /// Adding the same pair twice has no effect.
    pub fn add(&mut self, departure: TerminalCode, destination: TerminalCode) {
        let dests = self.routes.entry(departure).or_default();
        if !dests.contains(&destination) {
            dests.push(destination);
        }
    }

    /// Check whether a terminal is a valid departure terminal.
    pub fn is_valid_departure(&self, departure: &TerminalCode) -> bool {
        self.routes.contains_key(departure)
    }

    /// Check whether (departure, destination) is a valid route.
    pub fn is_valid_route(&self, departure: &TerminalCode, destination: &TerminalCode) -> bool {
        self.routes
            .get(departure)
            .is_some_and(|dests| dests.contains(destination))
    }

    /// The destinations reachable from a departure terminal.
    ///
    /// Returns `None` if the terminal is not a valid departure terminal.
    pub fn destinations_from(&self, departure: &TerminalCode) -> Option<&[TerminalCode]> {
        self.routes.get(departure).map(Vec::as_slice)
    }

    /// Returns the number of departure terminals.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are configured.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder for constructing a terminal graph.
///
/// Provides a fluent API for adding route-table rows. Invalid terminal
/// codes are silently skipped.
#[derive(Debug, Default)]
pub struct TerminalGraphBuilder {
    inner: TerminalGraph,
}

impl TerminalGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a departure terminal with its reachable destinations.
    pub fn route(mut self, departure: &str, destinations: &[&str]) -> Self {
        let Ok(departure) = TerminalCode::parse(departure) else {
            return self;
        };
        for dest in destinations {
            if let Ok(dest) = TerminalCode::parse(dest) {
                self.inner.add(departure, dest);
            }
        }
        self
    }

    /// Build the terminal graph.
    pub fn build(self) -> TerminalGraph {
        self.inner
    }
}

/// The BC Ferries major-route network.
///
/// Six departure terminals on the Vancouver / Vancouver Island corridor:
/// Tsawwassen (TSA), Swartz Bay (SWB), Horseshoe Bay (HSB), Duke Point (DUK),
/// Langdale (LNG) and Departure Bay (NAN).
pub fn bc_ferries_network() -> TerminalGraph {
    TerminalGraphBuilder::new()
        .route("TSA", &["SWB", "SGI", "DUK"])
        .route("SWB", &["TSA", "FUL", "SGI"])
        .route("HSB", &["NAN", "LNG", "BOW"])
        .route("DUK", &["TSA"])
        .route("LNG", &["HSB"])
        .route("NAN", &["HSB"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> TerminalCode {
        TerminalCode::parse(s).unwrap()
    }

    #[test]
    fn empty_graph() {
        let graph = TerminalGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(!graph.is_valid_departure(&code("TSA")));
        assert!(!graph.is_valid_route(&code("TSA"), &code("SWB")));
        assert!(graph.destinations_from(&code("TSA")).is_none());
    }

    #[test]
    fn add_and_lookup() {
        let mut graph = TerminalGraph::new();
        graph.add(code("TSA"), code("SWB"));
        graph.add(code("TSA"), code("DUK"));

        assert!(graph.is_valid_departure(&code("TSA")));
        assert!(graph.is_valid_route(&code("TSA"), &code("SWB")));
        assert!(graph.is_valid_route(&code("TSA"), &code("DUK")));

        // Routes are directed
        assert!(!graph.is_valid_departure(&code("SWB")));
        assert!(!graph.is_valid_route(&code("SWB"), &code("TSA")));

        let dests = graph.destinations_from(&code("TSA")).unwrap();
        assert_eq!(dests, &[code("SWB"), code("DUK")]);
    }

    #[test]
    fn duplicate_add_is_ignored() {
        let mut graph = TerminalGraph::new();
        graph.add(code("TSA"), code("SWB"));
        graph.add(code("TSA"), code("SWB"));

        assert_eq!(graph.destinations_from(&code("TSA")).unwrap().len(), 1);
    }

    #[test]
    fn builder() {
        let graph = TerminalGraphBuilder::new()
            .route("TSA", &["SWB", "DUK"])
            .route("DUK", &["TSA"])
            .build();

        assert_eq!(graph.len(), 2);
        assert!(graph.is_valid_route(&code("TSA"), &code("DUK")));
        assert!(graph.is_valid_route(&code("DUK"), &code("TSA")));
    }

    #[test]
    fn builder_ignores_invalid_codes() {
        let graph = TerminalGraphBuilder::new()
            .route("INVALID", &["SWB"])
            .route("TSA", &["123", "SWB"])
            .build();

        assert_eq!(graph.len(), 1);
        let dests = graph.destinations_from(&code("TSA")).unwrap();
        assert_eq!(dests, &[code("SWB")]);
    }

    #[test]
    fn bc_ferries_network_routes() {
        let graph = bc_ferries_network();

        assert_eq!(graph.len(), 6);

        assert!(graph.is_valid_route(&code("TSA"), &code("SWB")));
        assert!(graph.is_valid_route(&code("TSA"), &code("SGI")));
        assert!(graph.is_valid_route(&code("TSA"), &code("DUK")));
        assert!(graph.is_valid_route(&code("SWB"), &code("FUL")));
        assert!(graph.is_valid_route(&code("HSB"), &code("BOW")));
        assert!(graph.is_valid_route(&code("LNG"), &code("HSB")));
        assert!(graph.is_valid_route(&code("NAN"), &code("HSB")));

        // Reachable in the network, but not from this departure
        assert!(!graph.is_valid_route(&code("TSA"), &code("NAN")));
        assert!(!graph.is_valid_route(&code("DUK"), &code("SWB")));

        // Destination-only terminals are not departures
        assert!(!graph.is_valid_departure(&code("SGI")));
        assert!(!graph.is_valid_departure(&code("FUL")));
        assert!(!graph.is_valid_departure(&code("BOW")));
    }

    #[test]
    fn lookups_are_case_insensitive_via_normalization() {
        let graph = bc_ferries_network();

        let dep = TerminalCode::parse_normalized("tsa").unwrap();
        let dest = TerminalCode::parse_normalized("Swb").unwrap();
        assert!(graph.is_valid_departure(&dep));
        assert!(graph.is_valid_route(&dep, &dest));
    }
}

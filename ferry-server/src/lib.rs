//! Ferry sailing capacity server.
//!
//! Serves the current sailing capacity schedule for the BC Ferries major
//! routes over a small JSON API, refreshing its in-memory snapshot from the
//! upstream capacity feed on a fixed interval.

pub mod capacity;
pub mod config;
pub mod domain;
pub mod network;
pub mod query;
pub mod refresh;
pub mod store;
pub mod telemetry;
pub mod web;

//! Application state for the web layer.

use crate::query::QueryResolver;
use crate::telemetry::Telemetry;

/// Shared application state.
///
/// Contains the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Resolver over the current snapshot and route network
    pub resolver: QueryResolver,

    /// Observability sink
    pub telemetry: Telemetry,
}

impl AppState {
    /// Create a new app state.
    pub fn new(resolver: QueryResolver, telemetry: Telemetry) -> Self {
        Self {
            resolver,
            telemetry,
        }
    }
}

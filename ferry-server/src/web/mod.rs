//! Web layer for the ferry capacity server.
//!
//! Provides the JSON API endpoints and the static home page fallback.

mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

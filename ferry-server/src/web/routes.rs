//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::domain::{DestinationSchedule, Sailing, ScheduleSnapshot};

use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory, served for any
/// path the API does not claim.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/healthcheck/", get(health_check))
        .route("/api/", get(get_all))
        .route("/api/:departure/", get(get_departure))
        .route("/api/:departure/:destination/", get(get_route))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> Json<&'static str> {
    Json("Server OK")
}

/// The full schedule, all departure terminals.
async fn get_all(State(state): State<AppState>) -> Json<ScheduleSnapshot> {
    state.telemetry.request("/api/");
    let snapshot = state.resolver.resolve_all().await;
    Json(snapshot.as_ref().clone())
}

/// Sailings out of one departure terminal, keyed by destination.
async fn get_departure(
    State(state): State<AppState>,
    Path(departure): Path<String>,
) -> Result<Json<DestinationSchedule>, StatusCode> {
    match state.resolver.resolve_departure(&departure).await {
        Some(schedule) => {
            state.telemetry.request(format!("/api/{departure}/"));
            Ok(Json(schedule))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Sailings for one (departure, destination) route.
async fn get_route(
    State(state): State<AppState>,
    Path((departure, destination)): Path<(String, String)>,
) -> Result<Json<Vec<Sailing>>, StatusCode> {
    match state.resolver.resolve_route(&departure, &destination).await {
        Some(sailings) => {
            state
                .telemetry
                .request(format!("/api/{departure}/{destination}/"));
            Ok(Json(sailings))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

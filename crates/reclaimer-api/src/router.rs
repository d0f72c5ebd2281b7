//! Axum router construction for the dashboard API.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the dashboard server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/profiles` -- waste profiles
/// - `GET /api/automation-levels` -- automation tiers
/// - `GET /api/bacteria` -- bacteria library
/// - `POST /api/calculate` -- dashboard payload, recorded in history
/// - `POST /api/summary` -- full mission summary
/// - `GET /api/history` -- recorded calculations
///
/// CORS allows any origin, method and header so the static dashboard can
/// be served from anywhere.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Reference tables
        .route("/api/profiles", get(handlers::list_profiles))
        .route("/api/automation-levels", get(handlers::list_automation_levels))
        .route("/api/bacteria", get(handlers::list_bacteria))
        // Calculations
        .route("/api/calculate", post(handlers::calculate))
        .route("/api/summary", post(handlers::summary))
        .route("/api/history", get(handlers::list_history))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

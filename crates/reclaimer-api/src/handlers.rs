//! REST API endpoint handlers for the dashboard server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/profiles` | Built-in waste profiles |
//! | `GET` | `/api/automation-levels` | Automation tiers |
//! | `GET` | `/api/bacteria` | Bacteria library in definition order |
//! | `POST` | `/api/calculate` | Dashboard payload, recorded in history |
//! | `POST` | `/api/summary` | Full mission summary, not recorded |
//! | `GET` | `/api/history` | Every recorded calculation |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Html, IntoResponse};
use chrono::Utc;
use reclaimer_types::{
    AutomationLevel, BacteriumSpec, CalculationResponse, HistoryRecord, MissionSummary,
    OrderedMap, RunId, WasteProfile,
};
use tracing::info;

use crate::dashboard;
use crate::error::ApiError;
use crate::request::CalculationRequest;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page listing the API endpoints.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let profile_count = state.catalog.profiles().len();
    let bacteria_count = state.catalog.bacteria().len();
    let level_count = state.catalog.automation_levels().len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Bio-Nano Reclaimer</title>
    <style>
        body {{
            background: #0b1410;
            color: #c8e6c9;
            font-family: 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #66bb6a; }}
        a {{ color: #81d4fa; }}
        code {{ color: #ffcc80; }}
        li {{ margin: 0.3rem 0; }}
    </style>
</head>
<body>
    <h1>Bio-Nano Reclaimer</h1>
    <p>{profile_count} waste profiles, {bacteria_count} bacteria, {level_count} automation tiers loaded.</p>
    <h2>Endpoints</h2>
    <ul>
        <li><a href="/api/profiles">GET /api/profiles</a></li>
        <li><a href="/api/automation-levels">GET /api/automation-levels</a></li>
        <li><a href="/api/bacteria">GET /api/bacteria</a></li>
        <li><a href="/api/history">GET /api/history</a></li>
        <li><code>POST /api/calculate</code> dashboard readings and gauges</li>
        <li><code>POST /api/summary</code> full mission summary</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// Reference tables
// ---------------------------------------------------------------------------

/// List the built-in waste profiles keyed by name.
pub async fn list_profiles(State(state): State<Arc<AppState>>) -> Json<OrderedMap<WasteProfile>> {
    Json(state.catalog.profiles().clone())
}

/// List the automation tiers in ordinal order.
pub async fn list_automation_levels(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<AutomationLevel>> {
    Json(state.catalog.automation_levels().to_vec())
}

/// List the bacteria library in definition order.
pub async fn list_bacteria(State(state): State<Arc<AppState>>) -> Json<Vec<BacteriumSpec>> {
    Json(state.catalog.bacteria().to_vec())
}

// ---------------------------------------------------------------------------
// Calculations
// ---------------------------------------------------------------------------

/// Run a calculation, record it in the history and return the dashboard
/// payload.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] for a malformed body and
/// [`ApiError::Store`] if the history cannot be written.
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let resolved = request.resolve(state.catalog)?;

    let summary = state.engine().allocate(&resolved.params);
    let payload = dashboard::adapt(&summary);
    let generated_at = Utc::now();
    let response = CalculationResponse {
        payload,
        visual: dashboard::gauges(&payload),
        generated_at,
    };

    let record = HistoryRecord {
        id: RunId::new(),
        timestamp: generated_at,
        crew: resolved.params.crew_size,
        days: resolved.params.days,
        profile_name: resolved.profile_name,
        automation_name: resolved.params.automation.name,
        results: response.clone(),
    };
    state.history.append(&record).await?;

    info!(
        id = %record.id,
        crew = record.crew,
        days = record.days,
        profile = %record.profile_name,
        automation = %record.automation_name,
        energy_kwh = payload.energy.total_kwh,
        nanobots = payload.nanobots.active,
        "calculation recorded"
    );

    Ok(Json(response))
}

/// Run a calculation and return the full mission summary without touching
/// the history.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] for a malformed body.
pub async fn summary(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<MissionSummary>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let resolved = request.resolve(state.catalog)?;
    Ok(Json(state.engine().allocate(&resolved.params)))
}

// ---------------------------------------------------------------------------
// GET /api/history
// ---------------------------------------------------------------------------

/// Return every recorded calculation in append order.
///
/// # Errors
///
/// Returns [`ApiError::Store`] if the history file cannot be read or
/// parsed.
pub async fn list_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<HistoryRecord>>, ApiError> {
    Ok(Json(state.history.list().await?))
}

//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::error;

use crate::db;
use crate::errors::IndexerError;
use crate::events::{EventCount, EventRecord};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AccountEventsResponse {
    pub address: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub counts: Vec<EventCount>,
    /// `succeeded` / `failed` once a `resolved` event has been indexed.
    pub outcome: Option<String>,
    pub total_raised: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for IndexerError {
    fn into_response(self) -> Response {
        error!("API error: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /accounts/:address/events`
///
/// Contributions, refunds and payouts involving `address`.
pub async fn get_account_events(
    State(state): State<Arc<ApiState>>,
    Path(address): Path<String>,
) -> Result<Json<AccountEventsResponse>, IndexerError> {
    let events = db::get_events_for_actor(&state.pool, &address).await?;
    Ok(Json(AccountEventsResponse {
        address,
        count: events.len(),
        events,
    }))
}

/// `GET /events`
pub async fn get_all_events(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<AllEventsResponse>, IndexerError> {
    let events = db::get_all_events(&state.pool).await?;
    Ok(Json(AllEventsResponse {
        count: events.len(),
        events,
    }))
}

/// `GET /summary`
pub async fn get_summary(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<SummaryResponse>, IndexerError> {
    let counts = db::count_events_by_type(&state.pool).await?;
    let resolution = db::latest_resolution(&state.pool).await?;
    let (outcome, total_raised) = match resolution {
        Some(ev) => (ev.asset, ev.amount),
        None => (None, None),
    };
    Ok(Json(SummaryResponse {
        counts,
        outcome,
        total_raised,
    }))
}

//! API Handlers
//!
//! HTTP request handlers for each receipt service endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{debug, info, warn};

use crate::cache::LruStore;
use crate::config::Config;
use crate::error::{ApiError, Result, StoreError};
use crate::models::{HealthResponse, PointsResponse, ProcessResponse, Receipt, StatsResponse};
use crate::processor::process_receipt;

/// Application state shared across all handlers.
///
/// The store is built once at startup and handed to every handler; it does
/// its own locking.
#[derive(Clone)]
pub struct AppState {
    /// Receipt id to points
    pub store: Arc<LruStore<u64>>,
}

impl AppState {
    /// Creates a new AppState around an existing store.
    pub fn new(store: LruStore<u64>) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails when the configured capacity is not usable.
    pub fn from_config(config: &Config) -> std::result::Result<Self, StoreError> {
        Ok(Self::new(LruStore::new(config.cache_capacity)?))
    }
}

/// Handler for POST /receipts/process
///
/// Scores the receipt, caches the points under its identifier and returns
/// the identifier.
pub async fn process_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>> {
    let Json(mut receipt) = payload.map_err(|rejection| {
        let reason = rejection.body_text();
        warn!("Rejected receipt body: {}", reason);
        ApiError::InvalidJson(reason)
    })?;

    receipt.sanitize();

    let errors = receipt.validate();
    if !errors.is_empty() {
        warn!(count = errors.len(), "Receipt failed validation");
        return Err(ApiError::Validation(errors));
    }

    let processed = process_receipt(&receipt)?;
    state.store.set(processed.id.clone(), processed.points);
    info!(id = %processed.id, points = processed.points, "Processed receipt");

    Ok(Json(ProcessResponse::new(processed.id)))
}

/// Handler for GET /receipts/:id/points
///
/// Looks up the cached points for a previously processed receipt.
pub async fn points_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let id = id.trim();

    match state.store.get(id) {
        Some(points) => Ok(Json(PointsResponse::new(points))),
        None => {
            debug!(%id, "No cached points");
            Err(ApiError::NotFound)
        }
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.store.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

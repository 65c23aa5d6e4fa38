use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    catalog::CatalogOptions,
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{RecommendRequest, RecommendResponse},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub recipes: usize,
    pub model: &'static str,
    pub loaded_at: DateTime<Utc>,
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = state.recommender.catalog();
    Json(HealthResponse {
        status: "healthy",
        recipes: catalog.len(),
        model: state.recommender.oracle_name(),
        loaded_at: catalog.loaded_at(),
    })
}

/// Cuisines and allergen tags a client can choose from
pub async fn catalog_options(State(state): State<AppState>) -> Json<CatalogOptions> {
    Json(state.recommender.catalog().options())
}

/// Recommend recipes for the given pantry constraints
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    tracing::info!(
        request_id = %request_id,
        max_time = request.max_time,
        top_k = request.top_k,
        ingredients_available = request.ingredients_available.len(),
        "Processing recommendation request"
    );

    // Filtering and model scoring are CPU-bound; keep them off the async workers
    let recommender = state.recommender.clone();
    let response = tokio::task::spawn_blocking(move || recommender.recommend(&request))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    tracing::info!(
        request_id = %request_id,
        returned = response.recipes.len(),
        "Recommendation request completed"
    );

    Ok(Json(response))
}

// 90s best-music routes
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    AppState,
    controllers::RecommendationController,
    error::ApiError,
    models::{MusicRecommendation, UpsertRecommendation},
};

const BESTMUSIC_90S: &str = "/v1/bestmusic/90s";

pub fn bestmusic_routes() -> Router<AppState> {
    Router::new()
        .route(BESTMUSIC_90S, post(upsert_recommendation_route))
        .route(&format!("{BESTMUSIC_90S}/{{artist}}"), get(get_recommendation_route))
}

pub async fn get_recommendation_route(
    State(state): State<AppState>,
    Path(artist): Path<String>,
) -> Result<Json<MusicRecommendation>, ApiError> {
    let controller = RecommendationController::new(state.store);
    controller.lookup(&artist).await.map(Json)
}

// Raw body: a missing or unreadable payload is a validation error, not a rejection.
pub async fn upsert_recommendation_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MusicRecommendation>, ApiError> {
    let controller = RecommendationController::new(state.store);
    controller
        .upsert(UpsertRecommendation::from_body(&body))
        .await
        .map(Json)
}

// Handlers for the aggregate views

use axum::{extract::State, Json};

use crate::handlers::AppState;
use crate::models::{CreatorStats, TrendingEntry};
use crate::services::analytics_service;

/// GET /api/analytics/trending
/// Top posts by volume with a placeholder 24h change
pub async fn get_trending(State(state): State<AppState>) -> Json<Vec<TrendingEntry>> {
    Json(analytics_service::get_trending(&state).await)
}

/// GET /api/analytics/creators
pub async fn get_creators(State(state): State<AppState>) -> Json<Vec<CreatorStats>> {
    Json(analytics_service::get_creators(&state).await)
}

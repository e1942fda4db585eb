// Handlers for coin and creator discovery on Zora

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{
    CoinsQuery, CoinsResponse, CreatorsQuery, CreatorsResponse, SearchQuery, SearchResponse,
};
use crate::services::coin_service;
use crate::zora::types::CoinSummary;

/// GET /api/zora/coins?list=top-volume&count=10&q=...
pub async fn get_coins(
    State(state): State<AppState>,
    query: Result<Query<CoinsQuery>, QueryRejection>,
) -> ApiResult<Json<CoinsResponse>> {
    let Query(params) = query?;
    let response = coin_service::list_coins(&state, params.list, params.count, params.q).await;
    Ok(Json(response))
}

/// GET /api/zora/coins/{address}
pub async fn get_coin(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> ApiResult<Json<CoinSummary>> {
    Ok(Json(coin_service::get_coin(&state, &address).await?))
}

/// GET /api/zora/creators?q=...&count=10
pub async fn get_creators(
    State(state): State<AppState>,
    query: Result<Query<CreatorsQuery>, QueryRejection>,
) -> ApiResult<Json<CreatorsResponse>> {
    let Query(params) = query?;
    let response = coin_service::list_creators(&state, params.count, params.q).await;
    Ok(Json(response))
}

/// GET /api/zora/profiles/{identifier}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    Ok(Json(coin_service::get_profile(&state, &identifier).await?))
}

/// GET /api/zora/search?q=...
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Query(params) = query?;
    Ok(Json(coin_service::search(&state, &params.q).await))
}

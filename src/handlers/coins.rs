// Handlers that build coin deployment and trade calls for the client wallet

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{CreateCoinRequest, PriceQuote, TradeCallRequest};
use crate::services::coin_service;
use crate::zora::types::{CreateCoinCall, TradeParameters};

/// POST /api/coins
/// Returns the unsigned deployment call for a post's coin
pub async fn create_coin(
    State(state): State<AppState>,
    body: Result<Json<CreateCoinRequest>, JsonRejection>,
) -> ApiResult<Json<CreateCoinCall>> {
    let Json(request) = body?;
    Ok(Json(coin_service::create_coin(&state, &request)?))
}

/// POST /api/coins/{address}/buy
pub async fn buy_coin(
    State(state): State<AppState>,
    Path(address): Path<String>,
    body: Result<Json<TradeCallRequest>, JsonRejection>,
) -> ApiResult<Json<TradeParameters>> {
    let Json(request) = body?;
    Ok(Json(coin_service::buy_coin(&state, &address, &request)?))
}

/// POST /api/coins/{address}/sell
pub async fn sell_coin(
    State(state): State<AppState>,
    Path(address): Path<String>,
    body: Result<Json<TradeCallRequest>, JsonRejection>,
) -> ApiResult<Json<TradeParameters>> {
    let Json(request) = body?;
    Ok(Json(coin_service::sell_coin(&state, &address, &request)?))
}

/// GET /api/coins/{address}/price
pub async fn get_price(Path(address): Path<String>) -> ApiResult<Json<PriceQuote>> {
    Ok(Json(coin_service::price_quote(&address)?))
}

// Handlers for trade endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use crate::entity::trades;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{CreateTradeRequest, TradesQuery};
use crate::services::trade_service;

/// GET /api/trades?postId=...
pub async fn get_trades(
    State(state): State<AppState>,
    query: Result<Query<TradesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<trades::Model>>> {
    let Query(params) = query?;
    let trades = trade_service::list_trades(&state, params.post_id.as_deref()).await;
    Ok(Json(trades))
}

/// POST /api/trades
/// Records a buy/sell intent; post figures are left untouched
pub async fn create_trade(
    State(state): State<AppState>,
    body: Result<Json<CreateTradeRequest>, JsonRejection>,
) -> ApiResult<Json<trades::Model>> {
    let Json(request) = body?;
    let trade = trade_service::record_trade(&state, request).await?;
    Ok(Json(trade))
}

// Trade recording. Trades are kept as a log and never touch post figures.

use chrono::Utc;

use crate::entity::trades;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::CreateTradeRequest;

pub async fn list_trades(state: &AppState, post_id: Option<&str>) -> Vec<trades::Model> {
    match post_id {
        Some(post_id) => state.repositories.trade.find_by_post(post_id).await,
        None => state.repositories.trade.get_all().await,
    }
}

pub async fn record_trade(
    state: &AppState,
    request: CreateTradeRequest,
) -> ApiResult<trades::Model> {
    if !request.amount.is_finite() || !request.price.is_finite() {
        return Err(ApiError::InvalidRequest(
            "amount and price must be finite numbers".to_string(),
        ));
    }

    let trade = trades::Model {
        id: uuid::Uuid::new_v4().to_string(),
        post_id: request.post_id,
        side: request.side,
        amount: request.amount,
        price: request.price,
        user: request.user,
        timestamp: Utc::now(),
    };

    let trade = state.repositories.trade.insert(trade).await;
    tracing::info!(
        "Recorded {:?} trade {} on post {}",
        trade.side,
        trade.id,
        trade.post_id
    );
    Ok(trade)
}

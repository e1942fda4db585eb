// Coin creation, trading and discovery through the configured coins SDK

use rand::Rng;

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    CoinsResponse, CreateCoinRequest, CreatorsResponse, PriceQuote, SearchResponse,
    TradeCallRequest,
};
use crate::zora::calls::is_valid_address;
use crate::zora::client::{filter_by_name, MAX_EXPLORE_COUNT};
use crate::zora::fallback::{sample_creators, sample_trending_coins};
use crate::zora::types::{
    CoinFilter, CoinSummary, CreateCoinCall, CreatorFilter, ExploreList, TradeParameters,
};

const SEARCH_COIN_LIMIT: usize = 10;
const SEARCH_CREATOR_LIMIT: usize = 5;

fn clamp_count(count: usize) -> usize {
    count.clamp(1, MAX_EXPLORE_COUNT)
}

pub fn create_coin(state: &AppState, request: &CreateCoinRequest) -> ApiResult<CreateCoinCall> {
    let call = state
        .coins
        .create_coin(&request.metadata, &request.payout_recipient)?;
    tracing::info!(
        "Built {} coin call {} for {}",
        state.coins.provider_name(),
        call.symbol,
        call.payout_recipient
    );
    Ok(call)
}

pub fn buy_coin(
    state: &AppState,
    coin: &str,
    request: &TradeCallRequest,
) -> ApiResult<TradeParameters> {
    Ok(state.coins.buy(coin, request.amount, &request.sender)?)
}

pub fn sell_coin(
    state: &AppState,
    coin: &str,
    request: &TradeCallRequest,
) -> ApiResult<TradeParameters> {
    Ok(state.coins.sell(coin, request.amount, &request.sender)?)
}

/// Fixed buy/sell prices with a random 24h volume; no market data behind it
pub fn price_quote(coin: &str) -> ApiResult<PriceQuote> {
    if !is_valid_address(coin) {
        return Err(ApiError::InvalidRequest(format!(
            "Invalid coin address: {}",
            coin
        )));
    }
    Ok(PriceQuote {
        buy_price: 0.001,
        sell_price: 0.0009,
        volume24h: rand::thread_rng().gen_range(0.0..10.0),
    })
}

/// Explore list, falling back to sample coins when the upstream fails
pub async fn list_coins(
    state: &AppState,
    list: ExploreList,
    count: usize,
    name_contains: Option<String>,
) -> CoinsResponse {
    let filter = CoinFilter {
        list,
        name_contains,
        count: clamp_count(count),
    };

    match state.coins.query_coins(&filter).await {
        Ok(coins) => CoinsResponse {
            total: coins.len(),
            coins,
            fallback: false,
        },
        Err(e) => {
            tracing::warn!("Failed to fetch {} coins: {}", list, e);
            let mut coins =
                filter_by_name(sample_trending_coins(), filter.name_contains.as_deref());
            coins.truncate(filter.count);
            CoinsResponse {
                total: coins.len(),
                coins,
                fallback: true,
            }
        }
    }
}

/// Top creators, falling back to sample creators when the upstream fails
pub async fn list_creators(
    state: &AppState,
    count: usize,
    address_contains: Option<String>,
) -> CreatorsResponse {
    let filter = CreatorFilter {
        address_contains,
        count: clamp_count(count),
    };

    match state.coins.query_creators(&filter).await {
        Ok(creators) => CreatorsResponse {
            total: creators.len(),
            creators,
            fallback: false,
        },
        Err(e) => {
            tracing::warn!("Failed to fetch top creators: {}", e);
            let mut creators = sample_creators();
            creators.truncate(filter.count);
            CreatorsResponse {
                total: creators.len(),
                creators,
                fallback: true,
            }
        }
    }
}

pub async fn get_coin(state: &AppState, address: &str) -> ApiResult<CoinSummary> {
    state.coins.get_coin(address).await.map_err(|e| {
        tracing::warn!("Coin lookup for {} failed: {}", address, e);
        e.into()
    })
}

pub async fn get_profile(state: &AppState, identifier: &str) -> ApiResult<serde_json::Value> {
    state.coins.get_profile(identifier).await.map_err(|e| {
        tracing::warn!("Profile lookup for {} failed: {}", identifier, e);
        e.into()
    })
}

/// Coins by name and creators by address; failures yield empty results
pub async fn search(state: &AppState, query: &str) -> SearchResponse {
    let query = query.trim();
    if query.is_empty() {
        return SearchResponse {
            coins: vec![],
            creators: vec![],
        };
    }

    let coin_filter = CoinFilter {
        list: ExploreList::TopVolume24h,
        name_contains: Some(query.to_string()),
        count: SEARCH_COIN_LIMIT,
    };
    let creator_filter = CreatorFilter {
        address_contains: Some(query.to_string()),
        count: SEARCH_CREATOR_LIMIT,
    };

    let (coins, creators) = tokio::join!(
        state.coins.query_coins(&coin_filter),
        state.coins.query_creators(&creator_filter)
    );

    match (coins, creators) {
        (Ok(coins), Ok(creators)) => SearchResponse { coins, creators },
        (coins, creators) => {
            if let Err(e) = coins.as_ref() {
                tracing::warn!("Coin search for {:?} failed: {}", query, e);
            }
            if let Err(e) = creators.as_ref() {
                tracing::warn!("Creator search for {:?} failed: {}", query, e);
            }
            SearchResponse {
                coins: vec![],
                creators: vec![],
            }
        }
    }
}

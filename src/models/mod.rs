// API request/response models
use serde::{Deserialize, Serialize};

use crate::entity::trades::TradeSide;
use crate::zora::types::{CoinMetadata, CoinSummary, CreatorSummary, ExploreList};

/// Query parameters for GET /api/posts
#[derive(Debug, Deserialize, Default)]
pub struct PostsQuery {
    pub author: Option<String>,
}

/// Query parameters for GET /api/trades
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TradesQuery {
    pub post_id: Option<String>,
}

/// Request body for POST /api/trades
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTradeRequest {
    pub post_id: String,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub amount: f64,
    pub price: f64,
    pub user: String,
}

/// Entry of GET /api/analytics/trending
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendingEntry {
    pub id: String,
    pub title: String,
    pub volume: f64,
    pub price: f64,
    // Placeholder, not derived from trade history
    pub change24h: f64,
}

/// Entry of GET /api/analytics/creators
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatorStats {
    pub address: String,
    pub total_volume: f64,
    pub total_posts: u64,
    pub total_collectors: u64,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: String,
}

fn default_count() -> usize {
    10
}

/// Query parameters for GET /api/zora/coins
#[derive(Debug, Deserialize)]
pub struct CoinsQuery {
    #[serde(default)]
    pub list: ExploreList,
    #[serde(default = "default_count")]
    pub count: usize,
    pub q: Option<String>,
}

/// Query parameters for GET /api/zora/creators
#[derive(Debug, Deserialize)]
pub struct CreatorsQuery {
    pub q: Option<String>,
    #[serde(default = "default_count")]
    pub count: usize,
}

/// Query parameters for GET /api/zora/search
#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct CoinsResponse {
    pub total: usize,
    pub coins: Vec<CoinSummary>,
    /// Set when the upstream failed and sample data was served instead
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct CreatorsResponse {
    pub total: usize,
    pub creators: Vec<CreatorSummary>,
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub coins: Vec<CoinSummary>,
    pub creators: Vec<CreatorSummary>,
}

/// Request body for POST /api/coins
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoinRequest {
    #[serde(flatten)]
    pub metadata: CoinMetadata,
    pub payout_recipient: String,
}

/// Request body for POST /api/coins/{address}/buy and /sell
#[derive(Debug, Deserialize)]
pub struct TradeCallRequest {
    pub amount: f64,
    pub sender: String,
}

/// Placeholder quote for GET /api/coins/{address}/price
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub buy_price: f64,
    pub sell_price: f64,
    pub volume24h: f64,
}

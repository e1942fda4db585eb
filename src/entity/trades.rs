use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// A recorded buy/sell intent. Append-only, never applied to the post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub post_id: String,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub amount: f64,
    pub price: f64,
    pub user: String,
    pub timestamp: DateTime<Utc>,
}

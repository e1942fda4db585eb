use tokio::sync::RwLock;

use crate::entity::trades;

/// Repository for trade records. Append-only.
#[derive(Default)]
pub struct TradeRepository {
    trades: RwLock<Vec<trades::Model>>,
}

impl TradeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a trade and returns the stored copy
    pub async fn insert(&self, trade: trades::Model) -> trades::Model {
        self.trades.write().await.push(trade.clone());
        trade
    }

    /// Get all trades in insertion order
    pub async fn get_all(&self) -> Vec<trades::Model> {
        self.trades.read().await.clone()
    }

    /// Find trades referencing a post
    pub async fn find_by_post(&self, post_id: &str) -> Vec<trades::Model> {
        self.trades
            .read()
            .await
            .iter()
            .filter(|t| t.post_id == post_id)
            .cloned()
            .collect()
    }
}

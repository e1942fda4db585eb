// Request and response shapes for the Zora coins gateway

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Ranked coin lists served by the explore endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ExploreList {
    #[default]
    #[serde(rename = "top-volume")]
    TopVolume24h,
    #[serde(rename = "top-gainers")]
    TopGainers,
    #[serde(rename = "most-valuable")]
    MostValuable,
    #[serde(rename = "new")]
    New,
    #[serde(rename = "last-traded")]
    LastTraded,
    #[serde(rename = "last-traded-unique")]
    LastTradedUnique,
}

impl ExploreList {
    /// Value of the `listType` query parameter
    pub fn list_type(&self) -> &'static str {
        match self {
            ExploreList::TopVolume24h => "TOP_VOLUME_24H",
            ExploreList::TopGainers => "TOP_GAINERS",
            ExploreList::MostValuable => "MOST_VALUABLE",
            ExploreList::New => "NEW",
            ExploreList::LastTraded => "LAST_TRADED",
            ExploreList::LastTradedUnique => "LAST_TRADED_UNIQUE",
        }
    }
}

impl fmt::Display for ExploreList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.list_type())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoinFilter {
    pub list: ExploreList,
    pub name_contains: Option<String>,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreatorFilter {
    pub address_contains: Option<String>,
    pub count: usize,
}

/// Coin as returned to our clients
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub creator_address: Option<String>,
    pub creator_handle: Option<String>,
    pub total_supply: Option<String>,
    pub total_volume: Option<String>,
    pub volume24h: Option<String>,
    pub market_cap: Option<String>,
    pub market_cap_delta24h: Option<String>,
    pub price: Option<String>,
    pub unique_holders: u64,
    pub created_at: Option<String>,
    pub chain_id: Option<u64>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorSummary {
    pub address: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub total_coins: u32,
    pub total_volume: f64,
    pub total_holders: u64,
}

/// Raw coin node as served by `/explore` and `/coin`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoraCoin {
    pub id: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub creator_address: Option<String>,
    pub creator_profile: Option<Value>,
    pub total_supply: Option<String>,
    pub total_volume: Option<String>,
    pub volume24h: Option<String>,
    pub market_cap: Option<String>,
    pub market_cap_delta24h: Option<String>,
    pub price: Option<String>,
    pub unique_holders: Option<u64>,
    pub created_at: Option<String>,
    pub chain_id: Option<u64>,
    pub media_content: Option<Value>,
}

/// `previewImage` is either a plain URL or an object of sized variants
fn preview_image(media: &Value) -> Option<String> {
    let preview = media.get("previewImage")?;
    if let Some(url) = preview.as_str() {
        return Some(url.to_string());
    }
    preview
        .get("medium")
        .or_else(|| preview.get("small"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

impl From<ZoraCoin> for CoinSummary {
    fn from(coin: ZoraCoin) -> Self {
        let image = coin.media_content.as_ref().and_then(preview_image);
        let creator_handle = coin
            .creator_profile
            .as_ref()
            .and_then(|p| p.get("handle"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        CoinSummary {
            id: coin
                .id
                .or_else(|| coin.address.clone())
                .unwrap_or_default(),
            name: coin.name.unwrap_or_else(|| "Unnamed Coin".to_string()),
            symbol: coin.symbol.unwrap_or_else(|| "COIN".to_string()),
            address: coin.address,
            description: coin.description,
            creator_address: coin.creator_address,
            creator_handle,
            total_supply: coin.total_supply,
            total_volume: coin.total_volume,
            volume24h: coin.volume24h,
            market_cap: coin.market_cap,
            market_cap_delta24h: coin.market_cap_delta24h,
            price: coin.price,
            unique_holders: coin.unique_holders.unwrap_or(0),
            created_at: coin.created_at,
            chain_id: coin.chain_id,
            image,
        }
    }
}

/// Post metadata a coin is created from; echoed in the call for pinning at `uri`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinMetadata {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialPurchase {
    pub currency: String,
    /// Wei, as a decimal string
    pub amount: String,
}

/// Unsigned coin deployment call
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoinCall {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub payout_recipient: String,
    pub chain_id: u64,
    pub currency: String,
    pub initial_purchase: InitialPurchase,
    pub metadata: CoinMetadata,
}

/// One side of a swap
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TradeLeg {
    Eth,
    Erc20 { address: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeParameters {
    pub sell: TradeLeg,
    pub buy: TradeLeg,
    /// Wei, as a decimal string
    pub amount_in: String,
    pub slippage: f64,
    pub sender: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explore_list_query_names() {
        for name in [
            "top-volume",
            "top-gainers",
            "most-valuable",
            "new",
            "last-traded",
            "last-traded-unique",
        ] {
            let list: ExploreList = serde_json::from_value(json!(name)).unwrap();
            assert_eq!(serde_json::to_value(list).unwrap(), json!(name));
        }
        assert!(serde_json::from_value::<ExploreList>(json!("hot")).is_err());
        assert_eq!(ExploreList::default().list_type(), "TOP_VOLUME_24H");
    }

    #[test]
    fn test_coin_summary_from_node() {
        let node: ZoraCoin = serde_json::from_value(json!({
            "address": "0x1111111111111111111111111111111111111111",
            "name": "Web3 Essay",
            "symbol": "WEB3",
            "creatorAddress": "0xabc",
            "creatorProfile": { "handle": "writer" },
            "uniqueHolders": 12,
            "mediaContent": { "previewImage": { "small": "s.png", "medium": "m.png" } },
            "someNewField": true
        }))
        .unwrap();

        let coin = CoinSummary::from(node);
        assert_eq!(coin.id, "0x1111111111111111111111111111111111111111");
        assert_eq!(coin.creator_handle.as_deref(), Some("writer"));
        assert_eq!(coin.image.as_deref(), Some("m.png"));
        assert_eq!(coin.unique_holders, 12);
    }

    #[test]
    fn test_coin_summary_defaults() {
        let node: ZoraCoin = serde_json::from_value(json!({
            "id": "c1",
            "mediaContent": { "previewImage": "plain.png" }
        }))
        .unwrap();

        let coin = CoinSummary::from(node);
        assert_eq!(coin.name, "Unnamed Coin");
        assert_eq!(coin.symbol, "COIN");
        assert_eq!(coin.image.as_deref(), Some("plain.png"));
    }

    #[test]
    fn test_trade_leg_serialization() {
        assert_eq!(serde_json::to_value(TradeLeg::Eth).unwrap(), json!({"type": "eth"}));
        assert_eq!(
            serde_json::to_value(TradeLeg::Erc20 {
                address: "0x1".into()
            })
            .unwrap(),
            json!({"type": "erc20", "address": "0x1"})
        );
    }
}

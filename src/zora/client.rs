use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::ZoraConfig;
use crate::zora::error::ZoraClientError;
use crate::zora::types::{
    CoinFilter, CoinSummary, CreatorFilter, CreatorSummary, ExploreList, ZoraCoin,
};
use crate::zora::CoinsSdk;

/// Largest page the explore endpoint is asked for
pub const MAX_EXPLORE_COUNT: usize = 50;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExploreResponse {
    explore_list: Option<ExplorePage>,
}

#[derive(Debug, Deserialize)]
struct ExplorePage {
    #[serde(default)]
    edges: Vec<ExploreEdge>,
}

#[derive(Debug, Deserialize)]
struct ExploreEdge {
    node: ZoraCoin,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoinResponse {
    zora20_token: Option<ZoraCoin>,
}

/// Client for the Zora coins REST API
pub struct ZoraClient {
    client: Client,
    config: ZoraConfig,
}

impl ZoraClient {
    /// Create a new API client
    pub fn new(config: &ZoraConfig) -> Result<Self, ZoraClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(ZoraClient {
            client,
            config: config.clone(),
        })
    }

    /// GET `path` with query parameters and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ZoraClientError> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), path);

        let mut request = self.client.get(&url).query(query);
        if let Some(key) = &self.config.api_key {
            request = request.header("api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ZoraClientError::NotFound(format!("{} returned 404", path)));
        } else if !status.is_success() {
            tracing::warn!("Zora API returned {} for {}", status, path);
            return Err(ZoraClientError::ApiError(format!(
                "API returned error status: {}",
                status
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ZoraClientError::ResponseError(format!("Error decoding response: {}", e)))
    }

    /// Fetch one explore list page
    pub async fn explore(
        &self,
        list: ExploreList,
        count: usize,
    ) -> Result<Vec<CoinSummary>, ZoraClientError> {
        let count = count.clamp(1, MAX_EXPLORE_COUNT);
        let response: ExploreResponse = self
            .get_json(
                "explore",
                &[
                    ("listType", list.list_type().to_string()),
                    ("count", count.to_string()),
                ],
            )
            .await?;

        let coins = response
            .explore_list
            .map(|l| l.edges)
            .unwrap_or_default()
            .into_iter()
            .map(|edge| CoinSummary::from(edge.node))
            .collect();

        Ok(coins)
    }
}

/// Keeps coins whose name contains `needle`, ignoring case
pub fn filter_by_name(coins: Vec<CoinSummary>, needle: Option<&str>) -> Vec<CoinSummary> {
    match needle.map(str::trim).filter(|n| !n.is_empty()) {
        Some(needle) => {
            let needle = needle.to_lowercase();
            coins
                .into_iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => coins,
    }
}

/// Folds coins into per-creator totals, largest volume first
pub fn creators_from_coins(coins: &[CoinSummary]) -> Vec<CreatorSummary> {
    let mut order: Vec<String> = Vec::new();
    let mut by_creator: HashMap<String, CreatorSummary> = HashMap::new();

    for coin in coins {
        let Some(address) = coin.creator_address.as_deref() else {
            continue;
        };
        let key = address.to_lowercase();
        let entry = by_creator.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            CreatorSummary {
                address: address.to_string(),
                name: coin.creator_handle.clone(),
                avatar: None,
                total_coins: 0,
                total_volume: 0.0,
                total_holders: 0,
            }
        });

        entry.total_coins += 1;
        entry.total_volume += coin
            .total_volume
            .as_deref()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0);
        entry.total_holders += coin.unique_holders;
    }

    let mut creators: Vec<CreatorSummary> = order
        .into_iter()
        .filter_map(|key| by_creator.remove(&key))
        .collect();
    creators.sort_by(|a, b| b.total_volume.total_cmp(&a.total_volume));
    creators
}

#[async_trait]
impl CoinsSdk for ZoraClient {
    fn provider_name(&self) -> String {
        "zora".to_string()
    }

    fn call_settings(&self) -> &ZoraConfig {
        &self.config
    }

    async fn query_coins(&self, filter: &CoinFilter) -> Result<Vec<CoinSummary>, ZoraClientError> {
        // Name search has no server-side support, so pull a full page and filter here
        let page = if filter.name_contains.is_some() {
            MAX_EXPLORE_COUNT
        } else {
            filter.count
        };
        let coins = self.explore(filter.list, page).await?;

        let mut coins = filter_by_name(coins, filter.name_contains.as_deref());
        coins.truncate(filter.count);
        Ok(coins)
    }

    async fn query_creators(
        &self,
        filter: &CreatorFilter,
    ) -> Result<Vec<CreatorSummary>, ZoraClientError> {
        let coins = self
            .explore(ExploreList::TopVolume24h, MAX_EXPLORE_COUNT)
            .await?;

        let mut creators = creators_from_coins(&coins);
        if let Some(needle) = filter
            .address_contains
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
        {
            let needle = needle.to_lowercase();
            creators.retain(|c| c.address.to_lowercase().contains(&needle));
        }
        creators.truncate(filter.count);
        Ok(creators)
    }

    async fn get_coin(&self, address: &str) -> Result<CoinSummary, ZoraClientError> {
        let response: CoinResponse = self
            .get_json(
                "coin",
                &[
                    ("address", address.to_string()),
                    ("chain", self.config.chain_id.to_string()),
                ],
            )
            .await
            .map_err(|e| match e {
                ZoraClientError::NotFound(_) => {
                    ZoraClientError::NotFound("No coin found for this address.".to_string())
                }
                other => other,
            })?;

        response
            .zora20_token
            .map(CoinSummary::from)
            .ok_or_else(|| ZoraClientError::NotFound("No coin found for this address.".to_string()))
    }

    async fn get_profile(&self, identifier: &str) -> Result<Value, ZoraClientError> {
        let response: Value = self
            .get_json("profile", &[("identifier", identifier.to_string())])
            .await
            .map_err(|e| match e {
                ZoraClientError::NotFound(_) => {
                    ZoraClientError::NotFound("Profile not found or not set up.".to_string())
                }
                other => other,
            })?;

        match response.get("profile") {
            Some(profile) if !profile.is_null() => Ok(profile.clone()),
            _ => Err(ZoraClientError::NotFound(
                "Profile not found or not set up.".to_string(),
            )),
        }
    }
}

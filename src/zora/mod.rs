//! Zora coins gateway
//!
//! Wraps the token-issuance protocol behind the [`CoinsSdk`] trait. Queries go
//! to the Zora REST API; coin creation and trades are returned as unsigned call
//! parameters for a wallet-holding client to sign and submit.

pub mod calls;
pub mod client;
pub mod error;
pub mod fallback;
pub mod types;

pub use client::ZoraClient;
pub use error::ZoraClientError;

use async_trait::async_trait;

use crate::config::ZoraConfig;
use types::{
    CoinFilter, CoinMetadata, CoinSummary, CreateCoinCall, CreatorFilter, CreatorSummary,
    TradeParameters,
};

/// Capability provider for coin issuance, trading and discovery
#[async_trait]
pub trait CoinsSdk: Send + Sync {
    /// Get the provider name for identification
    fn provider_name(&self) -> String;

    /// Settings used when building deployment and trade calls
    fn call_settings(&self) -> &ZoraConfig;

    /// Build the unsigned coin deployment call for a post
    fn create_coin(
        &self,
        metadata: &CoinMetadata,
        payout_recipient: &str,
    ) -> Result<CreateCoinCall, ZoraClientError> {
        calls::create_coin_call(self.call_settings(), metadata, payout_recipient)
    }

    /// Trade parameters that spend `eth_amount` ETH on `coin`
    fn buy(
        &self,
        coin: &str,
        eth_amount: f64,
        sender: &str,
    ) -> Result<TradeParameters, ZoraClientError> {
        calls::buy_parameters(coin, eth_amount, sender)
    }

    /// Trade parameters that sell `token_amount` of `coin` for ETH
    fn sell(
        &self,
        coin: &str,
        token_amount: f64,
        sender: &str,
    ) -> Result<TradeParameters, ZoraClientError> {
        calls::sell_parameters(coin, token_amount, sender)
    }

    /// List coins from an explore list
    async fn query_coins(&self, filter: &CoinFilter) -> Result<Vec<CoinSummary>, ZoraClientError>;

    /// Creators ranked by the volume of their coins
    async fn query_creators(
        &self,
        filter: &CreatorFilter,
    ) -> Result<Vec<CreatorSummary>, ZoraClientError>;

    /// Look up a single coin by contract address
    async fn get_coin(&self, address: &str) -> Result<CoinSummary, ZoraClientError>;

    /// Look up a creator profile by address or handle
    async fn get_profile(&self, identifier: &str) -> Result<serde_json::Value, ZoraClientError>;
}

// Configuration management from environment variables

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Configuration for the Zora coins API and coin call-building
#[derive(Debug, Clone)]
pub struct ZoraConfig {
    /// Base URL of the Zora REST API
    pub api_url: String,
    /// Optional API key sent as the `api-key` header
    pub api_key: Option<String>,
    /// Chain the coins are deployed on (Base mainnet by default)
    pub chain_id: u64,
    /// Metadata URI attached to newly created coins
    pub metadata_uri: String,
    /// Initial purchase made with every coin deployment, in ETH
    pub initial_purchase_eth: String,
}

/// Configuration settings for the Coins Blog API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    // Server configuration
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,

    // Upload configuration
    pub uploads_dir: PathBuf,
    pub max_upload_bytes: usize,

    pub zora: ZoraConfig,
}

/// Reads a variable and parses it, falling back to `default` when unset or malformed
fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl ApiConfig {
    /// Creates configuration instance from environment variables with defaults
    pub fn from_env() -> Self {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env_parse("PORT", 3001u16);
        let request_timeout_secs = env_parse("REQUEST_TIMEOUT_SECS", 30u64);

        let uploads_dir =
            PathBuf::from(env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string()));
        let max_upload_bytes = env_parse("MAX_UPLOAD_BYTES", 10 * 1024 * 1024usize);

        let zora = ZoraConfig {
            api_url: env::var("ZORA_API_URL")
                .unwrap_or_else(|_| "https://api-sdk.zora.engineering".to_string()),
            api_key: env::var("ZORA_API_KEY").ok().filter(|k| !k.is_empty()),
            chain_id: env_parse("ZORA_CHAIN_ID", 8453u64),
            metadata_uri: env::var("COIN_METADATA_URI").unwrap_or_else(|_| {
                "ipfs://bafybeigoxzqzbnxsn35vq7lls3ljxdcwjafxvbvkivprsodzrptpiguysy".to_string()
            }),
            initial_purchase_eth: env::var("INITIAL_PURCHASE_ETH")
                .unwrap_or_else(|_| "0.001".to_string()),
        };

        Self {
            host,
            port,
            request_timeout_secs,
            uploads_dir,
            max_upload_bytes,
            zora,
        }
    }

    /// Returns formatted server address string (host:port)
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            request_timeout_secs: 30,
            uploads_dir: PathBuf::from("uploads"),
            max_upload_bytes: 10 * 1024 * 1024,
            zora: ZoraConfig {
                api_url: "https://api-sdk.zora.engineering".to_string(),
                api_key: None,
                chain_id: 8453,
                metadata_uri:
                    "ipfs://bafybeigoxzqzbnxsn35vq7lls3ljxdcwjafxvbvkivprsodzrptpiguysy"
                        .to_string(),
                initial_purchase_eth: "0.001".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr() {
        let config = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..ApiConfig::default()
        };
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_env_parse_falls_back_on_garbage() {
        env::set_var("COINS_BLOG_TEST_PORT", "not-a-port");
        assert_eq!(env_parse("COINS_BLOG_TEST_PORT", 3001u16), 3001);
        env::set_var("COINS_BLOG_TEST_PORT", "4000");
        assert_eq!(env_parse("COINS_BLOG_TEST_PORT", 3001u16), 4000);
        env::remove_var("COINS_BLOG_TEST_PORT");
    }
}

// Call-building for coin deployment and swaps

use crate::config::ZoraConfig;
use crate::zora::error::ZoraClientError;
use crate::zora::types::{CoinMetadata, CreateCoinCall, InitialPurchase, TradeLeg, TradeParameters};

pub const ETH_DECIMALS: u32 = 18;
pub const DEFAULT_SLIPPAGE: f64 = 0.05;
const SYMBOL_LEN: usize = 6;

/// Ticker derived from a post title: upper-cased, whitespace stripped, six chars
pub fn coin_symbol(title: &str) -> String {
    let symbol: String = title
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(SYMBOL_LEN)
        .collect();
    if symbol.is_empty() {
        "COIN".to_string()
    } else {
        symbol
    }
}

/// `0x` followed by 40 hex digits
pub fn is_valid_address(address: &str) -> bool {
    address.len() == 42
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit())
}

fn require_address(address: &str, what: &str) -> Result<(), ZoraClientError> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(ZoraClientError::InvalidInput(format!(
            "Invalid {} address: {}",
            what, address
        )))
    }
}

/// Parses a decimal string into integer base units with `decimals` fractional digits
pub fn parse_units(value: &str, decimals: u32) -> Result<u128, ZoraClientError> {
    let invalid = || ZoraClientError::InvalidInput(format!("Invalid amount: {}", value));

    let value = value.trim();
    let (whole, fraction) = match value.split_once('.') {
        Some((w, f)) => (w, f),
        None => (value, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }
    if fraction.len() > decimals as usize {
        return Err(ZoraClientError::InvalidInput(format!(
            "Amount {} has more than {} decimal places",
            value, decimals
        )));
    }

    let scale = 10u128.checked_pow(decimals).ok_or_else(invalid)?;
    let whole_units = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().map_err(|_| invalid())?
    };
    let fraction_units = if fraction.is_empty() {
        0
    } else {
        let padding = 10u128.pow(decimals - fraction.len() as u32);
        fraction.parse::<u128>().map_err(|_| invalid())? * padding
    };

    whole_units
        .checked_mul(scale)
        .and_then(|w| w.checked_add(fraction_units))
        .ok_or_else(invalid)
}

/// ETH decimal string to wei
pub fn parse_ether(value: &str) -> Result<u128, ZoraClientError> {
    parse_units(value, ETH_DECIMALS)
}

/// Positive finite amount to wei
pub fn amount_to_wei(amount: f64) -> Result<u128, ZoraClientError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ZoraClientError::InvalidInput(format!(
            "Amount must be a positive number, got {}",
            amount
        )));
    }
    parse_ether(&amount.to_string())
}

/// Deployment call for a coin backing a post
pub fn create_coin_call(
    settings: &ZoraConfig,
    metadata: &CoinMetadata,
    payout_recipient: &str,
) -> Result<CreateCoinCall, ZoraClientError> {
    require_address(payout_recipient, "payout recipient")?;
    let initial_purchase = parse_ether(&settings.initial_purchase_eth)?;

    Ok(CreateCoinCall {
        name: metadata.title.clone(),
        symbol: coin_symbol(&metadata.title),
        uri: settings.metadata_uri.clone(),
        payout_recipient: payout_recipient.to_string(),
        chain_id: settings.chain_id,
        currency: "ETH".to_string(),
        initial_purchase: InitialPurchase {
            currency: "ETH".to_string(),
            amount: initial_purchase.to_string(),
        },
        metadata: metadata.clone(),
    })
}

pub fn buy_parameters(
    coin: &str,
    eth_amount: f64,
    sender: &str,
) -> Result<TradeParameters, ZoraClientError> {
    require_address(coin, "coin")?;
    require_address(sender, "sender")?;

    Ok(TradeParameters {
        sell: TradeLeg::Eth,
        buy: TradeLeg::Erc20 {
            address: coin.to_string(),
        },
        amount_in: amount_to_wei(eth_amount)?.to_string(),
        slippage: DEFAULT_SLIPPAGE,
        sender: sender.to_string(),
    })
}

pub fn sell_parameters(
    coin: &str,
    token_amount: f64,
    sender: &str,
) -> Result<TradeParameters, ZoraClientError> {
    require_address(coin, "coin")?;
    require_address(sender, "sender")?;

    Ok(TradeParameters {
        sell: TradeLeg::Erc20 {
            address: coin.to_string(),
        },
        buy: TradeLeg::Eth,
        amount_in: amount_to_wei(token_amount)?.to_string(),
        slippage: DEFAULT_SLIPPAGE,
        sender: sender.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    const COIN: &str = "0x1111111111111111111111111111111111111111";
    const WALLET: &str = "0xAbCdEf0123456789abcdef0123456789ABCDEF01";

    #[test]
    fn test_coin_symbol() {
        assert_eq!(coin_symbol("The Future of Web3"), "THEFUT");
        assert_eq!(coin_symbol("defi"), "DEFI");
        assert_eq!(coin_symbol(""), "COIN");
        assert_eq!(coin_symbol("   "), "COIN");
    }

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address(COIN));
        assert!(is_valid_address(WALLET));
        assert!(!is_valid_address("0x1234...5678"));
        assert!(!is_valid_address("1111111111111111111111111111111111111111"));
        assert!(!is_valid_address("0x11111111111111111111111111111111111111zz"));
    }

    #[test]
    fn test_parse_ether() {
        assert_eq!(parse_ether("1").unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(parse_ether("0.001").unwrap(), 1_000_000_000_000_000);
        assert_eq!(parse_ether(".5").unwrap(), 500_000_000_000_000_000);
        assert_eq!(parse_ether("2.").unwrap(), 2_000_000_000_000_000_000);
        assert_eq!(parse_ether("0.000000000000000001").unwrap(), 1);
    }

    #[test]
    fn test_parse_ether_rejects_garbage() {
        for bad in ["", ".", "-1", "1e3", "abc", "1.2.3", "0.0000000000000000001"] {
            assert!(parse_ether(bad).is_err(), "{} should be rejected", bad);
        }
        assert!(parse_ether("999999999999999999999999999999").is_err());
    }

    #[test]
    fn test_amount_to_wei() {
        assert_eq!(amount_to_wei(0.25).unwrap(), 250_000_000_000_000_000);
        assert!(amount_to_wei(0.0).is_err());
        assert!(amount_to_wei(-1.0).is_err());
        assert!(amount_to_wei(f64::NAN).is_err());
    }

    #[test]
    fn test_create_coin_call() {
        let config = ApiConfig::default();
        let metadata = CoinMetadata {
            title: "DeFi Revolution".to_string(),
            description: Some("Understanding DeFi".to_string()),
            tags: vec!["defi".to_string()],
            ..Default::default()
        };

        let call = create_coin_call(&config.zora, &metadata, WALLET).unwrap();
        assert_eq!(call.name, "DeFi Revolution");
        assert_eq!(call.symbol, "DEFIRE");
        assert_eq!(call.chain_id, 8453);
        assert_eq!(call.initial_purchase.amount, "1000000000000000");
        assert_eq!(call.payout_recipient, WALLET);
        assert_eq!(call.metadata.description.as_deref(), Some("Understanding DeFi"));
        assert_eq!(call.metadata.tags, vec!["defi"]);

        assert!(create_coin_call(&config.zora, &metadata, "nobody").is_err());
    }

    #[test]
    fn test_buy_and_sell_legs() {
        let buy = buy_parameters(COIN, 0.01, WALLET).unwrap();
        assert_eq!(buy.sell, TradeLeg::Eth);
        assert_eq!(
            buy.buy,
            TradeLeg::Erc20 {
                address: COIN.to_string()
            }
        );
        assert_eq!(buy.amount_in, "10000000000000000");
        assert_eq!(buy.slippage, DEFAULT_SLIPPAGE);

        let sell = sell_parameters(COIN, 3.0, WALLET).unwrap();
        assert_eq!(sell.buy, TradeLeg::Eth);
        assert_eq!(sell.amount_in, "3000000000000000000");

        assert!(buy_parameters("0xbad", 1.0, WALLET).is_err());
        assert!(sell_parameters(COIN, 1.0, "0xbad").is_err());
    }
}

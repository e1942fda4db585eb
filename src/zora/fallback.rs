// Sample data served when the Zora API cannot be reached

use crate::zora::types::{CoinSummary, CreatorSummary};

#[allow(clippy::too_many_arguments)]
fn sample_coin(
    id: &str,
    name: &str,
    symbol: &str,
    creator: &str,
    (total_supply, market_cap, price, volume24h): (&str, &str, &str, &str),
    holders: u64,
    image: &str,
    description: &str,
) -> CoinSummary {
    CoinSummary {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        address: None,
        description: Some(description.to_string()),
        creator_address: Some(creator.to_string()),
        creator_handle: None,
        total_supply: Some(total_supply.to_string()),
        total_volume: None,
        volume24h: Some(volume24h.to_string()),
        market_cap: Some(market_cap.to_string()),
        market_cap_delta24h: None,
        price: Some(price.to_string()),
        unique_holders: holders,
        created_at: None,
        chain_id: None,
        image: Some(image.to_string()),
    }
}

pub fn sample_trending_coins() -> Vec<CoinSummary> {
    vec![
        sample_coin(
            "1",
            "The Future of Web3",
            "WEB3",
            "0x1234...5678",
            ("1000000", "50.5", "0.0505", "12.3"),
            156,
            "https://images.pexels.com/photos/8566473/pexels-photo-8566473.jpeg?auto=compress&cs=tinysrgb&w=400",
            "A comprehensive guide to the future of decentralized web",
        ),
        sample_coin(
            "2",
            "DeFi Revolution",
            "DEFI",
            "0x2345...6789",
            ("500000", "75.2", "0.1504", "18.7"),
            234,
            "https://images.pexels.com/photos/7567443/pexels-photo-7567443.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Understanding the decentralized finance ecosystem",
        ),
        sample_coin(
            "3",
            "NFT Art Guide",
            "NFTART",
            "0x3456...7890",
            ("750000", "32.8", "0.0437", "8.9"),
            89,
            "https://images.pexels.com/photos/8369648/pexels-photo-8369648.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Creating and collecting digital art on the blockchain",
        ),
    ]
}

pub fn sample_creators() -> Vec<CreatorSummary> {
    [
        ("0x1234...5678", "CryptoWriter", 5, 125.7, "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=100"),
        ("0x2345...6789", "BlockchainBlogger", 8, 98.3, "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=100"),
        ("0x3456...7890", "DeFiExpert", 3, 67.9, "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=100"),
    ]
    .into_iter()
    .map(|(address, name, coins, volume, avatar)| CreatorSummary {
        address: address.to_string(),
        name: Some(name.to_string()),
        avatar: Some(avatar.to_string()),
        total_coins: coins,
        total_volume: volume,
        total_holders: 0,
    })
    .collect()
}

// Aggregate views computed from the post list on every request

use rand::Rng;
use std::collections::HashMap;

use crate::entity::posts;
use crate::handlers::AppState;
use crate::models::{CreatorStats, TrendingEntry};

pub const TRENDING_LIMIT: usize = 10;
pub const CREATORS_LIMIT: usize = 10;

/// Highest-volume posts first, each with a random 24h change in [-10, 10)
pub fn trending<R: Rng>(posts: &[posts::Model], limit: usize, rng: &mut R) -> Vec<TrendingEntry> {
    let mut ranked: Vec<&posts::Model> = posts.iter().collect();
    // Stable sort keeps insertion order among equal volumes
    ranked.sort_by(|a, b| b.volume.total_cmp(&a.volume));

    ranked
        .into_iter()
        .take(limit)
        .map(|post| TrendingEntry {
            id: post.id.clone(),
            title: post.title.clone(),
            volume: post.volume,
            price: post.price,
            change24h: rng.gen_range(-10.0..10.0),
        })
        .collect()
}

/// Per-author totals, largest volume first; ties by first appearance
pub fn creators(posts: &[posts::Model], limit: usize) -> Vec<CreatorStats> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_author: HashMap<&str, CreatorStats> = HashMap::new();

    for post in posts {
        let stats = by_author.entry(post.author.as_str()).or_insert_with(|| {
            order.push(post.author.as_str());
            CreatorStats {
                address: post.author.clone(),
                total_volume: 0.0,
                total_posts: 0,
                total_collectors: 0,
            }
        });
        stats.total_volume += post.volume;
        stats.total_posts += 1;
        stats.total_collectors += post.holders;
    }

    let mut creators: Vec<CreatorStats> = order
        .into_iter()
        .filter_map(|author| by_author.remove(author))
        .collect();
    creators.sort_by(|a, b| b.total_volume.total_cmp(&a.total_volume));
    creators.truncate(limit);
    creators
}

pub async fn get_trending(state: &AppState) -> Vec<TrendingEntry> {
    let posts = state.repositories.post.get_all().await;
    trending(&posts, TRENDING_LIMIT, &mut rand::thread_rng())
}

pub async fn get_creators(state: &AppState) -> Vec<CreatorStats> {
    let posts = state.repositories.post.get_all().await;
    creators(&posts, CREATORS_LIMIT)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post intended to back a tradeable coin
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    // Never set after creation: minting happens client-side
    pub coin_address: Option<String>,
    pub price: f64,
    pub volume: f64,
    pub holders: u64,
}

/// Fields supplied by the client when a post is submitted
#[derive(Clone, Debug, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author: String,
    pub image: Option<String>,
}

impl Model {
    /// Builds a fresh post with zeroed market figures
    pub fn from_new(new_post: NewPost) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: new_post.title,
            content: new_post.content,
            tags: new_post.tags,
            author: new_post.author,
            image: new_post.image,
            created_at: Utc::now(),
            coin_address: None,
            price: 0.0,
            volume: 0.0,
            holders: 0,
        }
    }
}

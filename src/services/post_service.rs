// Post-related business logic implementation

use crate::entity::posts::{self, NewPost};
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;

/// Splits a comma-separated tag field, trimming each tag and dropping empty ones
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|tags| {
        tags.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

pub async fn list_posts(state: &AppState, author: Option<&str>) -> Vec<posts::Model> {
    match author {
        Some(author) => state.repositories.post.find_by_author(author).await,
        None => state.repositories.post.get_all().await,
    }
}

pub async fn get_post(state: &AppState, id: &str) -> ApiResult<posts::Model> {
    state
        .repositories
        .post
        .get_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
}

/// Rejects submissions missing a title, body or author
pub fn validate_new_post(new_post: &NewPost) -> ApiResult<()> {
    if new_post.title.trim().is_empty() {
        return Err(ApiError::InvalidRequest("title is required".to_string()));
    }
    if new_post.content.trim().is_empty() {
        return Err(ApiError::InvalidRequest("content is required".to_string()));
    }
    if new_post.author.trim().is_empty() {
        return Err(ApiError::InvalidRequest("author is required".to_string()));
    }
    Ok(())
}

pub async fn create_post(state: &AppState, new_post: NewPost) -> ApiResult<posts::Model> {
    validate_new_post(&new_post)?;

    let post = state
        .repositories
        .post
        .insert(posts::Model::from_new(new_post))
        .await;
    tracing::info!("Created post {} by {}", post.id, post.author);
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(Some("web3, defi ,nft")), vec!["web3", "defi", "nft"]);
        assert_eq!(parse_tags(Some("a,,b, ")), vec!["a", "b"]);
        assert!(parse_tags(Some("")).is_empty());
        assert!(parse_tags(None).is_empty());
    }

    #[test]
    fn test_validate_new_post() {
        let complete = NewPost {
            title: "t".to_string(),
            content: "c".to_string(),
            author: "0xabc".to_string(),
            ..Default::default()
        };
        assert!(validate_new_post(&complete).is_ok());

        let missing_author = NewPost {
            author: "  ".to_string(),
            ..complete.clone()
        };
        assert!(validate_new_post(&missing_author).is_err());
        assert!(validate_new_post(&NewPost::default()).is_err());
    }
}

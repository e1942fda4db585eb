// Handlers for post endpoints

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        rejection::QueryRejection,
        Path, Query, State,
    },
    Json,
};

use crate::entity::posts::{self, NewPost};
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::PostsQuery;
use crate::services::{post_service, upload_service};

/// GET /api/posts?author=...
/// Returns every post, or only the given author's
pub async fn get_posts(
    State(state): State<AppState>,
    query: Result<Query<PostsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<posts::Model>>> {
    let Query(params) = query?;
    let posts = post_service::list_posts(&state, params.author.as_deref()).await;
    Ok(Json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<posts::Model>> {
    let post = post_service::get_post(&state, &id).await?;
    Ok(Json(post))
}

/// POST /api/posts (multipart: title, content, tags, author, image)
pub async fn create_post(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<posts::Model>> {
    let mut multipart = multipart?;

    let mut new_post = NewPost::default();
    let mut tags = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => new_post.title = field.text().await?,
            "content" => new_post.content = field.text().await?,
            "author" => new_post.author = field.text().await?,
            "tags" => tags = Some(field.text().await?),
            "image" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was picked
                if !bytes.is_empty() {
                    image = Some((file_name, bytes));
                }
            }
            other => tracing::debug!("Ignoring unknown form field {:?}", other),
        }
    }

    new_post.tags = post_service::parse_tags(tags.as_deref());
    post_service::validate_new_post(&new_post)?;

    if let Some((file_name, bytes)) = image {
        let path =
            upload_service::store_image(&state.config.uploads_dir, file_name.as_deref(), &bytes)
                .await?;
        new_post.image = Some(path);
    }

    let post = post_service::create_post(&state, new_post).await?;
    Ok(Json(post))
}

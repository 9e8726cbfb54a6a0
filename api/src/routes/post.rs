use crate::{
    dto::{JsonBody, MessageResponse, PostInput, PostUpdateInput},
    errors::{ApiError, POST_NOT_FOUND},
    models::{Post, from_item, to_item},
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

/// POST /posts/
/// Body: { "content": "...", "user_id": "..." }
///
/// `user_id` is stored as given; nothing checks that the user exists.
pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PostInput>,
) -> Result<Json<Post>, ApiError> {
    info!("Creating post for user ID: {}", payload.user_id);

    let post = Post::new(payload.content, payload.user_id, Utc::now());
    state
        .store
        .put(&state.posts_table, to_item(&post)?)
        .await?;

    info!("Post created: {}", post.id);
    Ok(Json(post))
}

/// GET /posts/{id}
pub async fn read_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    info!("Fetching post with ID: {}", id);

    match state.store.get(&state.posts_table, &id).await? {
        Some(item) => Ok(Json(from_item(item)?)),
        None => {
            warn!("Post not found: {}", id);
            Err(ApiError::NotFound(POST_NOT_FOUND))
        }
    }
}

/// PUT /posts/{id}
/// Body: { "content": "..." }
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<PostUpdateInput>,
) -> Result<Json<Post>, ApiError> {
    info!("Updating post with ID: {}", id);

    let existing: Post = match state.store.get(&state.posts_table, &id).await? {
        Some(item) => from_item(item)?,
        None => {
            warn!("Post not found: {}", id);
            return Err(ApiError::NotFound(POST_NOT_FOUND));
        }
    };

    // Never behind the stored value, even if another writer's clock ran ahead
    let now = Utc::now().max(existing.last_update);

    // Owner and creation date are rewritten from the checked record, so a
    // delete racing this update cannot leave a post without them
    let fields = to_item(&json!({
        "content": payload.content,
        "last_update": now,
        "user_id": existing.user_id,
        "date": existing.date,
    }))?;
    state
        .store
        .update_fields(&state.posts_table, &id, fields)
        .await?;

    let item = state
        .store
        .get(&state.posts_table, &id)
        .await?
        .ok_or(ApiError::NotFound(POST_NOT_FOUND))?;

    info!("Post updated: {}", id);
    Ok(Json(from_item(item)?))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Deleting post with ID: {}", id);

    state.store.delete(&state.posts_table, &id).await?;

    info!("Post deleted successfully: {}", id);
    Ok(Json(MessageResponse::new("Post deletado com sucesso")))
}

/// GET /users/{id}/posts
///
/// Full scan of the posts table; no index on `user_id`.
pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Post>>, ApiError> {
    info!("Listing posts for user ID: {}", user_id);

    let posts = state
        .store
        .scan_with_filter(&state.posts_table, "user_id", &user_id)
        .await?
        .into_iter()
        .map(from_item::<Post>)
        .collect::<Result<Vec<_>, _>>()?;

    info!("Found {} posts for user {}", posts.len(), user_id);
    Ok(Json(posts))
}

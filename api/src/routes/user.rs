use crate::{
    dto::{JsonBody, MessageResponse, UserInput},
    errors::{ApiError, USER_NOT_FOUND},
    models::{User, from_item, to_item},
    states::AppState,
    storage::KEY_ATTRIBUTE,
};
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use tracing::{info, warn};

/// POST /users/
/// Body: { "name": "...", "login": "...", "password": "..." }
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserInput>,
) -> Result<Json<User>, ApiError> {
    info!("Attempting to create user with login: {}", payload.login);

    let user = User::new(payload.name, payload.login, payload.password);
    state
        .store
        .put(&state.users_table, to_item(&user)?)
        .await?;

    info!("User created successfully with ID: {}", user.id);
    Ok(Json(user))
}

/// GET /users/{id}
pub async fn read_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    info!("Fetching user with ID: {}", id);

    match state.store.get(&state.users_table, &id).await? {
        Some(item) => Ok(Json(from_item(item)?)),
        None => {
            warn!("User not found: {}", id);
            Err(ApiError::NotFound(USER_NOT_FOUND))
        }
    }
}

/// PUT /users/{id}
/// Body: { "name": "...", "login": "...", "password": "..." }
///
/// Overwrites without checking that the user exists: the store creates the
/// record when the id is unknown.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserInput>,
) -> Result<Json<User>, ApiError> {
    info!("Updating user with ID: {}", id);

    let fields = to_item(&json!({
        "name": payload.name,
        "login": payload.login,
        "password": payload.password,
    }))?;
    state
        .store
        .update_fields(&state.users_table, &id, fields)
        .await?;

    let item = state
        .store
        .get(&state.users_table, &id)
        .await?
        .ok_or_else(|| ApiError::InternalError(format!("User {id} vanished after update")))?;

    info!("User updated successfully: {}", id);
    Ok(Json(from_item(item)?))
}

/// DELETE /users/{id}
///
/// Deletes the user's posts one by one, then the user. The steps are
/// independent writes: a failure part-way leaves the earlier deletions in
/// place.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Deleting user with ID: {}", id);

    let posts = state
        .store
        .scan_with_filter(&state.posts_table, "user_id", &id)
        .await?;

    let post_ids = posts
        .iter()
        .filter_map(|post| post.get(KEY_ATTRIBUTE).and_then(Value::as_str));
    for post_id in post_ids {
        state.store.delete(&state.posts_table, post_id).await?;
    }

    state.store.delete(&state.users_table, &id).await?;

    info!("Deleted user {} and {} posts", id, posts.len());
    Ok(Json(MessageResponse::new(
        "Usuário e todos os posts relacionados foram deletados com sucesso",
    )))
}

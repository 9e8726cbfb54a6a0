use crate::errors::ApiError;
use axum::extract::FromRequest;
use serde::Deserialize;

/// `axum::Json`, but a rejected body becomes an `ApiError` so it is
/// reported with the same `{"detail": ...}` shape as every other error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Body of `POST /users/` and `PUT /users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub login: String,
    pub password: String,
}

/// Body of `POST /posts/`.
#[derive(Debug, Deserialize)]
pub struct PostInput {
    pub content: String,
    pub user_id: String,
}

/// Body of `PUT /posts/{id}`. Only the content of a post is editable.
#[derive(Debug, Deserialize)]
pub struct PostUpdateInput {
    pub content: String,
}

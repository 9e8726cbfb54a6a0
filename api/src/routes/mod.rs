mod health;
mod post;
mod user;

use crate::states::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::health_check))
        .route("/users/", post(user::create_user))
        .route(
            "/users/{id}",
            get(user::read_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/users/{id}/posts", get(post::list_user_posts))
        .route("/posts/", post(post::create_post))
        .route(
            "/posts/{id}",
            get(post::read_post)
                .put(post::update_post)
                .delete(post::delete_post),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

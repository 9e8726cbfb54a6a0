// ============================================================================
// USERS & POSTS REST API
// ============================================================================

// - CRUD for users and posts
// - Cascade delete of a user's posts
// - Key-value storage behind an injected client
// - Structured logging

mod config;
mod dto;
mod errors;
mod models;
mod routes;
mod states;
mod storage;


use crate::{config::AppConfig, states::AppState, storage::MemoryStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();

    let store = MemoryStore::with_tables([config.users_table.as_str(), config.posts_table.as_str()]);
    let state = AppState::new(Arc::new(store), &config);
    let app = routes::router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /                  - Health check");
    info!("  POST   /users/            - Create user");
    info!("  GET    /users/{{id}}        - Get user");
    info!("  PUT    /users/{{id}}        - Replace user");
    info!("  DELETE /users/{{id}}        - Delete user and their posts");
    info!("  GET    /users/{{id}}/posts  - List a user's posts");
    info!("  POST   /posts/            - Create post");
    info!("  GET    /posts/{{id}}        - Get post");
    info!("  PUT    /posts/{{id}}        - Edit post content");
    info!("  DELETE /posts/{{id}}        - Delete post");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

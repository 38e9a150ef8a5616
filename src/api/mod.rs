//! HTTP API server

use axum::{
    routing::{any, get, put},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod extract;
pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/models/:model_name", get(handlers::get_model))
        .route("/users/me", get(handlers::read_user_me))
        .route("/users/:user_id", get(handlers::read_user))
        .route(
            "/users/:user_id/items/:item_id",
            get(handlers::read_user_item),
        )
        .route("/files/", get(handlers::read_file_root))
        .route("/files/*file_path", get(handlers::read_file))
        .route("/items", any(handlers::redirect_trailing_slash))
        .route(
            "/items/",
            get(handlers::read_items).post(handlers::create_item),
        )
        .route("/items/:item_id", put(handlers::replace_item))
        .route("/catalog/", get(handlers::browse_catalog))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router over the default catalog and limits
pub fn create_default_router() -> Router {
    create_router(AppState::default())
}

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod state;
pub mod views;

pub use error::{WebError, WebResult};
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::home))
        .route("/refresh", get(handlers::refresh))
        .route("/search", get(handlers::search_page))
        .route("/article/:slug", get(handlers::article_page))
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/:slug", get(handlers::get_article))
        .route("/api/search", get(handlers::search_articles))
        .route("/api/top-headlines", get(handlers::top_headlines))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState, WebError};
    pub use lh_core::{Article, Error, Result};
}

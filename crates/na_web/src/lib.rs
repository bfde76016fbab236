use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", get(handlers::list_news))
        .route("/api/news", post(handlers::create_news))
        .route("/api/news/:id", get(handlers::get_news))
        .route("/api/news/:id/similar", get(handlers::similar_news))
        .route("/api/topics", get(handlers::topic_groups))
        .route("/api/trends", get(handlers::trends))
        .route("/api/users/:user_id/views", post(handlers::record_view))
        .route(
            "/api/users/:user_id/recommendations",
            get(handlers::recommendations),
        )
        .route("/api/users/:user_id/stats", get(handlers::user_stats))
        .route("/api/compare", post(handlers::compare))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use na_core::{Article, Error, Result};
}

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod aggregate;
pub mod handlers;
pub mod state;

pub use state::{AppState, Snapshot};

pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/wordcloud", get(handlers::get_word_cloud))
        .route("/api/map", get(handlers::get_map))
        .route("/api/refresh", post(handlers::refresh))
        .layer(cors)
        .with_state(state)
}

pub mod prelude {
    pub use crate::{create_app, AppState};
    pub use ds_core::{ClassifiedArticle, Result};
}

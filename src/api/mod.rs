pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    Router,
    routing::get,
};

use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::root::health_check))

        // PDF relay used by the blog viewer
        .route("/api/pdf-proxy", get(handlers::pdf_proxy::pdf_proxy))

        .with_state(state)
}

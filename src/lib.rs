pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod service;
pub mod web;

use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::api::state::AppState;

/// Full application router: JSON endpoints, HTML pages, admin panels and
/// static assets.
pub fn build_app(state: AppState) -> Router {
    let api_app = api::create_app(state.clone());
    let web_app = web::create_web_routes(state);

    api_app
        .merge(web_app)
        .nest_service("/static", ServeDir::new("static"))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

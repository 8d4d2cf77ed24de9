use crate::config::Config;
use crate::db::ConnectionProvider;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod health;
mod metrics;
mod users;

pub fn create_router(config: &Config) -> Router<Arc<ConnectionProvider>> {
    Router::new()
        .route("/health", get(health::get))
        .route("/metrics", get(metrics::get))
        .route("/users", get(users::list))
        .layer(if config.allow_cors {
            log::info!("CorsLayer Permissive");
            CorsLayer::permissive()
        } else {
            CorsLayer::default()
        })
}

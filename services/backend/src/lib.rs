use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod models;
pub mod routers;

use db::MusicStore;
use routers::{bestmusic_routes, health_check_route, root_route};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MusicStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MusicStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        .merge(bestmusic_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

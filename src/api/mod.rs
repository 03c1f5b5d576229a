//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::resolver::Resolver;

pub mod encode;
pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
///
/// Unmatched paths fall through to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/recommend/:user_key/:product_key",
            get(handlers::recommend),
        )
        .route("/test", get(handlers::probe))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper wrapping a bare resolver
pub fn create_router_for(resolver: Arc<dyn Resolver>) -> Router {
    create_router(AppState::new(resolver))
}

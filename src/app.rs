use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{budget, health, stats};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/expenses", stats::router())
        .nest("/api/budget", budget::router())
        // The web client is served from a different origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // GIF search API
        .route("/get_giphy_gif", get(handlers::gifs::get_giphy_gif))
        .route("/get_giphy_gifs", get(handlers::gifs::get_giphy_gifs))
        // Attach state
        .with_state(state)
}

#![forbid(unsafe_code)]
//! gifgate HTTP presentation layer
//!
//! Translates external HTTP requests into [`domain::GifSearchPort`] calls
//! and port results into JSON responses. The port is injected through
//! [`state::AppState`], so tests substitute a double without touching the
//! routing code.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

//! Application state shared across handlers

use std::sync::Arc;

use domain::GifSearchPort;

/// Shared application state
///
/// Carries the injected search port; handlers never see the concrete
/// adapter type.
#[derive(Clone)]
pub struct AppState {
    /// GIF search capability
    pub gif_search: Arc<dyn GifSearchPort>,
}

impl AppState {
    /// Create state around a search port
    #[must_use]
    pub fn new(gif_search: Arc<dyn GifSearchPort>) -> Self {
        Self { gif_search }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("gif_search", &"<GifSearchPort>")
            .finish()
    }
}

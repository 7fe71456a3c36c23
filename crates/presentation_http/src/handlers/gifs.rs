//! GIF search handlers
//!
//! Two endpoints over the same port call: one returns a single media URL,
//! the other an ordered list. Both respond 404 with a message embedding the
//! requested text when the port yields nothing, whether because no match
//! exists or because the upstream call failed.

use axum::{
    Json,
    extract::{Query, State},
};
use domain::GifUrls;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for the single-GIF endpoint
#[derive(Debug, Deserialize)]
pub struct GifQuery {
    /// The search text for the GIF
    pub text: String,
}

/// Query parameters for the multi-GIF endpoint
#[derive(Debug, Deserialize)]
pub struct GifsQuery {
    /// The search text for the GIFs
    pub text: String,
    /// Maximum number of GIFs to return
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Content rating filter (g, pg, pg-13, r)
    #[serde(default = "default_rating")]
    pub rating: String,
    /// Language of the results
    #[serde(default = "default_lang")]
    pub lang: String,
}

const fn default_limit() -> u32 {
    3
}

fn default_rating() -> String {
    "g".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

/// Response body when a single GIF is requested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifResponse {
    pub gif_url: String,
}

/// Response body when multiple GIFs are requested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipleGifsResponse {
    pub gif_urls: Vec<String>,
}

/// Retrieve the URL of a single GIF
///
/// GET /get_giphy_gif?text=...
#[instrument(skip(state), fields(text = %query.text))]
pub async fn get_giphy_gif(
    State(state): State<AppState>,
    Query(query): Query<GifQuery>,
) -> Result<Json<GifResponse>, ApiError> {
    match state.gif_search.search_gifs(&query.text, 1, "g", "en").await {
        Some(GifUrls::Single(gif_url)) => Ok(Json(GifResponse { gif_url })),
        _ => Err(ApiError::NotFound(format!(
            "No GIF was found for the text: '{}'",
            query.text
        ))),
    }
}

/// Retrieve the URLs of multiple GIFs
///
/// GET /get_giphy_gifs?text=...&limit=3&rating=g&lang=en
///
/// An empty URL list is treated the same as an absent result, even though
/// the adapter never produces one.
#[instrument(skip(state), fields(text = %query.text, limit = %query.limit))]
pub async fn get_giphy_gifs(
    State(state): State<AppState>,
    Query(query): Query<GifsQuery>,
) -> Result<Json<MultipleGifsResponse>, ApiError> {
    let result = state
        .gif_search
        .search_gifs(&query.text, query.limit, &query.rating, &query.lang)
        .await;

    match result {
        Some(GifUrls::Many(gif_urls)) if !gif_urls.is_empty() => {
            Ok(Json(MultipleGifsResponse { gif_urls }))
        },
        _ => Err(ApiError::NotFound(format!(
            "No GIFs were found for the text: '{}'",
            query.text
        ))),
    }
}

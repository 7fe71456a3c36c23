//! Capability contracts satisfied by upstream adapters

use async_trait::async_trait;

use crate::entities::GifUrls;

/// Capability to search an upstream media provider for GIFs.
///
/// The HTTP boundary depends only on this trait, so a test double can stand
/// in for the real upstream client without touching routing code.
#[async_trait]
pub trait GifSearchPort: Send + Sync {
    /// Search for GIFs matching `text`.
    ///
    /// `limit` selects the result shape: 1 yields [`GifUrls::Single`] with
    /// the first match, anything else yields [`GifUrls::Many`] with every
    /// match in upstream order. `rating` and `lang` are passed through to
    /// the upstream unvalidated; invalid values are the upstream's concern.
    ///
    /// Returns `None` when nothing matched or the upstream call failed in
    /// any way; callers cannot distinguish the two from the return value.
    async fn search_gifs(
        &self,
        text: &str,
        limit: u32,
        rating: &str,
        lang: &str,
    ) -> Option<GifUrls>;
}

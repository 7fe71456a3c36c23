//! Giphy search API client
//!
//! HTTP client for the Giphy search endpoint
//! (<https://developers.giphy.com/docs/api/endpoint#search>).

use async_trait::async_trait;
use domain::{GifSearchPort, GifUrls};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{
    config::{GIPHY_API_KEY_VAR, GiphyConfig},
    error::GiphyError,
};

/// Giphy search API response structures
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        #[serde(default)]
        pub data: Vec<Gif>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Gif {
        pub images: Images,
    }

    #[derive(Debug, Deserialize)]
    pub struct Images {
        pub original: Rendition,
    }

    /// The original-quality rendition of a GIF
    #[derive(Debug, Deserialize)]
    pub struct Rendition {
        pub url: String,
    }
}

/// Giphy search API client
///
/// The API key is resolved once at construction and read-only afterwards;
/// concurrent searches share it without contention.
#[derive(Debug)]
pub struct GiphyClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout_secs: u64,
}

impl GiphyClient {
    /// Create a new Giphy client
    ///
    /// The API key is taken from the configuration when present, otherwise
    /// from the `GIPHY_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GiphyError::MissingApiKey`] when neither source provides a
    /// key, or a connection error if the HTTP client cannot be built.
    pub fn new(config: GiphyConfig) -> Result<Self, GiphyError> {
        let api_key = Self::resolve_api_key(
            config.api_key,
            std::env::var(GIPHY_API_KEY_VAR).ok(),
        )?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GiphyError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Resolve the API key from an explicit value or the environment
    ///
    /// An explicit key is used verbatim; the environment is only consulted
    /// when no explicit key is given.
    fn resolve_api_key(
        explicit: Option<String>,
        from_env: Option<String>,
    ) -> Result<String, GiphyError> {
        explicit.or(from_env).ok_or(GiphyError::MissingApiKey)
    }

    /// Perform the upstream search call
    ///
    /// Returns `Ok(None)` when the upstream result collection is absent or
    /// empty; errors cover transport failures, non-2xx statuses and
    /// undecodable bodies.
    async fn fetch(
        &self,
        text: &str,
        limit: u32,
        rating: &str,
        lang: &str,
    ) -> Result<Option<GifUrls>, GiphyError> {
        let url = format!("{}/gifs/search", self.base_url);
        let limit_param = limit.to_string();

        debug!(url = %url, limit = limit, "Sending Giphy search request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("q", text),
                ("limit", limit_param.as_str()),
                ("rating", rating),
                ("lang", lang),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GiphyError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    GiphyError::ConnectionFailed(e.to_string())
                } else {
                    GiphyError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received Giphy search response");

        if !status.is_success() {
            return Err(GiphyError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: api::SearchResponse = response
            .json()
            .await
            .map_err(|e| GiphyError::ParseError(e.to_string()))?;

        Ok(Self::convert_results(api_response, limit))
    }

    /// Map the upstream payload to the port's result shape
    ///
    /// An absent or empty `data` collection collapses to `None` regardless
    /// of the requested limit; `Some(GifUrls::Many(vec![]))` is never
    /// produced. The boundary layer's not-found handling depends on this
    /// collapsing.
    fn convert_results(response: api::SearchResponse, limit: u32) -> Option<GifUrls> {
        if response.data.is_empty() {
            return None;
        }

        if limit == 1 {
            response
                .data
                .into_iter()
                .next()
                .map(|gif| GifUrls::Single(gif.images.original.url))
        } else {
            Some(GifUrls::Many(
                response
                    .data
                    .into_iter()
                    .map(|gif| gif.images.original.url)
                    .collect(),
            ))
        }
    }
}

#[async_trait]
impl GifSearchPort for GiphyClient {
    #[instrument(skip(self), fields(provider = "giphy"))]
    async fn search_gifs(
        &self,
        text: &str,
        limit: u32,
        rating: &str,
        lang: &str,
    ) -> Option<GifUrls> {
        match self.fetch(text, limit, rating, lang).await {
            Ok(result) => result,
            Err(e) => {
                warn!(text = %text, error = %e, "Giphy search failed");
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response(urls: &[&str]) -> api::SearchResponse {
        api::SearchResponse {
            data: urls
                .iter()
                .map(|url| api::Gif {
                    images: api::Images {
                        original: api::Rendition {
                            url: (*url).to_string(),
                        },
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn resolve_api_key_prefers_explicit() {
        let key = GiphyClient::resolve_api_key(
            Some("explicit".to_string()),
            Some("from-env".to_string()),
        )
        .unwrap();
        assert_eq!(key, "explicit");
    }

    #[test]
    fn resolve_api_key_falls_back_to_env() {
        let key =
            GiphyClient::resolve_api_key(None, Some("from-env".to_string())).unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn resolve_api_key_fails_without_either() {
        let result = GiphyClient::resolve_api_key(None, None);
        assert!(matches!(result, Err(GiphyError::MissingApiKey)));
        assert!(result.unwrap_err().to_string().contains("GIPHY_API_KEY"));
    }

    #[test]
    fn client_creation_with_explicit_key() {
        let client = GiphyClient::new(GiphyConfig::with_api_key("test-key"));
        assert!(client.is_ok());
    }

    #[test]
    fn convert_single_takes_first_url() {
        let response = sample_response(&[
            "https://example.com/first.gif",
            "https://example.com/second.gif",
        ]);
        let result = GiphyClient::convert_results(response, 1);
        assert_eq!(
            result,
            Some(GifUrls::Single("https://example.com/first.gif".to_string()))
        );
    }

    #[test]
    fn convert_many_keeps_all_urls_in_order() {
        let response = sample_response(&[
            "https://example.com/1.gif",
            "https://example.com/2.gif",
            "https://example.com/3.gif",
        ]);
        let result = GiphyClient::convert_results(response, 3);
        assert_eq!(
            result,
            Some(GifUrls::Many(vec![
                "https://example.com/1.gif".to_string(),
                "https://example.com/2.gif".to_string(),
                "https://example.com/3.gif".to_string(),
            ]))
        );
    }

    #[test]
    fn convert_empty_collapses_to_none() {
        let result = GiphyClient::convert_results(sample_response(&[]), 1);
        assert!(result.is_none());

        // Also for limit > 1: never Some(Many(vec![]))
        let result = GiphyClient::convert_results(sample_response(&[]), 5);
        assert!(result.is_none());
    }

    #[test]
    fn parses_giphy_payload() {
        let json = r#"{
            "data": [
                {"images": {"original": {"url": "https://example.com/a.gif"}}}
            ],
            "pagination": {"total_count": 1, "count": 1, "offset": 0}
        }"#;
        let response: api::SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(
            response.data[0].images.original.url,
            "https://example.com/a.gif"
        );
    }

    #[test]
    fn parses_payload_with_missing_data_as_empty() {
        let response: api::SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
        assert!(GiphyClient::convert_results(response, 2).is_none());
    }
}

#![forbid(unsafe_code)]
//! Giphy search integration for gifgate
//!
//! Implements [`domain::GifSearchPort`] against the Giphy search API. The
//! adapter is a single-shot, stateless request/response client: one outbound
//! GET per search, no retries, no caching, no pagination. Every per-call
//! failure (transport, non-2xx status, undecodable body) is logged and
//! collapsed to an absent result; only a missing API key is a hard error,
//! raised at construction time.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_giphy::{GiphyClient, GiphyConfig};
//!
//! let client = GiphyClient::new(GiphyConfig::from_env())?;
//! let result = client.search_gifs("cats", 1, "g", "en").await;
//! ```

mod client;
mod config;
mod error;

pub use client::GiphyClient;
pub use config::{GIPHY_API_KEY_VAR, GiphyConfig};
pub use error::GiphyError;

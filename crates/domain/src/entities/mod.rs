//! Domain entities

pub mod gif_search;

pub use gif_search::GifUrls;

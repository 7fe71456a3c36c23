#![forbid(unsafe_code)]
//! Domain layer for gifgate
//!
//! Holds the result shapes produced by a GIF search and the capability
//! contract ([`GifSearchPort`]) that upstream adapters implement. The HTTP
//! presentation layer depends only on this crate, never on adapter types.

pub mod entities;
pub mod ports;

pub use entities::GifUrls;
pub use ports::GifSearchPort;

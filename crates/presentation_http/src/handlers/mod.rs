//! HTTP request handlers

pub mod gifs;
pub mod health;

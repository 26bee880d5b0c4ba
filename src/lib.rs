//! Fetches torrent metadata from a Gazelle-based music tracker and renders it as a
//! fixed-width "origin file" documenting where a release came from.

pub mod api;
pub mod commands;
pub mod config;
pub mod errors;
pub mod lookup;
pub mod metadata;
pub mod utils;

#[cfg(test)]
mod fixtures;

pub use errors::{OriginError, Result};

//! Search backend implementations.
//!
//! Each module provides a struct implementing [`crate::engine::SearchBackend`]
//! that scrapes a specific search engine's HTML results page.

pub mod bing;
pub mod duckduckgo;
pub mod google;

use std::sync::Arc;

pub use bing::BingEngine;
pub use duckduckgo::DuckDuckGoEngine;
pub use google::GoogleEngine;

use crate::engine::SearchBackend;
use crate::types::SearchEngine;

/// Instantiate the built-in backend for `engine`, sharing `client`.
pub fn build_backend(engine: SearchEngine, client: &reqwest::Client) -> Arc<dyn SearchBackend> {
    match engine {
        SearchEngine::DuckDuckGo => Arc::new(DuckDuckGoEngine::new(client.clone())),
        SearchEngine::Bing => Arc::new(BingEngine::new(client.clone())),
        SearchEngine::Google => Arc::new(GoogleEngine::new(client.clone())),
    }
}

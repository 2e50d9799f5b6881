//! # lyrics-search
//!
//! Find song lyrics by title without any lyrics API.
//!
//! The crate asks public web search engines for pages on known lyrics sites,
//! scrapes the matching song pages and ranks the songs by how well their
//! artist and title fit the requested text.
//!
//! ## Design
//!
//! - Scrapes DuckDuckGo, Bing and Google with CSS selectors on HTML responses
//! - Supports Genius and Tekstowo song pages
//! - Queries all backends concurrently per site, then fetches pages with a
//!   bounded number of requests in flight
//! - Graceful degradation: failing backends or pages are logged and skipped
//! - Backends and site adapters are trait objects, so they can be replaced
//!
//! ## Privacy
//!
//! Search queries are logged only at trace level.

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod filter;
pub mod finder;
pub mod http;
pub mod matcher;
pub mod orchestrator;
pub mod sites;
pub mod types;

pub use config::FinderConfig;
pub use engine::SearchBackend;
pub use error::{FinderError, Result};
pub use filter::SiteFilter;
pub use finder::{Finder, FinderBuilder};
pub use sites::SiteAdapter;
pub use types::{SearchEngine, SearchResult, Site, SiteSelection, Song};

/// Find the best-fitting song on any supported site with the default
/// configuration.
///
/// # Errors
///
/// Returns [`FinderError::BackendUnavailable`] if the finder cannot be
/// built. Not finding anything is `Ok(None)`.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> lyrics_search::Result<()> {
/// if let Some(song) = lyrics_search::find_default("bohemian rhapsody").await? {
///     println!("{song}");
///     println!("{}", song.lyrics.unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find_default(title: &str) -> Result<Option<Song>> {
    let finder = Finder::from_config(FinderConfig::default())?;
    Ok(finder.find(title, SiteSelection::default()).await)
}

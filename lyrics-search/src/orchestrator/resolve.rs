//! Page resolution: turn deduplicated result URLs into songs.
//!
//! Each URL is routed to the adapter of the site owning its host and
//! fetched concurrently. Unknown hosts, fetch failures and parse failures
//! drop that URL only.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::error::FinderError;
use crate::sites::SiteAdapter;
use crate::types::{SearchResult, Site, Song};

use super::run_phase;

/// Site adapters keyed by the site they parse.
pub type AdapterMap = HashMap<Site, Arc<dyn SiteAdapter>>;

/// Fetch and parse every result, keeping successes in input order.
///
/// Songs whose page carried no lyrics are kept here; see [`with_lyrics`].
pub async fn resolve_songs<I>(
    results: I,
    adapters: &AdapterMap,
    max_concurrency: usize,
    deadline: Option<Duration>,
) -> Vec<Song>
where
    I: IntoIterator<Item = SearchResult>,
{
    let tasks = results.into_iter().map(|result| async move {
        let outcome = resolve_one(&result.url, adapters).await;
        (result.url, outcome)
    });
    let outcomes = run_phase("resolve", tasks, max_concurrency, deadline).await;

    let mut songs = Vec::with_capacity(outcomes.len());
    for (url, outcome) in outcomes {
        match outcome {
            Ok(song) => songs.push(song),
            Err(err) => tracing::warn!(url = %url, error = %err, "dropping unresolved result"),
        }
    }
    tracing::debug!(resolved = songs.len(), "pages resolved");
    songs
}

/// Fetch a single URL with the adapter for its host.
///
/// # Errors
///
/// [`FinderError::UnknownSite`] when no configured adapter owns the host,
/// otherwise whatever the adapter returns.
pub async fn resolve_one(url: &str, adapters: &AdapterMap) -> Result<Song, FinderError> {
    let adapter = Site::from_url(url)
        .and_then(|site| adapters.get(&site))
        .ok_or_else(|| FinderError::UnknownSite(url.to_owned()))?;
    adapter.fetch(url).await
}

/// Drop songs whose page was recognised but carried no lyrics.
pub fn with_lyrics(songs: Vec<Song>) -> Vec<Song> {
    songs
        .into_iter()
        .filter(|song| {
            let keep = song.lyrics.is_some();
            if !keep {
                tracing::debug!(url = %song.url, "no lyrics on page, dropping");
            }
            keep
        })
        .collect()
}

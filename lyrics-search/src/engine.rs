//! Trait definition for pluggable search backends.
//!
//! Each search engine (DuckDuckGo, Bing, Google) implements
//! [`SearchBackend`] to provide a uniform interface for querying and
//! parsing results. The finder stores backends as trait objects, so custom
//! or mock backends can be injected alongside the built-in ones.

use async_trait::async_trait;

use crate::error::FinderError;
use crate::types::SearchResult;

/// A pluggable web search backend.
///
/// Implementors query a specific search engine and extract structured
/// [`SearchResult`] values. Each backend handles its own:
///
/// - URL construction with query encoding
/// - HTTP request with appropriate headers
/// - HTML parsing via CSS selectors
/// - Error handling for rate limiting, bot detection, or parse failures
///
/// All implementations must be `Send + Sync` for concurrent queries.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Name used in logs and in [`SearchResult::engine`].
    fn name(&self) -> &str;

    /// Perform a web search and return up to `max_results` parsed results,
    /// in the engine's own ranking order.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] if the HTTP request fails, the response cannot
    /// be parsed, or the engine is rate-limiting/blocking requests.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, FinderError>;

    /// Construction-time capability check.
    ///
    /// Called once while a finder is built; an error aborts construction
    /// with [`FinderError::BackendUnavailable`]. Must not perform network I/O.
    fn probe(&self) -> Result<(), FinderError> {
        Ok(())
    }
}

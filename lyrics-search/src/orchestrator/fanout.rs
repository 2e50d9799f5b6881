//! Backend fan-out for one lyrics site.
//!
//! Every backend receives the query `"{title} {site}"` concurrently. Each
//! backend's hits are filtered to the site's song pages and capped at
//! `max_songs`. A failing backend contributes nothing.

use std::sync::Arc;
use std::time::Duration;

use crate::engine::SearchBackend;
use crate::error::FinderError;
use crate::filter::SiteFilter;
use crate::types::{SearchResult, Site};

use super::run_phase;

/// Per-backend result limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOutLimits {
    /// Raw results requested from each backend.
    pub max_results: usize,
    /// Site-matching results kept from each backend.
    pub max_songs: usize,
    /// Backends queried at the same time.
    pub max_concurrency: usize,
}

/// Query every backend for `title` on `site` and gather the matching results.
///
/// Contributions are concatenated in backend order; each backend's own
/// ranking order is preserved.
pub async fn fan_out(
    backends: &[Arc<dyn SearchBackend>],
    site: Site,
    filter: &SiteFilter,
    title: &str,
    limits: FanOutLimits,
    deadline: Option<Duration>,
) -> Vec<SearchResult> {
    let query = format!("{title} {}", site.name());
    tracing::trace!(%site, query = %query, "fanning out query");

    let query = query.as_str();
    let tasks = backends.iter().map(|backend| async move {
        let outcome = backend.search(query, limits.max_results).await;
        (backend.name().to_owned(), outcome)
    });
    let outcomes = run_phase("search", tasks, limits.max_concurrency, deadline).await;

    let mut kept = Vec::new();
    for (backend, outcome) in outcomes {
        match outcome {
            Ok(results) => {
                let raw = results.len();
                let before = kept.len();
                kept.extend(
                    results
                        .into_iter()
                        .filter(|r| filter.is_site_result(r))
                        .take(limits.max_songs),
                );
                tracing::debug!(
                    %site,
                    backend = %backend,
                    raw,
                    kept = kept.len() - before,
                    "backend results filtered"
                );
            }
            Err(err) => {
                let err = FinderError::BackendQueryFailed(format!("{backend}: {err}"));
                tracing::warn!(%site, error = %err, "backend contributes no results");
            }
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedBackend {
        name: &'static str,
        urls: Option<Vec<&'static str>>,
        queries: Mutex<Vec<(String, usize)>>,
    }

    impl ScriptedBackend {
        fn new(name: &'static str, urls: Option<Vec<&'static str>>) -> Arc<Self> {
            Arc::new(Self {
                name,
                urls,
                queries: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl SearchBackend for ScriptedBackend {
        fn name(&self) -> &str {
            self.name
        }

        async fn search(
            &self,
            query: &str,
            max_results: usize,
        ) -> Result<Vec<SearchResult>, FinderError> {
            self.queries
                .lock()
                .expect("lock")
                .push((query.to_owned(), max_results));
            match &self.urls {
                Some(urls) => Ok(urls
                    .iter()
                    .take(max_results)
                    .map(|u| SearchResult::from_url(*u))
                    .collect()),
                None => Err(FinderError::Http("connection refused".into())),
            }
        }
    }

    fn limits(max_results: usize, max_songs: usize) -> FanOutLimits {
        FanOutLimits {
            max_results,
            max_songs,
            max_concurrency: 4,
        }
    }

    fn genius_filter() -> SiteFilter {
        SiteFilter::for_site(Site::Genius).expect("genius filter")
    }

    #[tokio::test]
    async fn query_appends_site_name_and_requests_max_results() {
        let backend = ScriptedBackend::new("A", Some(vec![]));
        let backends: Vec<Arc<dyn SearchBackend>> = vec![backend.clone()];
        fan_out(&backends, Site::Genius, &genius_filter(), "bohemian rhapsody", limits(7, 3), None).await;

        let queries = backend.queries.lock().expect("lock");
        assert_eq!(queries.as_slice(), [("bohemian rhapsody genius".to_string(), 7)]);
    }

    #[tokio::test]
    async fn filters_then_truncates_per_backend() {
        let backend = ScriptedBackend::new(
            "A",
            Some(vec![
                "https://genius.com/artists/Queen",
                "https://genius.com/a-lyrics",
                "https://other.com/b-lyrics",
                "https://genius.com/c-lyrics",
                "https://genius.com/d-lyrics",
            ]),
        );
        let backends: Vec<Arc<dyn SearchBackend>> = vec![backend];
        let results = fan_out(&backends, Site::Genius, &genius_filter(), "x", limits(10, 2), None).await;

        let urls: Vec<_> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, ["https://genius.com/a-lyrics", "https://genius.com/c-lyrics"]);
    }

    #[tokio::test]
    async fn contributions_follow_backend_order() {
        let first = ScriptedBackend::new("A", Some(vec!["https://genius.com/a1-lyrics", "https://genius.com/a2-lyrics"]));
        let second = ScriptedBackend::new("B", Some(vec!["https://genius.com/b1-lyrics"]));
        let backends: Vec<Arc<dyn SearchBackend>> = vec![first, second];
        let results = fan_out(&backends, Site::Genius, &genius_filter(), "x", limits(10, 3), None).await;

        let urls: Vec<_> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://genius.com/a1-lyrics",
                "https://genius.com/a2-lyrics",
                "https://genius.com/b1-lyrics"
            ]
        );
    }

    #[tokio::test]
    async fn failing_backend_is_skipped() {
        let broken = ScriptedBackend::new("Broken", None);
        let working = ScriptedBackend::new("Working", Some(vec!["https://genius.com/w-lyrics"]));
        let backends: Vec<Arc<dyn SearchBackend>> = vec![broken, working];
        let results = fan_out(&backends, Site::Genius, &genius_filter(), "x", limits(10, 3), None).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://genius.com/w-lyrics");
    }

    #[tokio::test]
    async fn all_backends_failing_yields_empty() {
        let backends: Vec<Arc<dyn SearchBackend>> =
            vec![ScriptedBackend::new("A", None), ScriptedBackend::new("B", None)];
        let results = fan_out(&backends, Site::Genius, &genius_filter(), "x", limits(10, 3), None).await;
        assert!(results.is_empty());
    }
}

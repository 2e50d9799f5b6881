//! Bing search backend, a different index from Google.

use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::engine::SearchBackend;
use crate::error::FinderError;
use crate::types::{SearchEngine, SearchResult};

const DEFAULT_ENDPOINT: &str = "https://www.bing.com/search";

/// Bing HTML search scraper.
#[derive(Debug, Clone)]
pub struct BingEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl BingEngine {
    /// Create a backend that sends requests through `client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }

    /// Override the search endpoint (used to point tests at a mock server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl SearchBackend for BingEngine {
    fn name(&self) -> &str {
        SearchEngine::Bing.name()
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, FinderError> {
        tracing::trace!(query, "Bing search");

        let count = max_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("setlang", "en"), ("count", count.as_str())])
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| FinderError::Http(format!("Bing request failed: {e}")))?
            .error_for_status()
            .map_err(|e| FinderError::Http(format!("Bing HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| FinderError::Http(format!("Bing response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "Bing response received");

        parse_bing_html(&html, max_results)
    }

    fn probe(&self) -> Result<(), FinderError> {
        url::Url::parse(&self.endpoint)
            .map(|_| ())
            .map_err(|e| FinderError::Config(format!("invalid Bing endpoint: {e}")))
    }
}

/// Parse Bing HTML response into search results.
fn parse_bing_html(html: &str, max_results: usize) -> Result<Vec<SearchResult>, FinderError> {
    let document = Html::parse_document(html);

    // Bing uses li.b_algo containers for organic search results
    let result_sel = Selector::parse("li.b_algo")
        .map_err(|e| FinderError::Parse(format!("invalid result selector: {e:?}")))?;
    let link_sel = Selector::parse("h2 a")
        .map_err(|e| FinderError::Parse(format!("invalid link selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".b_caption p, .b_lineclamp2")
        .map_err(|e| FinderError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        if results.len() >= max_results {
            break;
        }

        let Some(link) = element.select(&link_sel).next() else {
            continue;
        };
        let url = match link.value().attr("href") {
            Some(h) if h.starts_with("http") => h.to_string(),
            _ => continue,
        };
        let title = link.text().collect::<String>().trim().to_string();

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            url,
            snippet,
            engine: SearchEngine::Bing.name().to_string(),
        });
    }

    tracing::debug!(count = results.len(), "Bing results parsed");
    Ok(results)
}

//! DuckDuckGo search backend, most scraper-friendly.
//!
//! Uses the HTML-only version at `https://html.duckduckgo.com/html/`
//! which requires no JavaScript and is tolerant of automated requests.

use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

use crate::engine::SearchBackend;
use crate::error::FinderError;
use crate::types::{SearchEngine, SearchResult};

const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo HTML search scraper.
///
/// Sends a POST request to the HTML-only endpoint and unwraps the
/// `uddg` redirect links DuckDuckGo puts around every result.
#[derive(Debug, Clone)]
pub struct DuckDuckGoEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGoEngine {
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

    /// Extract the actual URL from DuckDuckGo's redirect wrapper.
    ///
    /// DDG wraps URLs like: `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`
    /// We parse out the `uddg` query parameter and URL-decode it.
    fn extract_url(href: &str) -> Option<String> {
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

#[async_trait]
impl SearchBackend for DuckDuckGoEngine {
    fn name(&self) -> &str {
        SearchEngine::DuckDuckGo.name()
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, FinderError> {
        tracing::trace!(query, "DuckDuckGo search");

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("q", query)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| FinderError::Http(format!("DuckDuckGo request failed: {e}")))?
            .error_for_status()
            .map_err(|e| FinderError::Http(format!("DuckDuckGo HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| FinderError::Http(format!("DuckDuckGo response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "DuckDuckGo response received");

        parse_duckduckgo_html(&html, max_results)
    }

    fn probe(&self) -> Result<(), FinderError> {
        Url::parse(&self.endpoint)
            .map(|_| ())
            .map_err(|e| FinderError::Config(format!("invalid DuckDuckGo endpoint: {e}")))
    }
}

/// Parse DuckDuckGo HTML response into search results.
pub(crate) fn parse_duckduckgo_html(
    html: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, FinderError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(
        ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)",
    )
    .map_err(|e| FinderError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse(".result__a")
        .map_err(|e| FinderError::Parse(format!("invalid title selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".result__snippet")
        .map_err(|e| FinderError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel) {
        if results.len() >= max_results {
            break;
        }

        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };

        let title = title_el.text().collect::<String>().trim().to_string();
        let Some(url) = title_el
            .value()
            .attr("href")
            .and_then(DuckDuckGoEngine::extract_url)
        else {
            continue;
        };

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            url,
            snippet,
            engine: SearchEngine::DuckDuckGo.name().to_string(),
        });
    }

    tracing::debug!(count = results.len(), "DuckDuckGo results parsed");
    Ok(results)
}

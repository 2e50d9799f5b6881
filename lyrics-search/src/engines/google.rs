//! Google search backend, best results but aggressive bot detection.
//!
//! Google employs CAPTCHAs, cookie consent walls, and IP-based rate
//! limiting. A consent or CAPTCHA page parses to zero results, which the
//! finder treats like any other empty backend contribution.

use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

use crate::engine::SearchBackend;
use crate::error::FinderError;
use crate::types::{SearchEngine, SearchResult};

const DEFAULT_ENDPOINT: &str = "https://www.google.com/search";

/// Google HTML search scraper.
#[derive(Debug, Clone)]
pub struct GoogleEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleEngine {
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

    /// Unwrap Google's `/url?q=<target>&sa=...` redirect links.
    ///
    /// Absolute links pass through; any other relative link is dropped.
    fn extract_url(href: &str) -> Option<String> {
        if href.starts_with("http://") || href.starts_with("https://") {
            return Some(href.to_owned());
        }
        if !href.starts_with("/url?") {
            return None;
        }
        let parsed = Url::parse(&format!("https://www.google.com{href}")).ok()?;
        parsed
            .query_pairs()
            .find(|(key, _)| key == "q" || key == "url")
            .map(|(_, value)| value.into_owned())
            .filter(|target| target.starts_with("http"))
    }
}

#[async_trait]
impl SearchBackend for GoogleEngine {
    fn name(&self) -> &str {
        SearchEngine::Google.name()
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, FinderError> {
        tracing::trace!(query, "Google search");

        let num = max_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("num", num.as_str()), ("hl", "en")])
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| FinderError::Http(format!("Google request failed: {e}")))?
            .error_for_status()
            .map_err(|e| FinderError::Http(format!("Google HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| FinderError::Http(format!("Google response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "Google response received");

        parse_google_html(&html, max_results)
    }

    fn probe(&self) -> Result<(), FinderError> {
        Url::parse(&self.endpoint)
            .map(|_| ())
            .map_err(|e| FinderError::Config(format!("invalid Google endpoint: {e}")))
    }
}

/// Parse a Google results page.
///
/// Organic results are anchors wrapping an `<h3>` title; both the modern
/// `div.g` layout and the basic-HTML `/url?q=` layout are handled.
fn parse_google_html(html: &str, max_results: usize) -> Result<Vec<SearchResult>, FinderError> {
    let document = Html::parse_document(html);

    let link_sel = Selector::parse("a[href]")
        .map_err(|e| FinderError::Parse(format!("invalid link selector: {e:?}")))?;
    let title_sel = Selector::parse("h3")
        .map_err(|e| FinderError::Parse(format!("invalid title selector: {e:?}")))?;

    let mut results: Vec<SearchResult> = Vec::new();

    for link in document.select(&link_sel) {
        if results.len() >= max_results {
            break;
        }

        let Some(title_el) = link.select(&title_sel).next() else {
            continue;
        };
        let Some(url) = link.value().attr("href").and_then(GoogleEngine::extract_url) else {
            continue;
        };
        if results.iter().any(|r| r.url == url) {
            continue;
        }

        let title = title_el.text().collect::<String>().trim().to_string();
        results.push(SearchResult {
            title,
            url,
            snippet: String::new(),
            engine: SearchEngine::Google.name().to_string(),
        });
    }

    tracing::debug!(count = results.len(), "Google results parsed");
    Ok(results)
}

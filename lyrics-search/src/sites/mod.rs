//! Lyrics site adapters.
//!
//! Each adapter fetches one song page and parses it into a [`Song`]. The
//! finder picks the adapter by the host of the result URL (see
//! [`Site::from_url`]).

pub mod genius;
pub mod tekstowo;

use std::sync::Arc;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

use crate::error::FinderError;
use crate::types::{Site, Song};

pub use genius::GeniusAdapter;
pub use tekstowo::TekstowoAdapter;

/// Fetches and parses song pages of a single lyrics site.
#[async_trait]
pub trait SiteAdapter: Send + Sync {
    /// Which site this adapter parses.
    fn site(&self) -> Site;

    /// Fetch `url` and parse it into a song.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Http`] when the page cannot be fetched and
    /// [`FinderError::Parse`] when it is not a recognisable song page.
    async fn fetch(&self, url: &str) -> Result<Song, FinderError>;
}

/// Instantiate the built-in adapter for `site`, sharing `client`.
pub fn build_adapter(site: Site, client: &reqwest::Client) -> Arc<dyn SiteAdapter> {
    match site {
        Site::Genius => Arc::new(GeniusAdapter::new(client.clone())),
        Site::Tekstowo => Arc::new(TekstowoAdapter::new(client.clone())),
    }
}

/// URL to actually request for `url`.
///
/// With a `base_url` override the path and query of `url` are grafted onto
/// it, so tests can serve real-looking song URLs from a mock server.
pub(crate) fn request_url(url: &str, base_url: Option<&str>) -> Result<String, FinderError> {
    let Some(base) = base_url else {
        return Ok(url.to_owned());
    };
    let parsed = Url::parse(url).map_err(|e| FinderError::Http(format!("invalid URL {url}: {e}")))?;
    let mut target = format!("{}{}", base.trim_end_matches('/'), parsed.path());
    if let Some(query) = parsed.query() {
        target.push('?');
        target.push_str(query);
    }
    Ok(target)
}

/// First element matching any of `selectors`, tried in order.
pub(crate) fn select_first<'a>(
    document: &'a Html,
    selectors: &[&str],
) -> Result<Option<ElementRef<'a>>, FinderError> {
    for selector_str in selectors {
        let selector = Selector::parse(selector_str)
            .map_err(|e| FinderError::Parse(format!("invalid selector {selector_str}: {e:?}")))?;
        if let Some(element) = document.select(&selector).next() {
            return Ok(Some(element));
        }
    }
    Ok(None)
}

/// Text of `element` with `<br>` turned into newlines.
pub(crate) fn text_with_breaks(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out
}

/// Trim every line and the whole text; `None` when nothing is left.
pub(crate) fn clean_lyrics(raw: &str) -> Option<String> {
    let text = raw
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned();
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_without_base_is_unchanged() {
        let url = "https://genius.com/x-lyrics";
        assert_eq!(request_url(url, None).expect("url"), url);
    }

    #[test]
    fn request_url_grafts_path_and_query_onto_base() {
        let url = "https://www.tekstowo.pl/piosenka,queen,x.html?lang=pl";
        assert_eq!(
            request_url(url, Some("http://127.0.0.1:9000/")).expect("url"),
            "http://127.0.0.1:9000/piosenka,queen,x.html?lang=pl"
        );
    }

    #[test]
    fn request_url_rejects_garbage_with_base() {
        assert!(request_url("nope", Some("http://127.0.0.1:1")).is_err());
    }

    #[test]
    fn text_with_breaks_keeps_line_structure() {
        let document = Html::parse_fragment("<div>Line one<br>Line <i>two</i><br/>Line three</div>");
        let div = select_first(&document, &["div"]).expect("selector").expect("div");
        assert_eq!(text_with_breaks(div), "Line one\nLine two\nLine three");
    }

    #[test]
    fn select_first_tries_selectors_in_order() {
        let document = Html::parse_fragment("<p class=\"b\">second</p><p class=\"a\">first</p>");
        let el = select_first(&document, &[".missing", ".a", ".b"])
            .expect("selector")
            .expect("match");
        assert_eq!(el.text().collect::<String>(), "first");
    }

    #[test]
    fn clean_lyrics_trims_lines_and_rejects_blank() {
        assert_eq!(clean_lyrics("  a  \n  b \n\n"), Some("a\nb".to_string()));
        assert_eq!(clean_lyrics(" \n\t\n "), None);
    }

    #[test]
    fn every_site_has_an_adapter() {
        let client = reqwest::Client::new();
        for &site in Site::all() {
            assert_eq!(build_adapter(site, &client).site(), site);
        }
    }
}

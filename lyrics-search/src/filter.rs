//! Site result filter: checks that a search hit is a song page of a site.
//!
//! A result belongs to a site when its host matches the site's domain
//! pattern (anchored at the start of the host) and the full URL matches the
//! site's page pattern anywhere.

use regex::Regex;
use url::Url;

use crate::error::FinderError;
use crate::types::{SearchResult, Site};

/// URL-shape check for one lyrics site.
#[derive(Debug, Clone)]
pub struct SiteFilter {
    domain: Regex,
    path: Regex,
}

impl SiteFilter {
    /// Build a filter from a host pattern and a URL pattern.
    ///
    /// `domain` must match at the start of the URL host; `path` may match
    /// anywhere in the full URL.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Config`] if either pattern is not a valid regex.
    pub fn new(domain: &str, path: &str) -> Result<Self, FinderError> {
        let domain = Regex::new(&format!("^(?:{domain})"))
            .map_err(|e| FinderError::Config(format!("invalid domain pattern: {e}")))?;
        let path = Regex::new(path)
            .map_err(|e| FinderError::Config(format!("invalid path pattern: {e}")))?;
        Ok(Self { domain, path })
    }

    /// The built-in filter for `site`.
    ///
    /// # Errors
    ///
    /// Same as [`SiteFilter::new`].
    pub fn for_site(site: Site) -> Result<Self, FinderError> {
        let (domain, path) = match site {
            Site::Genius => (r"genius.com", r"-lyrics$"),
            Site::Tekstowo => (r"www.tekstowo.pl", r"tekstowo\.pl/piosenka,"),
        };
        Self::new(domain, path)
    }

    /// Whether `result` points at a song page of this filter's site.
    ///
    /// URLs that cannot be parsed or carry no host are rejected.
    pub fn is_site_result(&self, result: &SearchResult) -> bool {
        let Ok(parsed) = Url::parse(&result.url) else {
            return false;
        };
        let netloc = netloc(&parsed);
        self.domain.is_match(&netloc) && self.path.is_match(&result.url)
    }
}

/// Network location (`host[:port]`) of a parsed URL.
fn netloc(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_owned(),
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(url: &str) -> SearchResult {
        SearchResult::from_url(url)
    }

    #[test]
    fn genius_song_page_accepted() {
        let filter = SiteFilter::for_site(Site::Genius).expect("genius filter");
        assert!(filter.is_site_result(&result("https://genius.com/Queen-bohemian-rhapsody-lyrics")));
    }

    #[test]
    fn genius_non_song_page_rejected() {
        let filter = SiteFilter::for_site(Site::Genius).expect("genius filter");
        assert!(!filter.is_site_result(&result("https://genius.com/artists/Queen")));
        assert!(!filter.is_site_result(&result("https://genius.com/x-lyrics/annotations")));
    }

    #[test]
    fn different_host_rejected_even_if_path_matches() {
        let filter = SiteFilter::for_site(Site::Genius).expect("genius filter");
        assert!(!filter.is_site_result(&result("https://other.com/x-lyrics")));
        assert!(!filter.is_site_result(&result("https://mirror.example/genius.com/x-lyrics")));
    }

    #[test]
    fn domain_is_anchored_at_host_start() {
        let filter = SiteFilter::for_site(Site::Genius).expect("genius filter");
        assert!(!filter.is_site_result(&result("https://fakegenius.com/x-lyrics")));
    }

    #[test]
    fn tekstowo_song_page_accepted() {
        let filter = SiteFilter::for_site(Site::Tekstowo).expect("tekstowo filter");
        assert!(filter.is_site_result(&result(
            "https://www.tekstowo.pl/piosenka,queen,bohemian_rhapsody.html"
        )));
    }

    #[test]
    fn tekstowo_listing_page_rejected() {
        let filter = SiteFilter::for_site(Site::Tekstowo).expect("tekstowo filter");
        assert!(!filter.is_site_result(&result("https://www.tekstowo.pl/piosenki_artysty,queen.html")));
        assert!(!filter.is_site_result(&result("https://tekstowo.pl/piosenka,queen,x.html")));
    }

    #[test]
    fn unparseable_url_rejected() {
        let filter = SiteFilter::for_site(Site::Genius).expect("genius filter");
        assert!(!filter.is_site_result(&result("not a url -lyrics")));
    }

    #[test]
    fn custom_filter_matches_port_in_netloc() {
        let filter = SiteFilter::new(r"127\.0\.0\.1:\d+", r"/song/").expect("valid patterns");
        assert!(filter.is_site_result(&result("http://127.0.0.1:8080/song/1")));
        assert!(!filter.is_site_result(&result("http://127.0.0.1:8080/album/1")));
    }

    #[test]
    fn invalid_pattern_is_config_error() {
        let err = SiteFilter::new("(", "x").unwrap_err();
        assert!(matches!(err, FinderError::Config(_)));
    }
}

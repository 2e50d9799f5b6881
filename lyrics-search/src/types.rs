//! Core types: search results, engines, lyrics sites and songs.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// A single search result returned from a web search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the search result page.
    pub title: String,
    /// The URL of the search result.
    pub url: String,
    /// A text snippet summarising the page content.
    pub snippet: String,
    /// Which search engine returned this result.
    pub engine: String,
}

impl SearchResult {
    /// Build a result that carries only a URL, as mock backends do.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            url: url.into(),
            snippet: String::new(),
            engine: String::new(),
        }
    }
}

/// Built-in search engines the finder can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchEngine {
    /// DuckDuckGo HTML endpoint, most tolerant of automated requests.
    DuckDuckGo,
    /// Bing, a different index from Google.
    Bing,
    /// Google, best results but aggressive bot detection.
    Google,
}

impl SearchEngine {
    /// Returns the human-readable name of this engine.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Bing => "Bing",
            Self::Google => "Google",
        }
    }

    /// Returns all available engine variants.
    pub fn all() -> &'static [SearchEngine] {
        &[Self::DuckDuckGo, Self::Bing, Self::Google]
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lyrics websites the finder knows how to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    /// genius.com
    Genius,
    /// www.tekstowo.pl
    Tekstowo,
}

impl Site {
    /// Short name appended to search queries to steer engines to this site.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Genius => "genius",
            Self::Tekstowo => "tekstowo",
        }
    }

    /// Exact network host that song pages of this site live on.
    pub fn host(&self) -> &'static str {
        match self {
            Self::Genius => "genius.com",
            Self::Tekstowo => "www.tekstowo.pl",
        }
    }

    /// Returns all supported sites.
    pub fn all() -> &'static [Site] {
        &[Self::Genius, Self::Tekstowo]
    }

    /// Select the site whose host equals the host of `url`.
    ///
    /// Returns `None` for unparseable URLs and hosts no site owns.
    pub fn from_url(url: &str) -> Option<Site> {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.host_str()?;
        Self::all().iter().copied().find(|site| site.host() == host)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which sites a single `find`/`find_all` call searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteSelection {
    pub genius: bool,
    pub tekstowo: bool,
}

impl Default for SiteSelection {
    fn default() -> Self {
        Self {
            genius: true,
            tekstowo: true,
        }
    }
}

impl SiteSelection {
    /// Only genius.com.
    pub fn genius_only() -> Self {
        Self {
            genius: true,
            tekstowo: false,
        }
    }

    /// Only www.tekstowo.pl.
    pub fn tekstowo_only() -> Self {
        Self {
            genius: false,
            tekstowo: true,
        }
    }

    /// Whether `site` is selected.
    pub fn includes(&self, site: Site) -> bool {
        match site {
            Site::Genius => self.genius,
            Site::Tekstowo => self.tekstowo,
        }
    }
}

/// A song parsed from a lyrics page.
///
/// Equality and hashing cover all four fields. `lyrics` is `None` only when
/// the page was recognised but carries no lyrics text; a page that could not
/// be fetched or parsed never becomes a `Song`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    pub url: String,
    pub title: String,
    pub artist: String,
    pub lyrics: Option<String>,
}

impl Song {
    /// `"{artist} {title}"`, the string ranked against a query title.
    pub fn name(&self) -> String {
        format!("{} {}", self.artist, self.title)
    }

    /// Site this song was parsed from, by URL host.
    pub fn site(&self) -> Option<Site> {
        Site::from_url(&self.url)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.artist, self.title, self.url)
    }
}

//! genius.com song pages.
//!
//! Handles both the current React markup (`data-lyrics-container` blocks,
//! `SongHeader` classes) and the legacy server-rendered header classes.

use async_trait::async_trait;
use scraper::{Html, Selector};

use super::{clean_lyrics, request_url, select_first, text_with_breaks, SiteAdapter};
use crate::error::FinderError;
use crate::http;
use crate::types::{Site, Song};

const TITLE_SELECTORS: &[&str] = &[
    ".song_header-primary_info-title",
    "h1[class*=\"SongHeader\"] span",
    "h1[class*=\"SongHeader\"]",
];

const ARTIST_SELECTORS: &[&str] = &[
    ".song_header-primary_info .song_header-primary_info-primary_artist",
    "a[class*=\"HeaderArtistAndTracklist\"][class*=\"__Artist\"]",
    "a[class*=\"SongHeader\"][href*=\"/artists/\"]",
];

const LEGACY_LYRICS_SELECTORS: &[&str] = &["lyrics p", "div.lyrics p"];

/// Adapter for genius.com.
#[derive(Debug, Clone)]
pub struct GeniusAdapter {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl GeniusAdapter {
    /// Create an adapter that fetches through `client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: None,
        }
    }

    /// Serve page requests from `base_url` instead of genius.com.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

#[async_trait]
impl SiteAdapter for GeniusAdapter {
    fn site(&self) -> Site {
        Site::Genius
    }

    async fn fetch(&self, url: &str) -> Result<Song, FinderError> {
        let target = request_url(url, self.base_url.as_deref())?;
        let html = http::get_text(&self.client, "genius", &target).await?;
        tracing::trace!(url, bytes = html.len(), "genius page received");
        parse_genius_html(&html, url)
    }
}

/// Parse a genius.com song page.
///
/// A page without a song header is a parse error. A page with a header but
/// no lyrics text (instrumentals, unreleased songs) yields `lyrics: None`.
pub(crate) fn parse_genius_html(html: &str, url: &str) -> Result<Song, FinderError> {
    let document = Html::parse_document(html);

    let title = select_first(&document, TITLE_SELECTORS)?
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| FinderError::Parse(format!("genius: no song title in {url}")))?;

    let artist = select_first(&document, ARTIST_SELECTORS)?
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .filter(|a| !a.is_empty())
        .ok_or_else(|| FinderError::Parse(format!("genius: no artist in {url}")))?;

    let lyrics = extract_lyrics(&document)?;

    Ok(Song {
        url: url.to_owned(),
        title,
        artist,
        lyrics,
    })
}

fn extract_lyrics(document: &Html) -> Result<Option<String>, FinderError> {
    let container_sel = Selector::parse("div[data-lyrics-container=\"true\"]")
        .map_err(|e| FinderError::Parse(format!("invalid lyrics selector: {e:?}")))?;

    let blocks: Vec<String> = document.select(&container_sel).map(text_with_breaks).collect();
    if !blocks.is_empty() {
        return Ok(clean_lyrics(&blocks.join("\n")));
    }

    Ok(select_first(document, LEGACY_LYRICS_SELECTORS)?.and_then(|p| clean_lyrics(&text_with_breaks(p))))
}

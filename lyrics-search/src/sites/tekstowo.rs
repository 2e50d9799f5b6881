//! www.tekstowo.pl song pages.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Node};

use super::{clean_lyrics, request_url, select_first, text_with_breaks, SiteAdapter};
use crate::error::FinderError;
use crate::http;
use crate::types::{Site, Song};

/// Heading holding `"Artist - Title"`.
const HEADING_SELECTORS: &[&str] = &["div.belka.short strong", "h1.strong"];

/// Adapter for www.tekstowo.pl.
#[derive(Debug, Clone)]
pub struct TekstowoAdapter {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl TekstowoAdapter {
    /// Create an adapter that fetches through `client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: None,
        }
    }

    /// Serve page requests from `base_url` instead of www.tekstowo.pl.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

#[async_trait]
impl SiteAdapter for TekstowoAdapter {
    fn site(&self) -> Site {
        Site::Tekstowo
    }

    async fn fetch(&self, url: &str) -> Result<Song, FinderError> {
        let target = request_url(url, self.base_url.as_deref())?;
        let html = http::get_text(&self.client, "tekstowo", &target).await?;
        tracing::trace!(url, bytes = html.len(), "tekstowo page received");
        parse_tekstowo_html(&html, url)
    }
}

/// Parse a tekstowo.pl song page.
///
/// The heading must read `"Artist - Title"`, split at the first `" - "`.
/// A missing or blank `div.song-text` yields `lyrics: None`.
pub(crate) fn parse_tekstowo_html(html: &str, url: &str) -> Result<Song, FinderError> {
    let document = Html::parse_document(html);

    let heading = select_first(&document, HEADING_SELECTORS)?
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .ok_or_else(|| FinderError::Parse(format!("tekstowo: no song heading in {url}")))?;

    let (artist, title) = heading
        .split_once(" - ")
        .map(|(artist, title)| (artist.trim().to_owned(), title.trim().to_owned()))
        .ok_or_else(|| {
            FinderError::Parse(format!("tekstowo: heading {heading:?} is not \"artist - title\""))
        })?;

    let lyrics = match select_first(&document, &["div.song-text"])? {
        Some(song_text) => extract_lyrics(&document, song_text)?,
        None => None,
    };

    Ok(Song {
        url: url.to_owned(),
        title,
        artist,
        lyrics,
    })
}

/// Lyrics live in `.inner-text` on current pages and as bare text nodes
/// directly under `div.song-text` on older ones. Older pages put a source
/// newline after every `<br />`, so only the text nodes are kept there.
fn extract_lyrics(document: &Html, song_text: ElementRef<'_>) -> Result<Option<String>, FinderError> {
    if let Some(inner) = select_first(document, &["div.song-text .inner-text"])? {
        return Ok(clean_lyrics(&text_with_breaks(inner)));
    }

    let raw: String = song_text
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect();
    Ok(clean_lyrics(&raw))
}

//! Terminal rendering of found songs.

use lyrics_search::Song;

use crate::error::{AppError, Result};

/// Heading line plus lyrics, as printed by `lyrics find`.
pub fn render_song(song: &Song) -> String {
    match song.lyrics.as_deref() {
        Some(lyrics) => format!("{song}\n\n{lyrics}"),
        None => song.to_string(),
    }
}

/// One heading line per song, as printed by `lyrics find-all`.
pub fn render_list(songs: &[Song]) -> String {
    songs
        .iter()
        .enumerate()
        .map(|(i, song)| format!("{:>2}. {song}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON for `--json`.
///
/// # Errors
///
/// Returns [`AppError::Config`] if serialization fails.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Config(format!("JSON output: {e}")))
}

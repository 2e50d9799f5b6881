//! Ranking of resolved songs against the requested title.
//!
//! Score: fraction of the song's `"artist title"` words found in the
//! requested title (see [`crate::matcher::string_contained_percentage`]).
//! The sort is stable, so equal scores keep discovery order.

use crate::matcher::string_contained_percentage;
use crate::types::Song;

/// Sort `songs` by descending match score against `title`.
pub fn sort_by_fitting(songs: Vec<Song>, title: &str) -> Vec<Song> {
    let mut scored: Vec<(f64, Song)> = songs
        .into_iter()
        .map(|song| (string_contained_percentage(&song.name(), title), song))
        .collect();

    // `sort_by` is stable; `total_cmp` keeps the order total.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored.into_iter().map(|(_, song)| song).collect()
}

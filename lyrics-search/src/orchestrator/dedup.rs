//! First-seen-wins deduplication of search results by URL.
//!
//! URLs are compared as exact strings. Different spellings of the same page
//! are kept apart; the site filters already restrict results to canonical
//! song-page shapes.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::types::SearchResult;

/// Lazy iterator yielding each URL's first result, in input order.
///
/// Created by [`uniq_by_url`].
#[derive(Debug)]
pub struct UniqByUrl<I> {
    inner: I,
    seen: HashSet<String>,
}

impl<I> Iterator for UniqByUrl<I>
where
    I: Iterator<Item = SearchResult>,
{
    type Item = SearchResult;

    fn next(&mut self) -> Option<SearchResult> {
        loop {
            let result = self.inner.next()?;
            if self.seen.insert(result.url.clone()) {
                return Some(result);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

impl<I> FusedIterator for UniqByUrl<I> where I: FusedIterator<Item = SearchResult> {}

/// Drop every result whose URL was already yielded, keeping first-seen order.
pub fn uniq_by_url<I>(results: I) -> UniqByUrl<I::IntoIter>
where
    I: IntoIterator<Item = SearchResult>,
{
    UniqByUrl {
        inner: results.into_iter(),
        seen: HashSet::new(),
    }
}

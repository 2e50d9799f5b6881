//! Word-overlap scoring between free-text strings.
//!
//! Both strings are normalised by turning every character that is not a
//! letter, digit or whitespace into a space. A word of the target text
//! matches when it appears as a whole whitespace-delimited word of the
//! context, compared case-insensitively. Each context word can satisfy at
//! most one target word.

/// Count how many words of `text` occur in `context`.
///
/// Returns `(matched_count, total_words)` where `total_words` is the number
/// of words in the normalised `text`. Repeated words in `text` each need
/// their own occurrence in `context`.
///
/// # Examples
///
/// ```
/// use lyrics_search::matcher::string_contained;
///
/// assert_eq!(string_contained("hello world", "say hello to the world"), (2, 2));
/// assert_eq!(string_contained("hello hello", "hello world"), (1, 2));
/// ```
pub fn string_contained(text: &str, context: &str) -> (usize, usize) {
    let text = remove_non_letters(text);
    let mut context_words: Vec<String> = remove_non_letters(context)
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    let mut matched = 0;
    let mut total = 0;
    for word in text.split_whitespace() {
        total += 1;
        let word = word.to_lowercase();
        if let Some(pos) = context_words.iter().position(|c| *c == word) {
            context_words.remove(pos);
            matched += 1;
        }
    }
    (matched, total)
}

/// Fraction of `text`'s words found in `context`, in `[0, 1]`.
///
/// An empty `text` (no words after normalisation) scores `0.0`.
pub fn string_contained_percentage(text: &str, context: &str) -> f64 {
    let (found, total) = string_contained(text, context);
    ratio(found, total)
}

/// Symmetric overlap: words of each string found in the other, over both totals.
///
/// Scores `0.0` when both strings are empty.
pub fn string_overlap_percentage(a: &str, b: &str) -> f64 {
    let (found_a, total_a) = string_contained(a, b);
    let (found_b, total_b) = string_contained(b, a);
    ratio(found_a + found_b, total_a + total_b)
}

fn ratio(found: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    found as f64 / total as f64
}

fn remove_non_letters(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

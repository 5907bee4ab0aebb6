//! Candidate filtering using nucleo-matcher.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Indices of `items` containing `query` as a case-insensitive substring.
///
/// Unlike a fuzzy filter the result is not ranked: indices come back in
/// source order. An empty query matches every item.
///
/// # Example
///
/// ```ignore
/// let items = vec!["Drama".to_string(), "Documentary".into(), "Comedy".into()];
/// assert_eq!(substring_filter("dr", &items), vec![0]);
/// assert_eq!(substring_filter("m", &items), vec![0, 1, 2]);
/// ```
pub fn substring_filter(query: &str, items: &[String]) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let atom = Atom::new(
        query,
        CaseMatching::Ignore,
        Normalization::Never,
        AtomKind::Substring,
        false,
    );

    let mut buf = Vec::new();
    items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let haystack = Utf32Str::new(label, &mut buf);
            atom.score(haystack, &mut matcher).map(|_| index)
        })
        .collect()
}

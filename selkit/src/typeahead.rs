//! Jump-to-letter lookup for open option lists.

/// Index of the first option starting with `c`, ignoring case.
///
/// Only alphabetic characters trigger a lookup; digits, punctuation and
/// whitespace always return `None`.
pub fn find_prefix_match<S: AsRef<str>>(c: char, options: &[S]) -> Option<usize> {
    if !c.is_alphabetic() {
        return None;
    }
    let needle: String = c.to_lowercase().collect();
    options
        .iter()
        .position(|option| option.as_ref().to_lowercase().starts_with(&needle))
}

/// Like [`find_prefix_match`], for raw key text. Anything other than a single
/// character is ignored.
pub fn match_input<S: AsRef<str>>(input: &str, options: &[S]) -> Option<usize> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => find_prefix_match(c, options),
        _ => None,
    }
}

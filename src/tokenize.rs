//! Text normalization: raw text in, filtered lowercase tokens out.

use std::collections::HashSet;

/// Chars that may appear inside a token. `is_alphanumeric` is Unicode-aware,
/// so umlauts and ß are covered without a special case.
fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Normalizes raw text into a sequence of analysis tokens.
///
/// Lowercases the whole text, splits at every char that is not a letter,
/// digit, underscore, or hyphen, and keeps only tokens that
/// - contain at least one alphanumeric char,
/// - are longer than 2 chars,
/// - are not purely numeric,
/// - are not in the stopword set.
///
/// Token order follows the input. Empty input yields an empty vector.
///
/// # Example
/// ```
/// use std::collections::HashSet;
/// use textradar::normalize;
///
/// let stop: HashSet<String> = ["und".to_string()].into_iter().collect();
/// let words = normalize("Die Sonne scheint, und zwar 24 Stunden!", &stop);
/// assert_eq!(words, vec!["die", "sonne", "scheint", "zwar", "stunden"]);
/// ```
pub fn normalize(text: &str, stopwords: &HashSet<String>) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .filter(|w| w.chars().count() > 2)
        .filter(|w| !w.chars().all(char::is_numeric))
        .filter(|w| !stopwords.contains(*w))
        .map(str::to_string)
        .collect()
}

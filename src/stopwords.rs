//! Stopword set initialization.
//!
//! Loaded exactly once at startup and passed into the tokenizer as a plain
//! value; there is no ambient global. Fallback order: a `stopwords_de.txt`
//! next to the invocation wins, otherwise the corpus bundled into the
//! binary is used. A hardcoded domain exclusion and an optional
//! user-supplied list are union'd on top.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, warn};

/// German stopword corpus compiled into the binary as the fallback source.
const BUNDLED_CORPUS: &str = include_str!("words/stopwords_de.txt");

/// Local override file probed in the working directory.
const LOCAL_FILE: &str = "stopwords_de.txt";

/// The outlet name dominates scraped tagesschau.de pages without carrying
/// topical signal, so it is always excluded.
const DOMAIN_EXCLUSION: &str = "tagesschau";

fn parse_word_list(raw: &str) -> HashSet<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Loads the stopword set, preferring a local `stopwords_de.txt` over the
/// bundled corpus. `extra_file` (one word per line) is union'd in when
/// given; an unreadable extra file is logged and skipped.
pub fn load_stopwords(extra_file: Option<&Path>) -> HashSet<String> {
    let mut set = match fs::read_to_string(LOCAL_FILE) {
        Ok(raw) => {
            info!("using local stopword file {LOCAL_FILE}");
            parse_word_list(&raw)
        }
        Err(_) => parse_word_list(BUNDLED_CORPUS),
    };
    set.insert(DOMAIN_EXCLUSION.to_string());

    if let Some(path) = extra_file {
        match fs::read_to_string(path) {
            Ok(raw) => {
                let extra = parse_word_list(&raw);
                info!("added {} stopwords from {}", extra.len(), path.display());
                set.extend(extra);
            }
            Err(e) => warn!("stopword file {} not readable: {e}", path.display()),
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_corpus_parses_to_lowercase_set() {
        let set = parse_word_list(BUNDLED_CORPUS);
        assert!(set.len() > 200);
        for word in ["der", "die", "das", "und", "ist"] {
            assert!(set.contains(word), "missing {word}");
        }
    }

    #[test]
    fn parse_trims_and_lowercases() {
        let set = parse_word_list("  Der \n\nUND\n");
        assert!(set.contains("der"));
        assert!(set.contains("und"));
        assert_eq!(set.len(), 2);
    }
}

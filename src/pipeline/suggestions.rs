// Mixed suggestions — 1, 2 and 3 word phrases in one list.
//
// Fills up to MAX_SUGGESTIONS from unigrams first, then bigrams, then
// trigrams, skipping phrases already present. A sparse text that yields fewer
// than MIN_SUGGESTIONS gets topped up with "<keyword> <mode>" entries. The
// top-up does not check for duplicates, so short inputs can repeat a phrase.

use std::collections::HashSet;

use tracing::debug;

use crate::keywords::traits::KeywordStrategy;
use crate::phrases::ngrams::{make_ngrams, DEFAULT_LIMIT};

/// Mode used when the request doesn't name one.
pub const DEFAULT_MODE: &str = "podcasts";

/// Keywords considered for suggestions.
pub const SUGGESTION_MAX_WORDS: usize = 20;

pub const MAX_SUGGESTIONS: usize = 12;

/// Below this many, the list is topped up with single keywords.
pub const MIN_SUGGESTIONS: usize = 6;

/// Extract keywords from `text` and build the mixed suggestion list.
pub fn ai_suggestions(strategy: &dyn KeywordStrategy, text: &str, mode: &str) -> Vec<String> {
    let words = strategy.extract_keywords(text, SUGGESTION_MAX_WORDS);
    suggestions_from_keywords(&words, mode)
}

/// Build the mixed suggestion list from an already-extracted keyword sequence.
pub fn suggestions_from_keywords(words: &[String], mode: &str) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for n in 1..=3 {
        for gram in make_ngrams(words, n, Some(mode), DEFAULT_LIMIT) {
            if seen.insert(gram.clone()) {
                suggestions.push(gram);
            }
            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
        }
        if suggestions.len() >= MAX_SUGGESTIONS {
            break;
        }
    }

    if suggestions.len() < MIN_SUGGESTIONS {
        let before = suggestions.len();
        for word in words.iter().take(MIN_SUGGESTIONS) {
            suggestions.push(format!("{word} {mode}"));
        }
        debug!(
            added = suggestions.len() - before,
            "Topped up sparse suggestions"
        );
    }

    suggestions
}

// Keyword strategy trait — the swap-ready abstraction.
//
// Two implementations exist: ToolkitExtractor (lemmas from a linguistic
// toolkit) and FallbackExtractor (a plain tokenizer heuristic). Which one runs
// is decided once at startup by keywords::select, so the rest of the
// pipeline never branches on toolkit availability.

use std::collections::HashSet;

use tracing::debug;

use crate::text::normalize::normalize;

/// Default cap on unique keywords per extraction.
pub const DEFAULT_MAX_WORDS: usize = 50;

/// A way of turning normalized text into candidate keywords.
///
/// Implementors only decide which tokens qualify. Normalization,
/// order-preserving deduplication and the `max_words` cap are shared in
/// [`KeywordStrategy::extract_keywords`].
pub trait KeywordStrategy: Send + Sync {
    /// Short name for logs and the health endpoint.
    fn name(&self) -> &'static str;

    /// Qualifying lowercase keywords in text order. Duplicates allowed.
    fn candidates<'a>(&'a self, normalized: &'a str) -> Box<dyn Iterator<Item = String> + 'a>;

    /// Extract up to `max_words` unique keywords from raw text, in order of
    /// first appearance.
    fn extract_keywords(&self, text: &str, max_words: usize) -> Vec<String> {
        if max_words == 0 {
            return Vec::new();
        }
        let normalized = normalize(text);
        let keywords = dedupe_capped(self.candidates(&normalized), max_words);
        debug!(
            strategy = self.name(),
            keywords = keywords.len(),
            "Extracted keywords"
        );
        keywords
    }
}

/// Keep the first occurrence of each word, stopping as soon as `max` unique
/// words are collected. The rest of the iterator is never pulled.
pub fn dedupe_capped(words: impl Iterator<Item = String>, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    if max == 0 {
        return out;
    }
    for word in words {
        if seen.insert(word.clone()) {
            out.push(word);
            if out.len() >= max {
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let out = dedupe_capped(owned(&["b", "a", "b", "c", "a"]).into_iter(), 10);
        assert_eq!(out, owned(&["b", "a", "c"]));
    }

    #[test]
    fn test_dedupe_caps() {
        let out = dedupe_capped(owned(&["a", "b", "c", "d"]).into_iter(), 2);
        assert_eq!(out, owned(&["a", "b"]));
    }

    #[test]
    fn test_dedupe_stops_pulling_at_cap() {
        let mut pulled = 0;
        let words = owned(&["a", "a", "b", "c", "d"]).into_iter().inspect(|_| pulled += 1);
        let out = dedupe_capped(words, 2);
        assert_eq!(out, owned(&["a", "b"]));
        assert_eq!(pulled, 3);
    }

    #[test]
    fn test_dedupe_zero_cap() {
        assert!(dedupe_capped(owned(&["a"]).into_iter(), 0).is_empty());
    }
}

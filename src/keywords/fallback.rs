// Fallback keyword extraction — no linguistic toolkit required.
//
// Splits normalized text into word-character runs and keeps lowercased words
// longer than two characters that aren't in the supplementary stopword set.
// No lemmatization, so "stories" and "story" stay distinct keywords.

use std::sync::LazyLock;

use regex::Regex;

use super::traits::KeywordStrategy;
use crate::text::stopwords::is_supplementary;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Words at or below this length are dropped.
const MIN_LEN_EXCLUSIVE: usize = 2;

/// Tokenizer heuristic used when the toolkit is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackExtractor;

impl KeywordStrategy for FallbackExtractor {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn candidates<'a>(&'a self, normalized: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(
            WORD_RE
                .find_iter(normalized)
                .map(|m| m.as_str().to_lowercase())
                .filter(|w| !is_supplementary(w) && w.len() > MIN_LEN_EXCLUSIVE),
        )
    }
}

// Single-option generation.
//
// The web page sends an option code per button: a size prefix ("1word",
// "2word", "3word") and an optional category suffix ("_podcasts", "_audio").
// Malformed codes degrade to single words with no label.

use tracing::debug;

use crate::keywords::traits::{KeywordStrategy, DEFAULT_MAX_WORDS};
use crate::phrases::ngrams::{make_ngrams, DEFAULT_LIMIT};

/// Category a phrase can be labeled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Podcasts,
    AudioDramas,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Podcasts => "podcasts",
            Category::AudioDramas => "audio dramas",
        }
    }
}

/// Parsed option code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOption {
    /// Words per phrase, 1 to 3
    pub n: usize,
    pub category: Option<Category>,
}

impl GenerateOption {
    /// Parse an option code. Never fails; unknown prefixes mean n = 1 and
    /// unknown suffixes mean no label.
    pub fn parse(option: &str) -> Self {
        let n = if option.starts_with("1word") {
            1
        } else if option.starts_with("2word") {
            2
        } else if option.starts_with("3word") {
            3
        } else {
            1
        };

        let category = if option.ends_with("_podcasts") {
            Some(Category::Podcasts)
        } else if option.ends_with("_audio") {
            Some(Category::AudioDramas)
        } else {
            None
        };

        Self { n, category }
    }

    pub fn label(&self) -> Option<&'static str> {
        self.category.map(Category::label)
    }
}

/// Generate one batch of n-grams for an option code.
///
/// `mode` is accepted for parity with the request payload but does not
/// affect the result; the label comes from the option suffix alone.
pub fn generate(strategy: &dyn KeywordStrategy, text: &str, option: &str, _mode: &str) -> Vec<String> {
    let parsed = GenerateOption::parse(option);
    let words = strategy.extract_keywords(text, DEFAULT_MAX_WORDS);
    let result = make_ngrams(&words, parsed.n, parsed.label(), DEFAULT_LIMIT);
    debug!(
        option,
        n = parsed.n,
        keywords = words.len(),
        phrases = result.len(),
        "Generated phrases"
    );
    result
}

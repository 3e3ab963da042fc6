// Toolkit-backed keyword extraction.
//
// A linguistic toolkit tokenizes text and annotates each token with its lemma
// and stopword/punctuation flags. The extractor keeps lemmas that are purely
// alphabetic and not stopwords by either the toolkit's flag or the
// supplementary list. The toolkit itself is a trait so the extraction rules
// can be exercised without loading a model.

use super::traits::KeywordStrategy;
use crate::text::stopwords::is_supplementary;

/// One token as annotated by a linguistic toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedToken {
    /// Surface form as it appeared in the text.
    pub text: String,
    /// Dictionary form, e.g. "running" → "run".
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
}

/// Tokenization plus lemma lookup.
pub trait LinguisticToolkit: Send + Sync {
    /// Analyze text into tokens, in text order.
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken>;
}

/// Keyword strategy backed by a [`LinguisticToolkit`].
pub struct ToolkitExtractor<T> {
    toolkit: T,
}

impl<T: LinguisticToolkit> ToolkitExtractor<T> {
    pub fn new(toolkit: T) -> Self {
        Self { toolkit }
    }
}

impl<T: LinguisticToolkit> KeywordStrategy for ToolkitExtractor<T> {
    fn name(&self) -> &'static str {
        "toolkit"
    }

    fn candidates<'a>(&'a self, normalized: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(
            self.toolkit
                .analyze(normalized)
                .into_iter()
                .filter_map(|token| keep_token(&token)),
        )
    }
}

/// The lowercased lemma if the token qualifies as a keyword.
fn keep_token(token: &AnalyzedToken) -> Option<String> {
    if token.is_stop || token.is_punct {
        return None;
    }
    if token.lemma.is_empty() || !token.lemma.chars().all(char::is_alphabetic) {
        return None;
    }
    let lemma = token.lemma.to_lowercase();
    if is_supplementary(&lemma) {
        return None;
    }
    Some(lemma)
}

/// Punctuation flag for toolkits that don't provide one: every character is
/// ASCII punctuation.
pub fn is_punctuation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_punctuation())
}

// nlprule-backed linguistic toolkit.
//
// Loads nlprule's prebuilt English tokenizer binary (en_tokenizer.bin) once at
// startup. nlprule supplies tokens, POS tags and lemmas; stopword and
// punctuation flags are derived from the surface form since nlprule has
// no notion of either.

use std::path::Path;

use anyhow::Result;
use nlprule::Tokenizer;
use tracing::debug;

use super::toolkit::{is_punctuation, AnalyzedToken, LinguisticToolkit};
use crate::text::stopwords::is_english_stopword;

pub struct NlpruleToolkit {
    tokenizer: Tokenizer,
}

impl NlpruleToolkit {
    /// Load the tokenizer binary from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Tokenizer binary not found: {}\nDownload en_tokenizer.bin from the nlprule releases \
                 page into CASTWORDS_MODEL_DIR.",
                path.display()
            );
        }

        let tokenizer = Tokenizer::new(path)
            .map_err(|e| anyhow::anyhow!("Failed to load nlprule tokenizer: {}", e))?;

        debug!("Loaded nlprule tokenizer from {}", path.display());

        Ok(Self { tokenizer })
    }
}

impl LinguisticToolkit for NlpruleToolkit {
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        let mut tokens = Vec::new();
        for sentence in self.tokenizer.pipe(text) {
            for token in sentence.tokens() {
                let word = token.word();
                let surface = word.text().as_str();
                if surface.is_empty() {
                    continue;
                }
                // Unknown words come back without a lemma; use the surface form
                let lemma = word
                    .tags()
                    .iter()
                    .map(|tag| tag.lemma().as_str())
                    .find(|lemma| !lemma.is_empty())
                    .unwrap_or(surface);
                tokens.push(AnalyzedToken {
                    text: surface.to_string(),
                    lemma: lemma.to_string(),
                    is_stop: is_english_stopword(surface),
                    is_punct: is_punctuation(surface),
                });
            }
        }
        tokens
    }
}

// Request pipeline: text → keywords → phrases.
//
// Pipeline owns the keyword strategy chosen at startup and is cheap to clone,
// so the web layer can hand a copy to each blocking task. Everything else is
// request-local.

use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::keywords::select::select_strategy;
use crate::keywords::traits::KeywordStrategy;
use crate::text::{normalize, stopwords};

pub mod generate;
pub mod suggestions;

#[derive(Clone)]
pub struct Pipeline {
    strategy: Arc<dyn KeywordStrategy>,
}

impl Pipeline {
    pub fn new(strategy: Arc<dyn KeywordStrategy>) -> Self {
        Self { strategy }
    }

    /// Select the keyword strategy from configuration and build every
    /// shared table up front.
    pub fn from_config(config: &Config) -> Result<Self> {
        let strategy = select_strategy(config)?;
        normalize::warm_up();
        stopwords::warm_up();
        Ok(Self::new(strategy))
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Up to `max_words` unique keywords in order of first appearance.
    pub fn keywords(&self, text: &str, max_words: usize) -> Vec<String> {
        self.strategy.extract_keywords(text, max_words)
    }

    /// Single batch of n-grams selected by an option code like "2word_podcasts".
    pub fn generate(&self, text: &str, option: &str, mode: &str) -> Vec<String> {
        generate::generate(self.strategy.as_ref(), text, option, mode)
    }

    /// Mixed 1-3 word suggestions labeled with `mode`, at most 12.
    pub fn ai_suggestions(&self, text: &str, mode: &str) -> Vec<String> {
        suggestions::ai_suggestions(self.strategy.as_ref(), text, mode)
    }
}

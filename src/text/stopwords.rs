// Stopword lists.
//
// Two lists with different jobs. The supplementary set is a short fixed list
// applied in every extraction mode. The lexical list comes from the
// `stop-words` crate and backs the toolkit's own stopword flag.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

/// Common short words dropped regardless of extraction mode.
pub const SUPPLEMENTARY: [&str; 17] = [
    "the", "and", "is", "in", "it", "of", "to", "a", "an", "for", "on", "with", "that", "this",
    "these", "those", "s",
];

static SUPPLEMENTARY_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SUPPLEMENTARY.into_iter().collect());

static ENGLISH_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| get(LANGUAGE::English).iter().map(|s| s.to_string()).collect());

/// Is `word` (already lowercased) in the supplementary set?
pub fn is_supplementary(word: &str) -> bool {
    SUPPLEMENTARY_SET.contains(word)
}

/// Is `word` in the English lexical stopword list? Case-insensitive.
pub fn is_english_stopword(word: &str) -> bool {
    ENGLISH_SET.contains(&word.to_lowercase())
}

/// Force both sets to load at startup.
pub fn warm_up() {
    LazyLock::force(&SUPPLEMENTARY_SET);
    LazyLock::force(&ENGLISH_SET);
}

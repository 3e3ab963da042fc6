// N-gram composer.
//
// Slides a window of n keywords across the sequence and joins each window
// with single spaces, optionally suffixing a category label such as
// "podcasts" or "audio dramas".

use tracing::debug;

/// Default cap on phrases per batch.
pub const DEFAULT_LIMIT: usize = 50;

/// Build labeled n-grams from `words`, in window order, at most `limit` of them.
///
/// An empty label counts as no label. Returns nothing when `words` is empty
/// or `n` exceeds the number of words.
pub fn make_ngrams(words: &[String], n: usize, label: Option<&str>, limit: usize) -> Vec<String> {
    if words.is_empty() || n == 0 {
        return Vec::new();
    }
    let label = label.filter(|l| !l.is_empty());

    let phrases: Vec<String> = words
        .windows(n)
        .take(limit)
        .map(|window| {
            let gram = window.join(" ");
            match label {
                Some(label) => format!("{gram} {label}"),
                None => gram,
            }
        })
        .collect();

    debug!(n, phrases = phrases.len(), "Composed n-grams");
    phrases
}

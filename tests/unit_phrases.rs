// Unit tests for the n-gram composer and option parsing.

use castwords::phrases::ngrams::{make_ngrams, DEFAULT_LIMIT};
use castwords::pipeline::generate::{Category, GenerateOption};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

// ============================================================
// make_ngrams
// ============================================================

#[test]
fn ngrams_reference_bigrams() {
    let grams = make_ngrams(&words(&["great", "space", "story"]), 2, None, DEFAULT_LIMIT);
    assert_eq!(grams, vec!["great space", "space story"]);
}

#[test]
fn ngrams_limit_one() {
    let grams = make_ngrams(&words(&["great", "space", "story"]), 2, None, 1);
    assert_eq!(grams, vec!["great space"]);
}

#[test]
fn ngrams_n_exceeds_words() {
    assert!(make_ngrams(&words(&["great", "space", "story"]), 4, None, 50).is_empty());
}

#[test]
fn ngrams_count_is_len_minus_n_plus_one() {
    let ten: Vec<String> = (0..10).map(|i| format!("k{i}")).collect();
    for n in 1..=3 {
        assert_eq!(make_ngrams(&ten, n, None, 50).len(), 10 - n + 1);
    }
}

#[test]
fn ngrams_limit_caps_long_sequences() {
    let many: Vec<String> = (0..80).map(|i| format!("k{i}")).collect();
    let grams = make_ngrams(&many, 1, Some("podcasts"), DEFAULT_LIMIT);
    assert_eq!(grams.len(), 50);
    assert_eq!(grams[49], "k49 podcasts");
}

#[test]
fn ngrams_label_with_spaces_appended_verbatim() {
    let grams = make_ngrams(&words(&["lost", "colony"]), 2, Some("audio dramas"), 50);
    assert_eq!(grams, vec!["lost colony audio dramas"]);
}

// ============================================================
// GenerateOption
// ============================================================

#[test]
fn option_codes_from_the_page() {
    let cases = [
        ("1word", 1, None),
        ("2word", 2, None),
        ("3word", 3, None),
        ("1word_podcasts", 1, Some(Category::Podcasts)),
        ("2word_podcasts", 2, Some(Category::Podcasts)),
        ("3word_audio", 3, Some(Category::AudioDramas)),
    ];
    for (code, n, category) in cases {
        let parsed = GenerateOption::parse(code);
        assert_eq!(parsed, GenerateOption { n, category }, "code {code}");
    }
}

#[test]
fn option_malformed_defaults() {
    for code in ["", "word", "5word", "2WORD", " 2word"] {
        let parsed = GenerateOption::parse(code);
        assert_eq!(parsed.n, 1, "code {code:?}");
        assert_eq!(parsed.label(), None, "code {code:?}");
    }
}

// Unit tests for text normalization and stopword lists.
//
// Normalizer properties: idempotence, whitespace shape, and the elision of
// each noise kind.

use castwords::text::normalize::normalize;
use castwords::text::stopwords::{is_supplementary, SUPPLEMENTARY};

const NOISY_SAMPLES: [&str; 8] = [
    "",
    "   ",
    "New episode!!! 🎙️ out now at https://pod.example/ep42 — tell us: hi@pod.example",
    "<div class=\"notes\">\n  <p>Season   two</p>\n</div>",
    "tab\tseparated\tvalues\r\nand lines",
    "<unclosed tag and > stray bracket",
    "naïve café résumé",
    "www.a.com http://b.c https://d.e plain",
];

// ============================================================
// normalize — structural properties
// ============================================================

#[test]
fn normalize_is_idempotent() {
    for sample in NOISY_SAMPLES {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "input: {sample:?}");
    }
}

#[test]
fn normalize_never_leaves_double_or_edge_spaces() {
    for sample in NOISY_SAMPLES {
        let out = normalize(sample);
        assert!(!out.contains("  "), "double space in {out:?}");
        assert_eq!(out, out.trim(), "edge whitespace in {out:?}");
        assert!(!out.contains('\n') && !out.contains('\t'));
    }
}

#[test]
fn normalize_output_is_ascii() {
    for sample in NOISY_SAMPLES {
        assert!(normalize(sample).is_ascii());
    }
}

// ============================================================
// normalize — elision
// ============================================================

#[test]
fn normalize_removes_all_noise_kinds() {
    let out = normalize(
        "Great show https://pod.example/ep1 contact host@pod.example <b>bold</b> 🎧🔥 end",
    );
    assert_eq!(out, "Great show contact bold end");
}

#[test]
fn normalize_handles_multiline_markup() {
    let out = normalize("<div class=\"notes\">\n  <p>Season   two</p>\n</div>");
    assert_eq!(out, "Season two");
}

#[test]
fn normalize_stray_closing_bracket_survives() {
    // Only a full <...> pair is a tag
    assert_eq!(normalize("a > b"), "a > b");
}

#[test]
fn normalize_all_links() {
    assert_eq!(normalize("www.a.com http://b.c https://d.e plain"), "plain");
}

#[test]
fn normalize_link_followed_by_nbsp_keeps_next_word() {
    assert_eq!(
        normalize("visit https://x.com\u{a0}mystery tonight"),
        "visit mystery tonight"
    );
}

#[test]
fn normalize_email_followed_by_em_space_keeps_next_word() {
    assert_eq!(
        normalize("mail dj@radio.fm\u{2003}haunted lighthouse"),
        "mail haunted lighthouse"
    );
}

#[test]
fn normalize_unicode_whitespace_is_idempotent() {
    for sample in ["a\u{a0}\u{2003}b", "x\u{3000}www.y.z\u{202f}end", "p\x1dq"] {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "input: {sample:?}");
        assert!(!once.contains("  "));
    }
}

// ============================================================
// stopwords
// ============================================================

#[test]
fn supplementary_list_is_lowercase_and_short() {
    for word in SUPPLEMENTARY {
        assert_eq!(word, word.to_lowercase());
        assert!(is_supplementary(word));
    }
    assert_eq!(SUPPLEMENTARY.len(), 17);
}

// Text normalization — strips noise before keyword extraction.
//
// Pasted show notes and episode descriptions are full of links, contact
// addresses, leftover markup and emoji. None of it makes a useful keyword,
// so each kind is replaced with a single space, then whitespace is collapsed.
// The passes run in a fixed order: a later pattern must never re-match text
// an earlier one already elided.

use std::sync::LazyLock;

use regex::Regex;

// Whitespace is Unicode White_Space plus the ASCII separators \x1C-\x1F, so a
// token ends at a non-breaking space the same as at a plain one.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:http|www|https)[^\s\x1C-\x1F]+").expect("valid URL pattern")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\s\x1C-\x1F]+@[^\s\x1C-\x1F]+").expect("valid email pattern")
});

// (?s) so a tag broken across lines is still one tag. Otherwise collapsing
// the newline would expose a fresh tag on a second pass.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("valid tag pattern"));

static NON_ASCII_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x00-\x7F]+").expect("valid non-ASCII pattern"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1C-\x1F]+").expect("valid whitespace pattern"));

/// Normalize raw input text.
///
/// Removes, in order: URL-like runs, email-like runs, HTML-like tags, and
/// any run of non-ASCII characters (a coarse emoji filter that also drops
/// accented words). Whitespace runs become a single space and the result is
/// trimmed. Total over all inputs; `""` maps to `""`.
pub fn normalize(text: &str) -> String {
    let text = URL_RE.replace_all(text, " ");
    let text = EMAIL_RE.replace_all(&text, " ");
    let text = TAG_RE.replace_all(&text, " ");
    let text = NON_ASCII_RE.replace_all(&text, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Force compilation of every pattern. Called once at startup so the first
/// request doesn't pay for it.
pub fn warm_up() {
    LazyLock::force(&URL_RE);
    LazyLock::force(&EMAIL_RE);
    LazyLock::force(&TAG_RE);
    LazyLock::force(&NON_ASCII_RE);
    LazyLock::force(&WHITESPACE_RE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_strips_urls() {
        assert_eq!(
            normalize("listen at https://example.com/ep1 today"),
            "listen at today"
        );
        assert_eq!(normalize("see www.example.org now"), "see now");
    }

    #[test]
    fn test_bare_http_word_survives() {
        // The URL pattern needs at least one character after the prefix
        assert_eq!(normalize("plain http"), "plain http");
    }

    #[test]
    fn test_strips_emails() {
        assert_eq!(normalize("write to host@show.fm please"), "write to please");
    }

    #[test]
    fn test_strips_tags() {
        assert_eq!(normalize("<p>Episode</p> <b>one</b>"), "Episode one");
    }

    #[test]
    fn test_tag_across_newline() {
        assert_eq!(normalize("a <span\nclass=\"x\"> b"), "a b");
    }

    #[test]
    fn test_strips_non_ascii() {
        assert_eq!(normalize("great 🎧🎙 show"), "great show");
        // Accepted limitation: accented words lose their accented letters
        assert_eq!(normalize("café noir"), "caf noir");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  one\t\ttwo \n\n three  "), "one two three");
    }

    #[test]
    fn test_link_ends_at_unicode_whitespace() {
        assert_eq!(
            normalize("visit https://x.com\u{a0}mystery tonight"),
            "visit mystery tonight"
        );
    }

    #[test]
    fn test_ascii_separators_are_whitespace() {
        assert_eq!(normalize("one\x1ctwo\x1fthree"), "one two three");
    }

    #[test]
    fn test_url_removed_before_email() {
        // The whole link goes in the URL pass, leaving nothing for the email pass
        assert_eq!(normalize("x http://a.b/@c y"), "x y");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "Hello   world",
            "<a\nhref='x'>link</a> text",
            "mail me: a@b.c 🎉 or visit https://x.y",
            "tabs\tand\r\nnewlines",
            "<<nested>> tags>",
            "wwwhat is this",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}

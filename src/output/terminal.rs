// Colored terminal output for keyword lists and suggestion batches.

use colored::Colorize;

use super::truncate_chars;

/// Longest input preview shown above results.
const PREVIEW_CHARS: usize = 80;

/// Display the extracted keyword sequence, numbered in order of appearance.
pub fn display_keywords(keywords: &[String], strategy: &str) {
    println!(
        "\n{}",
        format!("=== Keywords ({}, {} strategy) ===", keywords.len(), strategy).bold()
    );
    if keywords.is_empty() {
        println!("  {}", "No keywords found.".dimmed());
        return;
    }
    for (i, keyword) in keywords.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, keyword.cyan());
    }
}

/// Display a batch of phrases under a heading.
pub fn display_phrases(heading: &str, input: &str, phrases: &[String]) {
    println!("\n{}", format!("=== {heading} ===").bold());
    println!("  {}", truncate_chars(input.trim(), PREVIEW_CHARS).dimmed());
    println!();
    if phrases.is_empty() {
        println!("  {}", "No results".dimmed());
        return;
    }
    for phrase in phrases {
        println!("  • {}", phrase.green());
    }
    println!();
    println!("  {}", format!("{} phrases", phrases.len()).dimmed());
}

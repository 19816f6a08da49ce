//! Slug, excerpt and reading-time helpers

use std::sync::LazyLock;

use regex::Regex;

/// Default excerpt length in characters
pub const DEFAULT_EXCERPT_LENGTH: usize = 160;

const WORDS_PER_MINUTE: usize = 200;

#[allow(clippy::expect_used)]
static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_\s-]").expect("compile regex"));

#[allow(clippy::expect_used)]
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("compile regex"));

#[allow(clippy::expect_used)]
static HTML_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("compile regex"));

/// Derive a URL slug from a title
///
/// Lowercases, keeps ASCII word characters, and joins words with single
/// hyphens. May return an empty string for titles with no usable characters.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    let joined = SEPARATOR_RUNS.replace_all(&kept, "-");
    joined.trim_matches('-').to_string()
}

/// Remove HTML tags, leaving the text content
pub fn strip_html(content: &str) -> String {
    HTML_TAGS.replace_all(content, "").into_owned()
}

/// Plain-text excerpt of rich content, at most `max_len` characters plus `...`
///
/// Cuts back to the last space inside the limit when there is one.
pub fn generate_excerpt(content: &str, max_len: usize) -> String {
    let text = strip_html(content);
    if text.chars().count() <= max_len {
        return text;
    }

    let cut = text
        .char_indices()
        .nth(max_len)
        .map_or(text.len(), |(idx, _)| idx);
    let truncated = &text[..cut];

    match truncated.rfind(' ') {
        Some(space) if space > 0 => format!("{}...", &truncated[..space]),
        _ => format!("{truncated}..."),
    }
}

/// Estimated reading time in whole minutes, never less than one
pub fn reading_time(content: &str) -> u32 {
    let words = strip_html(content).split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_basic() {
        assert_eq!(generate_slug("Hello World"), "hello-world");
        assert_eq!(generate_slug("  Rust & Axum: A Tour!  "), "rust-axum-a-tour");
    }

    #[test]
    fn test_slug_collapses_separators() {
        assert_eq!(generate_slug("snake_case -- and   spaces"), "snake-case-and-spaces");
        assert_eq!(generate_slug("--leading and trailing--"), "leading-and-trailing");
    }

    #[test]
    fn test_slug_drops_non_ascii() {
        assert_eq!(generate_slug("Café Crème 2024"), "caf-crme-2024");
    }

    #[test]
    fn test_slug_can_be_empty() {
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(generate_slug(""), "");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <strong>there</strong></p>"), "Hello there");
    }

    #[test]
    fn test_excerpt_short_content_untouched() {
        assert_eq!(generate_excerpt("<p>Short post</p>", 160), "Short post");
    }

    #[test]
    fn test_excerpt_cuts_at_word_boundary() {
        let content = "one two three four five";
        assert_eq!(generate_excerpt(content, 10), "one two...");
    }

    #[test]
    fn test_excerpt_hard_cut_without_spaces() {
        assert_eq!(generate_excerpt("abcdefghijklmnop", 5), "abcde...");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let content = "ééééé ééééé";
        assert_eq!(generate_excerpt(content, 8), "ééééé...");
    }

    #[test]
    fn test_excerpt_length_bound() {
        let content = "word ".repeat(100);
        let excerpt = generate_excerpt(&content, DEFAULT_EXCERPT_LENGTH);
        assert!(excerpt.chars().count() <= DEFAULT_EXCERPT_LENGTH + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time("<p>just a few words</p>"), 1);
        assert_eq!(reading_time(&"word ".repeat(200)), 1);
        assert_eq!(reading_time(&"word ".repeat(201)), 2);
        assert_eq!(reading_time(&"word ".repeat(1000)), 5);
    }
}

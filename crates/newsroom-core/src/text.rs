//! Text processing utilities.
//!
//! Small counting helpers for article drafts: words, sentences, paragraphs,
//! and the markdown markers (headings, images, links) that feed the content
//! score. Every function is total over `&str`.

use regex::Regex;
use std::sync::LazyLock;

/// Blank-line paragraph separator (a newline, optional whitespace, a newline).
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Markdown ATX heading marker at the start of a line.
static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s").expect("valid regex"));

/// Markdown image: `![alt](url)`.
static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("valid regex"));

/// Markdown link: `[text](url)`. Also matches the tail of every image.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\(.*?\)").expect("valid regex"));

/// Split text into whitespace-delimited tokens, punctuation included.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences on runs of `.`, `!` or `?`.
///
/// Fragments that are empty once trimmed are dropped, so `"Wait... what?!"`
/// yields two sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(is_sentence_terminator)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Split text into paragraphs separated by blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// Count whitespace-delimited words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count sentences.
pub fn count_sentences(text: &str) -> usize {
    split_sentences(text).len()
}

/// Count paragraphs.
pub fn count_paragraphs(text: &str) -> usize {
    split_paragraphs(text).len()
}

/// Count markdown heading markers (`#` through `######` followed by whitespace).
pub fn count_headings(text: &str) -> usize {
    HEADING_MARKER.find_iter(text).count()
}

/// Count markdown images.
pub fn count_images(text: &str) -> usize {
    IMAGE_PATTERN.find_iter(text).count()
}

/// Count markdown links.
///
/// Images are counted here as well, since `![alt](url)` contains `[alt](url)`.
pub fn count_links(text: &str) -> usize {
    LINK_PATTERN.find_iter(text).count()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

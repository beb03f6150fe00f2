//! Content analysis: structural metrics, readability, sentiment, and the
//! composite content score.
//!
//! [`analyze`] is a pure function of its input. It never fails; empty or
//! whitespace-only drafts produce zeroed metrics and a score of 0.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::{self, ReadabilityMetrics};
use crate::sentiment::{self, Sentiment};
use crate::text;

/// Highest possible content score.
pub const MAX_CONTENT_SCORE: u8 = 100;

/// A draft as handed over by the editor.
///
/// Only `content` is scored. `title` and `category` travel with the draft
/// for logging and do not influence any metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisInput {
    /// Article body (markdown).
    pub content: String,
    /// Article headline.
    #[serde(default)]
    pub title: String,
    /// Section the article is filed under.
    #[serde(default)]
    pub category: String,
}

/// Full output of a content analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContentMetrics {
    /// Whitespace-delimited words.
    pub word_count: usize,
    /// Blank-line separated paragraphs.
    pub paragraph_count: usize,
    /// Sentences split on `.`, `!` and `?`.
    pub sentence_count: usize,
    /// Markdown heading markers.
    pub heading_count: usize,
    /// Markdown images.
    pub image_count: usize,
    /// Markdown links (images included).
    pub link_count: usize,
    /// Readability report.
    pub readability: ReadabilityMetrics,
    /// Keyword sentiment.
    pub sentiment: Sentiment,
    /// Composite publish-readiness score (0--100).
    pub content_score: u8,
}

/// Analyze an article body.
#[tracing::instrument(skip(content), fields(content_len = content.len()))]
pub fn analyze(content: &str) -> ContentMetrics {
    let readability = readability::check_readability(content);

    if content.trim().is_empty() {
        tracing::debug!("empty content, skipping scoring");
        return ContentMetrics {
            word_count: 0,
            paragraph_count: 0,
            sentence_count: 0,
            heading_count: 0,
            image_count: 0,
            link_count: 0,
            readability,
            sentiment: Sentiment::Neutral,
            content_score: 0,
        };
    }

    let mut metrics = ContentMetrics {
        word_count: text::count_words(content),
        paragraph_count: text::count_paragraphs(content),
        sentence_count: text::count_sentences(content),
        heading_count: text::count_headings(content),
        image_count: text::count_images(content),
        link_count: text::count_links(content),
        readability,
        sentiment: sentiment::classify(content),
        content_score: 0,
    };
    metrics.content_score = content_score(&metrics);

    tracing::debug!(
        word_count = metrics.word_count,
        flesch = metrics.readability.flesch_score,
        content_score = metrics.content_score,
        "content analyzed"
    );
    metrics
}

/// Analyze a draft, logging its title and category alongside the result.
#[tracing::instrument(skip(input), fields(title = %input.title, category = %input.category))]
pub fn analyze_input(input: &AnalysisInput) -> ContentMetrics {
    analyze(&input.content)
}

/// Composite content score.
///
/// Each signal awards at most one tier; the sum is capped at 100:
///
/// | Signal     | Tiers                                     |
/// |------------|-------------------------------------------|
/// | Words      | 1000--2000: 25, ≥ 500: 15, ≥ 300: 10      |
/// | Headings   | ≥ 3: 20, ≥ 1: 10                          |
/// | Flesch     | 60--80: 20, ≥ 50: 15                      |
/// | Images     | ≥ 2: 15, ≥ 1: 10                          |
/// | Links      | ≥ 3: 10, ≥ 1: 5                           |
/// | Paragraphs | ≥ 5: 10                                   |
pub fn content_score(metrics: &ContentMetrics) -> u8 {
    let words = match metrics.word_count {
        1000..=2000 => 25,
        n if n >= 500 => 15,
        n if n >= 300 => 10,
        _ => 0,
    };

    let headings = match metrics.heading_count {
        n if n >= 3 => 20,
        n if n >= 1 => 10,
        _ => 0,
    };

    let flesch = metrics.readability.flesch_score;
    let readability = if (60.0..=80.0).contains(&flesch) {
        20
    } else if flesch >= 50.0 {
        15
    } else {
        0
    };

    let images = match metrics.image_count {
        n if n >= 2 => 15,
        n if n >= 1 => 10,
        _ => 0,
    };

    let links = match metrics.link_count {
        n if n >= 3 => 10,
        n if n >= 1 => 5,
        _ => 0,
    };

    let paragraphs = if metrics.paragraph_count >= 5 { 10 } else { 0 };

    let total: u32 = words + headings + readability + images + links + paragraphs;
    total.min(u32::from(MAX_CONTENT_SCORE)) as u8
}

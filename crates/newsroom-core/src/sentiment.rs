//! Keyword-based sentiment labelling.
//!
//! Counts whole-token hits against two fixed word lists. Tokens are split on
//! whitespace only, so `"great."` does not match `great`.

use std::collections::HashSet;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Words that push an article towards a positive label.
pub static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good",
        "great",
        "excellent",
        "amazing",
        "wonderful",
        "fantastic",
        "success",
        "win",
        "victory",
        "achievement",
    ]
    .into_iter()
    .collect()
});

/// Words that push an article towards a negative label.
pub static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bad", "terrible", "awful", "horrible", "disaster", "crisis", "problem", "issue",
        "concern", "worry",
    ]
    .into_iter()
    .collect()
});

/// Overall tone of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// More positive than negative keywords.
    Positive,
    /// More negative than positive keywords.
    Negative,
    /// A tie, including no keywords at all.
    Neutral,
}

impl Sentiment {
    /// Returns the label as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the sentiment of `text`.
pub fn classify(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let (positive, negative) =
        lowered
            .split_whitespace()
            .fold((0usize, 0usize), |(pos, neg), word| {
                if POSITIVE_WORDS.contains(word) {
                    (pos + 1, neg)
                } else if NEGATIVE_WORDS.contains(word) {
                    (pos, neg + 1)
                } else {
                    (pos, neg)
                }
            });

    tracing::trace!(positive, negative, "sentiment keywords counted");

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

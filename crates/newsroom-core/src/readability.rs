//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier to read. News copy usually lands between 60 and 80.
//! Both ratios fall back to 0 when their denominator is 0, so the score is
//! always finite.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables::count_syllables;
use crate::text;

/// Reading speed used for reading-time estimates, in words per minute.
pub const WORDS_PER_MINUTE: usize = 200;

/// Words longer than this (in characters) may be difficult.
const DIFFICULT_MIN_LEN: usize = 6;

/// Words with more syllables than this may be difficult.
const DIFFICULT_MIN_SYLLABLES: usize = 2;

/// Categorical reading level derived from the Flesch score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingLevel {
    /// 90 and above.
    VeryEasy,
    /// 80 to below 90.
    Easy,
    /// 70 to below 80.
    FairlyEasy,
    /// 60 to below 70.
    Standard,
    /// 50 to below 60.
    FairlyDifficult,
    /// 30 to below 50.
    Difficult,
    /// Below 30.
    VeryDifficult,
}

impl ReadingLevel {
    /// Bucket a Flesch score. Thresholds are inclusive lower bounds.
    ///
    /// Anything that fails every comparison (including NaN) is
    /// [`ReadingLevel::VeryDifficult`].
    pub fn from_flesch(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityMetrics {
    /// Flesch Reading Ease, rounded to a whole number.
    pub flesch_score: f64,
    /// Flesch Reading Ease before rounding.
    pub flesch_raw: f64,
    /// Words per sentence, rounded to one decimal place.
    pub avg_sentence_length: f64,
    /// Words longer than six characters with three or more syllables.
    pub difficult_words: usize,
    /// Reading level bucket for `flesch_score`.
    pub reading_level: ReadingLevel,
    /// Estimated reading time at 200 words per minute.
    pub reading_time_minutes: usize,
}

/// Score readability of `text` with Flesch Reading Ease.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(text: &str) -> ReadabilityMetrics {
    let words = text::split_words(text);
    let word_count = words.len();
    let sentence_count = text::count_sentences(text);

    let mut syllables = 0;
    let mut difficult_words = 0;
    for word in &words {
        let count = count_syllables(word);
        syllables += count;
        if word.chars().count() > DIFFICULT_MIN_LEN && count > DIFFICULT_MIN_SYLLABLES {
            difficult_words += 1;
        }
    }

    let avg_sentence_length = ratio(word_count, sentence_count);
    let avg_syllables_per_word = ratio(syllables, word_count);
    let flesch_raw = flesch_reading_ease(avg_sentence_length, avg_syllables_per_word);
    let flesch_score = round_half_up(flesch_raw);

    tracing::debug!(
        word_count,
        sentence_count,
        syllables,
        flesch_raw,
        "readability computed"
    );

    ReadabilityMetrics {
        flesch_score,
        flesch_raw,
        avg_sentence_length: round_half_up(avg_sentence_length * 10.0) / 10.0,
        difficult_words,
        reading_level: ReadingLevel::from_flesch(flesch_score),
        reading_time_minutes: reading_time_minutes(word_count),
    }
}

/// Flesch Reading Ease from its two ratios.
pub fn flesch_reading_ease(avg_sentence_length: f64, avg_syllables_per_word: f64) -> f64 {
    84.6f64.mul_add(
        -avg_syllables_per_word,
        1.015f64.mul_add(-avg_sentence_length, 206.835),
    )
}

/// Minutes needed to read `word_count` words, rounded up.
pub const fn reading_time_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

/// `numerator / denominator`, or 0 when the denominator is 0.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Round to the nearest integer with halves going up (`-2.5` → `-2`).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_text_is_easy() {
        let report = check_readability("The cat sat on the mat. The dog ran fast.");
        assert!(report.flesch_score >= 90.0);
        assert_eq!(report.reading_level, ReadingLevel::VeryEasy);
        assert_eq!(report.avg_sentence_length, 5.0);
        assert_eq!(report.difficult_words, 0);
        assert_eq!(report.reading_time_minutes, 1);
    }

    #[test]
    fn dense_text_is_difficult() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols that facilitated the dissemination of \
                    procedural documentation.";
        let report = check_readability(text);
        assert_eq!(report.reading_level, ReadingLevel::VeryDifficult);
        assert!(report.difficult_words >= 8);
    }

    #[test]
    fn difficult_words_need_length_and_syllables() {
        // six letters, three syllables
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(check_readability("banana").difficult_words, 0);
        // seven letters, two syllables
        assert_eq!(count_syllables("reading"), 2);
        assert_eq!(check_readability("reading").difficult_words, 0);
        // seven letters, three syllables
        assert_eq!(count_syllables("bananas"), 3);
        assert_eq!(check_readability("bananas").difficult_words, 1);

        assert_eq!(
            check_readability("banana reading bananas").difficult_words,
            1
        );
    }

    #[test]
    fn attached_punctuation_counts_toward_length() {
        assert_eq!(check_readability("banana.").difficult_words, 1);
    }

    #[test]
    fn empty_text_uses_zero_ratios() {
        let report = check_readability("");
        assert!((report.flesch_raw - 206.835).abs() < 1e-9);
        assert_eq!(report.flesch_score, 207.0);
        assert_eq!(report.avg_sentence_length, 0.0);
        assert_eq!(report.reading_level, ReadingLevel::VeryEasy);
        assert_eq!(report.reading_time_minutes, 0);
    }

    #[test]
    fn punctuation_only_has_no_sentences() {
        let report = check_readability("...");
        assert!(report.flesch_raw.is_finite());
        assert_eq!(report.avg_sentence_length, 0.0);
    }

    #[test]
    fn average_sentence_length_rounds_to_one_decimal() {
        // 7 words over 3 sentences = 2.333...
        let report = check_readability("One two. Three four. Five six seven.");
        assert_eq!(report.avg_sentence_length, 2.3);
    }

    #[test]
    fn reading_level_boundaries() {
        assert_eq!(ReadingLevel::from_flesch(90.0), ReadingLevel::VeryEasy);
        assert_eq!(ReadingLevel::from_flesch(89.999), ReadingLevel::Easy);
        assert_eq!(ReadingLevel::from_flesch(80.0), ReadingLevel::Easy);
        assert_eq!(ReadingLevel::from_flesch(70.0), ReadingLevel::FairlyEasy);
        assert_eq!(ReadingLevel::from_flesch(60.0), ReadingLevel::Standard);
        assert_eq!(ReadingLevel::from_flesch(50.0), ReadingLevel::FairlyDifficult);
        assert_eq!(ReadingLevel::from_flesch(30.0), ReadingLevel::Difficult);
        assert_eq!(ReadingLevel::from_flesch(29.0), ReadingLevel::VeryDifficult);
        assert_eq!(ReadingLevel::from_flesch(-500.0), ReadingLevel::VeryDifficult);
        assert_eq!(ReadingLevel::from_flesch(f64::NAN), ReadingLevel::VeryDifficult);
    }

    #[test]
    fn reading_level_labels() {
        assert_eq!(ReadingLevel::VeryEasy.to_string(), "Very Easy");
        assert_eq!(ReadingLevel::FairlyDifficult.as_str(), "Fairly Difficult");
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(0), 0);
        assert_eq!(reading_time_minutes(1), 1);
        assert_eq!(reading_time_minutes(200), 1);
        assert_eq!(reading_time_minutes(201), 2);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(64.49), 64.0);
    }
}

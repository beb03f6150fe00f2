//! Heuristic syllable counting.
//!
//! A vowel-group estimate: drop a silent trailing `e`/`es`/`ed`, drop a
//! leading `y`, then count runs of one or two vowels. Every word has at least
//! one syllable.

use regex::Regex;
use std::sync::LazyLock;

/// Silent suffixes removed before counting vowel groups.
static SILENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid regex"));

/// A leading `y` acts as a consonant.
static LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").expect("valid regex"));

/// One or two adjacent vowels form one syllable.
static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Count syllables in a single word.
///
/// Words of three characters or fewer always count as one syllable.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let stripped = SILENT_SUFFIX.replace(&word, "");
    let stripped = LEADING_Y.replace(&stripped, "");

    match VOWEL_GROUP.find_iter(&stripped).count() {
        0 => 1,
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_one_syllable() {
        for word in ["the", "a", "is", "sky", "I", ""] {
            assert_eq!(count_syllables(word), 1, "{word}");
        }
    }

    #[test]
    fn vowel_groups() {
        assert_eq!(count_syllables("garden"), 2);
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("reading"), 2);
    }

    #[test]
    fn silent_e_is_dropped() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("stone"), 1);
    }

    #[test]
    fn silent_es_is_dropped() {
        assert_eq!(count_syllables("horses"), 1);
        assert_eq!(count_syllables("boxes"), 1);
        // `l` before `es` keeps the vowel
        assert_eq!(count_syllables("tables"), 2);
    }

    #[test]
    fn ed_suffix_is_dropped() {
        assert_eq!(count_syllables("jumped"), 1);
    }

    #[test]
    fn leading_y_is_a_consonant() {
        assert_eq!(count_syllables("yellow"), 2);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(count_syllables("GARDEN"), count_syllables("garden"));
    }

    #[test]
    fn wonderful_is_stable_and_plausible() {
        let first = count_syllables("wonderful");
        assert!((2..=4).contains(&first));
        assert_eq!(first, count_syllables("wonderful"));
    }

    #[test]
    fn no_vowels_counts_as_one() {
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("1234567"), 1);
    }
}

//! Vowel-group syllable estimation.
//!
//! A word's syllables are approximated by counting groups of one or two
//! vowels after trimming endings that are usually silent (`-es`, `-ed`,
//! trailing `e`). Every word counts as at least one syllable.

use std::sync::LazyLock;

use regex::Regex;

/// Silent endings: consonant + "es", "ed", consonant + "e".
static SILENT_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid regex"));

/// A leading "y" acts as a consonant.
static LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").expect("valid regex"));

/// One or two adjacent vowels form a group.
static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Estimate the syllable count of a single word.
pub fn count_syllables(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if letters.len() <= 3 {
        return 1;
    }

    let trimmed = SILENT_ENDING.replace(&letters, "");
    let trimmed = LEADING_Y.replace(&trimmed, "");
    VOWEL_GROUP.find_iter(&trimmed).count().max(1)
}

/// Total syllables across a list of words.
pub fn total_syllables<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| count_syllables(w.as_ref())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_one_syllable() {
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables(""), 1);
    }

    #[test]
    fn vowel_groups_are_counted() {
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("window"), 2);
        assert_eq!(count_syllables("banana"), 3);
    }

    #[test]
    fn silent_endings_are_trimmed() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("jumped"), 1);
        assert_eq!(count_syllables("boxes"), 1);
    }

    #[test]
    fn leading_y_is_ignored() {
        assert_eq!(count_syllables("yellow"), 2);
    }

    #[test]
    fn punctuation_and_case_ignored() {
        assert_eq!(count_syllables("Hello,"), count_syllables("hello"));
    }

    #[test]
    fn total_sums_words() {
        assert_eq!(total_syllables(&["hello", "cat"]), 3);
    }
}

//! Key-idea sentence extraction.
//!
//! One extractor serves both the enhanced analysis (key insights) and the
//! fallback synthesizer (key points). The two differ only in their length
//! window, score threshold, result limit and weight table.

use std::collections::HashSet;
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use super::reports::KeyInsight;
use crate::clarity::{count_whole_word_hits, whole_word_matcher};
use crate::text;
use crate::word_lists::{COMPARATIVE_MARKERS, IMPERATIVE_MARKERS, INDICATOR_WORDS};

static COMPARATIVE_MATCHER: LazyLock<AhoCorasick> =
    LazyLock::new(|| whole_word_matcher(COMPARATIVE_MARKERS));

/// Sentences taken when nothing scores, for key points.
const FALLBACK_SENTENCES: usize = 3;

/// Points awarded per scoring signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorWeights {
    /// Per distinct indicator word.
    pub per_indicator: u32,
    /// For any digit in the sentence.
    pub numeric: u32,
    /// For imperative or actionable phrasing.
    pub imperative: u32,
    /// For comparative phrasing.
    pub comparative: u32,
}

/// Parameterized sentence ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPointExtractor {
    /// Shortest sentence kept, in characters.
    pub min_chars: usize,
    /// Longest sentence kept, in characters.
    pub max_chars: usize,
    /// A sentence must score strictly above this.
    pub threshold: u32,
    /// Maximum sentences returned.
    pub limit: usize,
    /// Signal weights.
    pub weights: ExtractorWeights,
}

/// Extractor for the enhanced analysis.
pub const INSIGHT_EXTRACTOR: KeyPointExtractor = KeyPointExtractor {
    min_chars: 0,
    max_chars: 200,
    threshold: 2,
    limit: 8,
    weights: ExtractorWeights {
        per_indicator: 2,
        numeric: 2,
        imperative: 2,
        comparative: 1,
    },
};

/// Extractor for synthesized content.
pub const KEY_POINT_EXTRACTOR: KeyPointExtractor = KeyPointExtractor {
    min_chars: 20,
    max_chars: 150,
    threshold: 1,
    limit: 6,
    weights: ExtractorWeights {
        per_indicator: 2,
        numeric: 2,
        imperative: 2,
        comparative: 0,
    },
};

impl KeyPointExtractor {
    /// Score one sentence.
    pub fn score(&self, sentence: &str) -> u32 {
        let lower = sentence.to_lowercase();
        let words: HashSet<String> = text::extract_words(&lower).into_iter().collect();
        let w = &self.weights;

        let indicators = INDICATOR_WORDS
            .iter()
            .filter(|word| words.contains(**word))
            .count() as u32;
        let mut score = indicators * w.per_indicator;

        if lower.chars().any(|c| c.is_ascii_digit()) {
            score += w.numeric;
        }
        if is_imperative(&lower) {
            score += w.imperative;
        }
        if w.comparative > 0 && count_whole_word_hits(&COMPARATIVE_MATCHER, &lower) > 0 {
            score += w.comparative;
        }
        score
    }

    /// Rank sentences by score, highest first; ties keep source order.
    pub fn extract(&self, text: &str) -> Vec<KeyInsight> {
        let mut ranked: Vec<KeyInsight> = text::split_sentences_keep_terminators(text)
            .into_iter()
            .filter(|s| self.fits(s))
            .filter_map(|s| {
                let score = self.score(&s);
                (score > self.threshold).then_some(KeyInsight { text: s, score })
            })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(self.limit);
        ranked
    }

    fn fits(&self, sentence: &str) -> bool {
        let len = sentence.chars().count();
        len >= self.min_chars && len <= self.max_chars
    }
}

/// Top insight sentences for the enhanced analysis.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn extract_key_insights(text: &str) -> Vec<KeyInsight> {
    INSIGHT_EXTRACTOR.extract(text)
}

/// Key points for synthesized content.
///
/// When no sentence scores, the first sentences that fit the length window
/// stand in, then the first sentences of any length, truncated.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn extract_key_points(text: &str) -> Vec<String> {
    key_points(text, None)
}

/// Key points that leave out the opening sentence.
///
/// For layouts that already lead with the first sentence as their theme.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn extract_key_points_after_opener(text: &str) -> Vec<String> {
    let opener = text::split_sentences_keep_terminators(text).into_iter().next();
    key_points(text, opener.as_deref())
}

fn key_points(text: &str, skip: Option<&str>) -> Vec<String> {
    let kept = |s: &String| skip != Some(s.as_str());

    let ranked: Vec<String> = KEY_POINT_EXTRACTOR
        .extract(text)
        .into_iter()
        .map(|k| k.text)
        .filter(kept)
        .collect();
    if !ranked.is_empty() {
        return ranked;
    }

    let sentences: Vec<String> = text::split_sentences_keep_terminators(text)
        .into_iter()
        .filter(kept)
        .collect();
    let fitting: Vec<String> = sentences
        .iter()
        .filter(|s| KEY_POINT_EXTRACTOR.fits(s))
        .take(FALLBACK_SENTENCES)
        .cloned()
        .collect();
    if !fitting.is_empty() {
        return fitting;
    }

    sentences
        .iter()
        .take(FALLBACK_SENTENCES)
        .map(|s| text::truncate(s, KEY_POINT_EXTRACTOR.max_chars))
        .collect()
}

fn is_imperative(lower: &str) -> bool {
    IMPERATIVE_MARKERS.iter().any(|marker| {
        if marker.starts_with("you ") {
            lower.contains(marker)
        } else {
            starts_with_word(lower, marker)
        }
    })
}

fn starts_with_word(haystack: &str, word: &str) -> bool {
    haystack.strip_prefix(word).is_some_and(|rest| {
        !rest
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '\'')
    })
}

//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier to read. Scores are clamped to 0–100 and degenerate
//! input (no words or no sentences) scores 0.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables;
use crate::text;

/// Reading level bands derived from the Flesch score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ReadingLevel {
    /// 90 and above.
    #[serde(rename = "Very Easy")]
    VeryEasy,
    /// 80–89.
    #[serde(rename = "Easy")]
    Easy,
    /// 70–79.
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    /// 60–69.
    #[serde(rename = "Standard")]
    Standard,
    /// 50–59.
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    /// 30–49.
    #[serde(rename = "Difficult")]
    Difficult,
    /// Below 30.
    #[default]
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

/// Lower bounds of each reading level, highest first.
const LEVEL_THRESHOLDS: &[(f64, ReadingLevel)] = &[
    (90.0, ReadingLevel::VeryEasy),
    (80.0, ReadingLevel::Easy),
    (70.0, ReadingLevel::FairlyEasy),
    (60.0, ReadingLevel::Standard),
    (50.0, ReadingLevel::FairlyDifficult),
    (30.0, ReadingLevel::Difficult),
];

impl ReadingLevel {
    /// Classify a Flesch Reading Ease score.
    pub fn from_score(score: f64) -> Self {
        LEVEL_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(Self::VeryDifficult, |(_, level)| *level)
    }

    /// Human-readable label, as shown in prompts and synthesized content.
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

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of readability analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    /// Flesch Reading Ease, clamped to 0–100.
    pub flesch_score: f64,
    /// Reading level band for the score.
    pub reading_level: ReadingLevel,
    /// Average words per sentence (0 when there are no sentences).
    pub avg_words_per_sentence: f64,
    /// Average syllables per word (0 when there are no words).
    pub avg_syllables_per_word: f64,
}

/// Score readability of text using Flesch Reading Ease.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_readability(text: &str) -> ReadabilityReport {
    let sentences = text::split_sentences(text).len();
    let words = text::split_words(text);
    let word_count = words.len();

    if sentences == 0 || word_count == 0 {
        return ReadabilityReport {
            flesch_score: 0.0,
            reading_level: ReadingLevel::from_score(0.0),
            avg_words_per_sentence: 0.0,
            avg_syllables_per_word: 0.0,
        };
    }

    let syllables = syllables::total_syllables(&words);
    let words_per_sentence = word_count as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / word_count as f64;
    let raw = 1.015f64.mul_add(-words_per_sentence, 206.835) - 84.6 * syllables_per_word;
    let flesch_score = round1(raw.clamp(0.0, 100.0));

    ReadabilityReport {
        flesch_score,
        reading_level: ReadingLevel::from_score(flesch_score),
        avg_words_per_sentence: round1(words_per_sentence),
        avg_syllables_per_word: round2(syllables_per_word),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

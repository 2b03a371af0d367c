//! Engagement scoring.
//!
//! Additive heuristic: start from a neutral base and add bounded increments
//! for lexical signals that tend to prompt reader interaction. Every rule
//! either records a factor (it fired) or a suggestion (it did not).

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;
use crate::word_lists::{ACTION_VERBS, EMOTIONAL_WORDS, FIRST_PERSON};

/// Numbers, decimals and percentages ("10", "3.5", "40%").
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)?%?").expect("valid regex"));

/// Scoring weights for the engagement model.
#[derive(Debug, Clone, Copy)]
pub struct EngagementWeights {
    /// Starting score.
    pub base: f64,
    /// Bonus when the text asks a question.
    pub question: f64,
    /// Bonus per emotional word.
    pub per_emotional_word: f64,
    /// Cap on the emotional-word bonus.
    pub emotional_cap: f64,
    /// Bonus per number or percentage.
    pub per_number: f64,
    /// Cap on the number bonus.
    pub number_cap: f64,
    /// Bonus per action verb.
    pub per_action_verb: f64,
    /// Cap on the action-verb bonus.
    pub action_cap: f64,
    /// Bonus for first-person voice.
    pub first_person: f64,
    /// Bonus when the word count sits in the optimal range.
    pub optimal_length: f64,
    /// Inclusive optimal word-count range.
    pub optimal_words: (usize, usize),
}

/// Default engagement weights.
pub const ENGAGEMENT_WEIGHTS: EngagementWeights = EngagementWeights {
    base: 50.0,
    question: 10.0,
    per_emotional_word: 5.0,
    emotional_cap: 20.0,
    per_number: 3.0,
    number_cap: 15.0,
    per_action_verb: 4.0,
    action_cap: 16.0,
    first_person: 8.0,
    optimal_length: 5.0,
    optimal_words: (100, 1000),
};

/// Result of engagement scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EngagementReport {
    /// Engagement score, 0–100.
    pub score: f64,
    /// Signals that raised the score, in rule order.
    pub factors: Vec<String>,
    /// Signals that were missing, in rule order.
    pub suggestions: Vec<String>,
}

/// Score how likely the text is to prompt reader interaction.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_engagement(text: &str) -> EngagementReport {
    score_engagement(text, &ENGAGEMENT_WEIGHTS)
}

/// Score engagement with an explicit weight table.
pub fn score_engagement(text: &str, weights: &EngagementWeights) -> EngagementReport {
    let words = text::extract_words(text);
    let mut score = weights.base;
    let mut factors = Vec::new();
    let mut suggestions = Vec::new();

    if text.contains('?') {
        score += weights.question;
        factors.push("Contains engaging questions".to_string());
    } else {
        suggestions.push("Add a question to invite audience interaction".to_string());
    }

    let emotional = words
        .iter()
        .filter(|w| EMOTIONAL_WORDS.contains(w.as_str()))
        .count();
    if emotional > 0 {
        score += (emotional as f64 * weights.per_emotional_word).min(weights.emotional_cap);
        factors.push(format!("Uses emotional language ({emotional} emotional words)"));
    } else {
        suggestions.push("Use more emotionally resonant words".to_string());
    }

    let numbers = NUMERIC_TOKEN.find_iter(text).count();
    if numbers > 0 {
        score += (numbers as f64 * weights.per_number).min(weights.number_cap);
        factors.push(format!("Includes specific numbers or data ({numbers})"));
    } else {
        suggestions.push("Include specific numbers or statistics to add credibility".to_string());
    }

    let actions = words
        .iter()
        .filter(|w| ACTION_VERBS.contains(w.as_str()))
        .count();
    if actions > 0 {
        score += (actions as f64 * weights.per_action_verb).min(weights.action_cap);
        factors.push(format!("Uses action-oriented language ({actions} action verbs)"));
    } else {
        suggestions.push("Use action verbs to make the content more dynamic".to_string());
    }

    if words.iter().any(|w| FIRST_PERSON.contains(w.as_str())) {
        score += weights.first_person;
        factors.push("Personal perspective (first-person voice)".to_string());
    } else {
        suggestions.push("Share a personal perspective to build connection".to_string());
    }

    let word_count = text::split_words(text).len();
    let (min_words, max_words) = weights.optimal_words;
    if (min_words..=max_words).contains(&word_count) {
        score += weights.optimal_length;
        factors.push("Optimal length for engagement".to_string());
    } else if word_count < min_words {
        suggestions.push(format!(
            "Expand the content to at least {min_words} words for more depth"
        ));
    } else {
        suggestions.push(
            "Condense the content or split it into a series for easier consumption".to_string(),
        );
    }

    EngagementReport {
        score: score.clamp(0.0, 100.0),
        factors,
        suggestions,
    }
}

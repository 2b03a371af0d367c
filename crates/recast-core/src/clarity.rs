//! Clarity assessment.
//!
//! Starts from a base score, deducts for long sentences, heavy passive voice
//! and business jargon, and adds a reward for every transition-word hit.
//!
//! The transition reward has no cap, unlike the penalties. Long transition-heavy
//! texts can therefore climb to the ceiling; the final clamp keeps the score
//! in 0–100.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;
use crate::word_lists::{BUSINESS_JARGON, PASSIVE_MARKERS, TRANSITION_WORDS};

/// Scoring weights for the clarity model.
#[derive(Debug, Clone, Copy)]
pub struct ClarityWeights {
    /// Starting score.
    pub base: f64,
    /// Sentences longer than this many words are penalized.
    pub long_sentence_words: usize,
    /// Penalty per long sentence.
    pub per_long_sentence: f64,
    /// Passive markers tolerated before the penalty applies.
    pub passive_tolerance: usize,
    /// Flat penalty for heavy passive voice.
    pub passive_penalty: f64,
    /// Jargon hits tolerated before the penalty applies.
    pub jargon_tolerance: usize,
    /// Penalty per jargon hit once over tolerance.
    pub per_jargon: f64,
    /// Reward per transition hit.
    pub per_transition: f64,
}

/// Default clarity weights.
pub const CLARITY_WEIGHTS: ClarityWeights = ClarityWeights {
    base: 70.0,
    long_sentence_words: 25,
    per_long_sentence: 5.0,
    passive_tolerance: 3,
    passive_penalty: 10.0,
    jargon_tolerance: 2,
    per_jargon: 3.0,
    per_transition: 2.0,
};

static JARGON_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| whole_word_matcher(BUSINESS_JARGON));

static TRANSITION_MATCHER: LazyLock<AhoCorasick> =
    LazyLock::new(|| whole_word_matcher(TRANSITION_WORDS));

/// Result of clarity assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClarityReport {
    /// Clarity score, 0–100.
    pub score: f64,
    /// Problems found, one per penalty rule that fired.
    pub issues: Vec<String>,
    /// Fixes matching each issue, in the same order.
    pub improvements: Vec<String>,
}

/// Assess how easy the text is to parse.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_clarity(text: &str) -> ClarityReport {
    score_clarity(text, &CLARITY_WEIGHTS)
}

/// Assess clarity with an explicit weight table.
pub fn score_clarity(text: &str, weights: &ClarityWeights) -> ClarityReport {
    let mut score = weights.base;
    let mut issues = Vec::new();
    let mut improvements = Vec::new();

    let long_sentences = text::split_sentences(text)
        .iter()
        .filter(|s| text::split_words(s).len() > weights.long_sentence_words)
        .count();
    if long_sentences > 0 {
        score -= long_sentences as f64 * weights.per_long_sentence;
        issues.push(format!(
            "{long_sentences} sentence(s) longer than {} words",
            weights.long_sentence_words
        ));
        improvements.push("Break long sentences into shorter, punchier statements".to_string());
    }

    let words = text::extract_words(text);
    let passive = words
        .iter()
        .filter(|w| PASSIVE_MARKERS.contains(w.as_str()))
        .count();
    if passive > weights.passive_tolerance {
        score -= weights.passive_penalty;
        issues.push(format!("Frequent passive voice ({passive} markers)"));
        improvements.push("Rewrite passive constructions in active voice".to_string());
    }

    let lower = text.to_lowercase();
    let jargon = count_whole_word_hits(&JARGON_MATCHER, &lower);
    if jargon > weights.jargon_tolerance {
        score -= jargon as f64 * weights.per_jargon;
        issues.push(format!("Business jargon ({jargon} terms)"));
        improvements.push("Replace jargon with plain, specific language".to_string());
    }

    let transitions = count_whole_word_hits(&TRANSITION_MATCHER, &lower);
    score += transitions as f64 * weights.per_transition;

    ClarityReport {
        score: score.clamp(0.0, 100.0),
        issues,
        improvements,
    }
}

/// Build a case-sensitive, leftmost-longest matcher over lowercase patterns.
pub(crate) fn whole_word_matcher(patterns: &[&str]) -> AhoCorasick {
    AhoCorasickBuilder::new()
        .match_kind(MatchKind::LeftmostLongest)
        .build(patterns)
        .expect("static patterns build")
}

/// Matches that start and end on word boundaries.
pub(crate) fn whole_word_hits<'h>(
    matcher: &'h AhoCorasick,
    haystack: &'h str,
) -> impl Iterator<Item = aho_corasick::Match> + 'h {
    matcher
        .find_iter(haystack)
        .filter(move |m| is_word_boundary(haystack, m.start(), m.end()))
}

/// Count matches that start and end on word boundaries.
pub(crate) fn count_whole_word_hits(matcher: &AhoCorasick, haystack: &str) -> usize {
    whole_word_hits(matcher, haystack).count()
}

fn is_word_boundary(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_keeps_base() {
        let report = analyze_clarity("Short and clear. Nothing fancy here.");
        assert!((report.score - 70.0).abs() < f64::EPSILON);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn long_sentences_are_penalized() {
        let long = "word ".repeat(30);
        let text = format!("{long}. {long}.");
        let report = analyze_clarity(&text);
        assert!((report.score - 60.0).abs() < f64::EPSILON);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.improvements.len(), 1);
    }

    #[test]
    fn passive_penalty_needs_more_than_three_markers() {
        let three = "It was done. They were told. It had been said.";
        assert!(analyze_clarity(three).issues.is_empty());

        let four = "It was done. They were told. It had been said. It was being fixed.";
        let report = analyze_clarity(four);
        assert!(report.issues.iter().any(|i| i.contains("passive")));
    }

    #[test]
    fn jargon_beyond_tolerance_costs_per_hit() {
        let text = "We leverage synergy to disrupt the paradigm";
        let report = analyze_clarity(text);
        // 4 hits over a tolerance of 2: 70 - 12
        assert!((report.score - 58.0).abs() < f64::EPSILON);
    }

    #[test]
    fn jargon_needs_whole_words() {
        let report = analyze_clarity("The leverages and synergyish paradigms");
        assert!(report.issues.is_empty());
    }

    #[test]
    fn transition_reward_is_uncapped() {
        let text = "However, this. Therefore, that. Moreover, more. Furthermore, again. \
                    Additionally, yes. Consequently, so. Meanwhile, now. Nevertheless, still. \
                    Similarly, same. Finally, done. However, again. Therefore, again. \
                    Moreover, again. Furthermore, once more. Additionally, more.";
        let report = analyze_clarity(text);
        // 15 transitions: 70 + 30, only the final clamp applies.
        assert!((report.score - 100.0).abs() < f64::EPSILON);

        let ten = "However, a. Therefore, b. Moreover, c. Furthermore, d. Additionally, e. \
                   Consequently, f. Meanwhile, g. Nevertheless, h. Similarly, i. Finally, j.";
        assert!((analyze_clarity(ten).score - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_text_keeps_base() {
        let report = analyze_clarity("");
        assert!((report.score - 70.0).abs() < f64::EPSILON);
    }
}

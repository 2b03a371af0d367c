//! Transformation-readiness scoring.

use super::reports::TransformationReadiness;

/// Scoring weights for transformation readiness.
#[derive(Debug, Clone, Copy)]
pub struct ReadinessWeights {
    /// Starting score.
    pub base: f64,
    /// Bonus when at least `rich_insights` insights were found.
    pub insights_bonus: f64,
    /// Insight count that earns the bonus.
    pub rich_insights: usize,
    /// Bonus when engagement exceeds `engagement_threshold`.
    pub engagement_bonus: f64,
    /// Engagement score that must be exceeded.
    pub engagement_threshold: f64,
    /// Bonus when Flesch exceeds `flesch_threshold`.
    pub readability_bonus: f64,
    /// Flesch score that must be exceeded.
    pub flesch_threshold: f64,
    /// Bonus when any value proposition exists.
    pub value_prop_bonus: f64,
    /// Penalty when word count exceeds `long_words`.
    pub length_penalty: f64,
    /// Word count that triggers the length penalty.
    pub long_words: usize,
    /// Penalty when clarity is below `clarity_threshold`.
    pub clarity_penalty: f64,
    /// Clarity score under which the penalty applies.
    pub clarity_threshold: f64,
    /// Penalty when fewer than `sparse_insights` insights were found.
    pub sparse_insights_penalty: f64,
    /// Insight count under which the penalty applies.
    pub sparse_insights: usize,
}

/// Default readiness weights.
pub const READINESS_WEIGHTS: ReadinessWeights = ReadinessWeights {
    base: 50.0,
    insights_bonus: 15.0,
    rich_insights: 3,
    engagement_bonus: 10.0,
    engagement_threshold: 70.0,
    readability_bonus: 10.0,
    flesch_threshold: 60.0,
    value_prop_bonus: 10.0,
    length_penalty: 10.0,
    long_words: 2000,
    clarity_penalty: 15.0,
    clarity_threshold: 60.0,
    sparse_insights_penalty: 20.0,
    sparse_insights: 2,
};

/// Signals readiness is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadinessInputs {
    /// Number of key insights.
    pub insight_count: usize,
    /// Engagement score.
    pub engagement: f64,
    /// Flesch reading ease.
    pub flesch: f64,
    /// Whether any value proposition was found.
    pub has_value_props: bool,
    /// Word count.
    pub word_count: usize,
    /// Clarity score.
    pub clarity: f64,
}

/// Score how well the text will convert into short-form content.
pub fn score_readiness(
    inputs: &ReadinessInputs,
    weights: &ReadinessWeights,
) -> TransformationReadiness {
    let mut score = weights.base;
    let mut strengths = Vec::new();
    let mut challenges = Vec::new();

    if inputs.insight_count >= weights.rich_insights {
        score += weights.insights_bonus;
        strengths.push(format!("Rich in key insights ({})", inputs.insight_count));
    }
    if inputs.engagement > weights.engagement_threshold {
        score += weights.engagement_bonus;
        strengths.push("High engagement potential".to_string());
    }
    if inputs.flesch > weights.flesch_threshold {
        score += weights.readability_bonus;
        strengths.push("Easy to read".to_string());
    }
    if inputs.has_value_props {
        score += weights.value_prop_bonus;
        strengths.push("Clear value propositions".to_string());
    }

    if inputs.word_count > weights.long_words {
        score -= weights.length_penalty;
        challenges.push("Long content needs heavy condensing".to_string());
    }
    if inputs.clarity < weights.clarity_threshold {
        score -= weights.clarity_penalty;
        challenges.push("Clarity issues may not survive shortening".to_string());
    }
    if inputs.insight_count < weights.sparse_insights {
        score -= weights.sparse_insights_penalty;
        challenges.push("Few standout insights to build posts around".to_string());
    }

    TransformationReadiness {
        score: score.clamp(0.0, 100.0),
        strengths,
        challenges,
    }
}

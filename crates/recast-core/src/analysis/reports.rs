//! Report structs for content analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses. Field names are
//! camelCase on the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clarity::ClarityReport;
use crate::cta::CtaReport;
use crate::engagement::EngagementReport;
use crate::hashtags::HashtagReport;
use crate::readability::ReadabilityReport;

/// Size of the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Sentences, split on `.`, `!` and `?`.
    pub sentence_count: usize,
    /// Blank-line separated paragraphs.
    pub paragraph_count: usize,
    /// Minutes at 200 words per minute, rounded up.
    pub reading_time_minutes: usize,
}

/// Every signal computed for a text on one platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    /// Flesch reading ease.
    pub readability: ReadabilityReport,
    /// Engagement score with factors and suggestions.
    pub engagement: EngagementReport,
    /// Clarity score with issues and improvements.
    pub clarity: ClarityReport,
    /// Existing and suggested hashtags.
    pub hashtags: HashtagReport,
    /// Size metrics.
    pub metrics: ContentMetrics,
    /// Call-to-action detection.
    pub cta: CtaReport,
}

/// A source sentence ranked as a key idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeyInsight {
    /// The sentence, as written.
    pub text: String,
    /// Extraction score.
    pub score: u32,
}

/// Themes and value propositions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MainThemes {
    /// The opening sentence, truncated.
    pub main_theme: String,
    /// Short heading-like lines.
    pub sub_themes: Vec<String>,
    /// Sentences using benefit or outcome vocabulary.
    pub value_props: Vec<String>,
}

/// How well the text will convert into short-form content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransformationReadiness {
    /// Readiness score, 0–100.
    pub score: f64,
    /// What works in the text's favour.
    pub strengths: Vec<String>,
    /// What will make conversion harder.
    pub challenges: Vec<String>,
}

/// [`ContentAnalysis`] plus insight, theme and readiness extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedContentAnalysis {
    /// The base analysis, flattened on the wire.
    #[serde(flatten)]
    pub base: ContentAnalysis,
    /// Top-ranked insight sentences.
    pub key_insights: Vec<KeyInsight>,
    /// Main theme, sub-themes and value propositions.
    pub main_themes: MainThemes,
    /// Composite readiness score.
    pub transformation_readiness: TransformationReadiness,
}

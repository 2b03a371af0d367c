//! Prompt assembly for the generative backend.
//!
//! A prompt is a system message (role, platform format, tone, source
//! context, analysis summary, tips, custom instructions) and a user message
//! that embeds the raw content between fixed delimiters. The enhanced and
//! context-aware variants swap in the enhanced analysis summary; the
//! context-aware variant also picks a sampling temperature and adds
//! strategy blocks.

pub mod templates;

use std::fmt::Write as _;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::{self, ContentAnalysis, EnhancedContentAnalysis};
use crate::platform::{ContentType, Platform, Tone};
use crate::readability::ReadingLevel;
use crate::text;

/// Opening delimiter around the raw content.
pub const CONTENT_BEGIN: &str = "---BEGIN CONTENT---";

/// Closing delimiter around the raw content.
pub const CONTENT_END: &str = "---END CONTENT---";

/// Hashtags listed in the analysis summary.
const SUMMARY_HASHTAGS: usize = 5;

/// Insights listed in the enhanced summary.
const SUMMARY_INSIGHTS: usize = 5;

/// Characters kept per insight in the enhanced summary.
const SUMMARY_INSIGHT_CHARS: usize = 80;

/// Value propositions listed in the enhanced summary.
const SUMMARY_VALUE_PROPS: usize = 3;

/// Temperature rules, applied in order; later rules overwrite earlier ones.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureRules {
    /// Starting temperature.
    pub default: f64,
    /// Readiness below which `low_readiness` applies.
    pub readiness_floor: f64,
    /// Temperature for low-readiness content.
    pub low_readiness: f64,
    /// Temperature for humorous or casual tones.
    pub playful_tone: f64,
    /// Temperature for professional tone or difficult source text.
    pub measured: f64,
}

/// Default temperature rules.
pub const TEMPERATURE_RULES: TemperatureRules = TemperatureRules {
    default: 0.7,
    readiness_floor: 50.0,
    low_readiness: 0.5,
    playful_tone: 0.8,
    measured: 0.6,
};

/// Inputs to prompt generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptParameters {
    /// Presumed origin of the source text.
    #[serde(default)]
    pub content_type: ContentType,
    /// Target platform.
    pub platform: Platform,
    /// Voice for the output.
    #[serde(default)]
    pub tone: Tone,
    /// The source text.
    pub raw_content: String,
    /// Extra instructions appended to the system message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<String>,
}

/// An assembled prompt and the analysis it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptResult {
    /// System message for the backend.
    pub system_message: String,
    /// User message for the backend.
    pub user_prompt: String,
    /// Analysis of the raw content.
    pub content_analysis: ContentAnalysis,
    /// Ways to improve the source.
    pub improvement_tips: Vec<String>,
    /// Platform-specific advice.
    pub platform_recommendations: Vec<String>,
    /// Sampling temperature, set by the context-aware variant only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_temperature: Option<f64>,
}

/// A directive added to one prompt variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariationStrategy {
    /// Short identifier.
    pub name: &'static str,
    /// Text appended to the system message.
    pub directive: &'static str,
}

/// One prompt in a set of A/B variations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptVariation {
    /// Strategy identifier.
    pub strategy: String,
    /// Directive the strategy added to the system message.
    pub directive: String,
    /// The assembled prompt.
    pub prompt: PromptResult,
}

const HOOK_FIRST: VariationStrategy = VariationStrategy {
    name: "hook-first",
    directive: "Spend extra effort on the opening. Start with a bold claim, surprising number or pointed question before anything else.",
};

const SIMPLIFY: VariationStrategy = VariationStrategy {
    name: "simplify",
    directive: "Rewrite every idea in plain language. Short sentences, common words, one idea per line.",
};

const INSIGHT_LED: VariationStrategy = VariationStrategy {
    name: "insight-led",
    directive: "Build the piece around the key insights. Give each insight its own post, slide or beat.",
};

const EXPANSION: VariationStrategy = VariationStrategy {
    name: "expansion",
    directive: "The source is light on standout points. Find the strongest implicit idea and expand it with a concrete example.",
};

const LISTICLE: VariationStrategy = VariationStrategy {
    name: "listicle",
    directive: "Present the material as a punchy numbered list with one crisp line per item.",
};

const STORYTELLING: VariationStrategy = VariationStrategy {
    name: "storytelling",
    directive: "Frame the content as a short story: a situation, a turning point, and what changed as a result.",
};

/// Generate a prompt using the base analysis summary.
#[tracing::instrument(skip_all, fields(platform = %params.platform, tone = %params.tone, text_len = params.raw_content.len()))]
pub fn generate_prompt(params: &PromptParameters) -> PromptResult {
    let analysis = analysis::analyze_content(&params.raw_content, params.platform);
    let summary = analysis_summary(&analysis);
    build(params, analysis, &summary, &[], None)
}

/// Generate a prompt using the enhanced analysis summary.
#[tracing::instrument(skip_all, fields(platform = %params.platform, tone = %params.tone, text_len = params.raw_content.len()))]
pub fn generate_enhanced_prompt(params: &PromptParameters) -> PromptResult {
    let enhanced = analysis::analyze_content_enhanced(&params.raw_content, params.platform);
    let summary = enhanced_summary(&enhanced);
    build(params, enhanced.base, &summary, &[], None)
}

/// Generate an enhanced prompt with a recommended temperature and strategy blocks.
#[tracing::instrument(skip_all, fields(platform = %params.platform, tone = %params.tone, text_len = params.raw_content.len()))]
pub fn generate_context_aware_prompt(params: &PromptParameters) -> PromptResult {
    let enhanced = analysis::analyze_content_enhanced(&params.raw_content, params.platform);
    context_aware(params, &enhanced, None)
}

/// Like [`generate_context_aware_prompt`], over an analysis the caller already
/// holds (for example one with AI hashtags merged in).
pub fn generate_context_aware_prompt_from(
    params: &PromptParameters,
    enhanced: &EnhancedContentAnalysis,
) -> PromptResult {
    context_aware(params, enhanced, None)
}

/// Generate up to `count` context-aware prompts, each with one extra strategy.
///
/// The strategy pool depends on the content profile and always ends with
/// storytelling, so at least one variation is available for any input.
#[tracing::instrument(skip_all, fields(platform = %params.platform, count))]
pub fn generate_variations(params: &PromptParameters, count: usize) -> Vec<PromptVariation> {
    let enhanced = analysis::analyze_content_enhanced(&params.raw_content, params.platform);
    variation_pool(&enhanced)
        .into_iter()
        .take(count)
        .map(|strategy| PromptVariation {
            strategy: strategy.name.to_string(),
            directive: strategy.directive.to_string(),
            prompt: context_aware(params, &enhanced, Some(strategy)),
        })
        .collect()
}

/// Pick a sampling temperature from tone, readiness and reading level.
pub fn recommended_temperature(tone: Tone, readiness: f64, reading_level: ReadingLevel) -> f64 {
    let rules = &TEMPERATURE_RULES;
    let mut temperature = rules.default;
    if readiness < rules.readiness_floor {
        temperature = rules.low_readiness;
    }
    if matches!(tone, Tone::Humorous | Tone::Casual) {
        temperature = rules.playful_tone;
    }
    if tone == Tone::Professional || reading_level == ReadingLevel::Difficult {
        temperature = rules.measured;
    }
    tracing::debug!(%tone, readiness, %reading_level, temperature, "temperature selected");
    temperature
}

/// Strategies suited to this content, storytelling last.
pub fn variation_pool(enhanced: &EnhancedContentAnalysis) -> Vec<VariationStrategy> {
    let base = &enhanced.base;
    let insights = enhanced.key_insights.len();
    let mut pool = Vec::new();
    if base.engagement.score < 60.0 {
        pool.push(HOOK_FIRST);
    }
    if base.clarity.score < 60.0 {
        pool.push(SIMPLIFY);
    }
    if insights >= 3 {
        pool.push(INSIGHT_LED);
    }
    if insights < 2 {
        pool.push(EXPANSION);
    }
    if base.readability.flesch_score > 70.0 {
        pool.push(LISTICLE);
    }
    pool.push(STORYTELLING);
    pool
}

/// The user message: task framing plus the delimited raw content.
pub fn user_prompt(params: &PromptParameters) -> String {
    format!(
        "Transform the following {} into {} content for {}.\n\n{CONTENT_BEGIN}\n{}\n{CONTENT_END}",
        params.content_type.as_str().replace('_', " "),
        params.platform.format_name(),
        params.platform.display_name(),
        params.raw_content
    )
}

fn context_aware(
    params: &PromptParameters,
    enhanced: &EnhancedContentAnalysis,
    variation: Option<VariationStrategy>,
) -> PromptResult {
    let readiness = enhanced.transformation_readiness.score;
    let temperature = recommended_temperature(
        params.tone,
        readiness,
        enhanced.base.readability.reading_level,
    );

    let mut blocks = strategy_blocks(enhanced);
    if let Some(strategy) = variation {
        blocks.push(format!(
            "## Variation strategy: {}\n{}",
            strategy.name, strategy.directive
        ));
    }

    let summary = enhanced_summary(enhanced);
    build(
        params,
        enhanced.base.clone(),
        &summary,
        &blocks,
        Some(temperature),
    )
}

fn strategy_blocks(enhanced: &EnhancedContentAnalysis) -> Vec<String> {
    let mut blocks = Vec::new();
    if enhanced.key_insights.len() < 2 {
        blocks.push(
            "## Strategy: extract and expand\nFew explicit insights were found. Pull out the \
             implicit lessons and support each with a concrete example from the source."
                .to_string(),
        );
    }
    if enhanced.transformation_readiness.score > 80.0 {
        blocks.push(
            "## Strategy: lean into strengths\nThe source is already well suited to social \
             formats. Keep its structure and strongest lines; change as little as possible."
                .to_string(),
        );
    }
    if enhanced.base.metrics.word_count > 1500 {
        blocks.push(
            "## Strategy: condense\nThe source is long. Select only the most valuable points \
             and cut supporting detail ruthlessly."
                .to_string(),
        );
    }
    blocks
}

fn build(
    params: &PromptParameters,
    analysis: ContentAnalysis,
    summary: &str,
    extra_blocks: &[String],
    recommended_temperature: Option<f64>,
) -> PromptResult {
    let improvement_tips = templates::improvement_tips(&analysis);
    let platform_recommendations = templates::platform_recommendations(params.platform, &analysis);

    let mut system = String::new();
    system.push_str(templates::ROLE_BLOCK);
    let _ = write!(
        system,
        "\n\n## Platform format\n{}\n\n## Tone\n{}\n\n## Source\n{}\n\n{summary}",
        templates::platform_format(params.platform),
        templates::tone_directive(params.tone),
        templates::content_type_context(params.content_type),
    );
    push_list(&mut system, "Improvement tips", &improvement_tips);
    push_list(&mut system, "Platform recommendations", &platform_recommendations);
    for block in extra_blocks {
        let _ = write!(system, "\n\n{block}");
    }
    if let Some(instructions) = params
        .custom_instructions
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let _ = write!(system, "\n\n## Custom instructions\n{instructions}");
    }

    PromptResult {
        system_message: system,
        user_prompt: user_prompt(params),
        content_analysis: analysis,
        improvement_tips,
        platform_recommendations,
        recommended_temperature,
    }
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = write!(out, "\n\n## {heading}");
    for item in items {
        let _ = write!(out, "\n- {item}");
    }
}

fn analysis_summary(analysis: &ContentAnalysis) -> String {
    let hashtags = if analysis.hashtags.suggested.is_empty() {
        "none".to_string()
    } else {
        analysis
            .hashtags
            .suggested
            .iter()
            .take(SUMMARY_HASHTAGS)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!(
        "## Content analysis\n\
         - Readability: {} ({})\n\
         - Engagement: {}/100\n\
         - Length: {} words, about {} min read\n\
         - Call to action: {}\n\
         - Suggested hashtags: {hashtags}",
        analysis.readability.flesch_score,
        analysis.readability.reading_level,
        analysis.engagement.score.round(),
        analysis.metrics.word_count,
        analysis.metrics.reading_time_minutes,
        analysis.cta.strength,
    )
}

fn enhanced_summary(enhanced: &EnhancedContentAnalysis) -> String {
    let mut out = format!(
        "## Content insights\n- Main theme: {}\n- Transformation readiness: {}/100",
        enhanced.main_themes.main_theme,
        enhanced.transformation_readiness.score.round(),
    );
    if !enhanced.key_insights.is_empty() {
        out.push_str("\n- Key insights:");
        for (i, insight) in enhanced
            .key_insights
            .iter()
            .take(SUMMARY_INSIGHTS)
            .enumerate()
        {
            let _ = write!(
                out,
                "\n  {}. {}",
                i + 1,
                text::truncate(&insight.text, SUMMARY_INSIGHT_CHARS)
            );
        }
    }
    if !enhanced.main_themes.value_props.is_empty() {
        out.push_str("\n- Value propositions:");
        for prop in enhanced
            .main_themes
            .value_props
            .iter()
            .take(SUMMARY_VALUE_PROPS)
        {
            let _ = write!(out, "\n  - {prop}");
        }
    }
    out.push_str(
        "\n\nThe main theme, key insights and value propositions above must be preserved \
         in the output.",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG: &str = "The key lesson is simple: save 2 hours a day. The best tip is to \
                          start early. The main secret is to rest 8 hours. I love how this \
                          helps you grow. What will you try first?";

    fn params(tone: Tone, text: &str) -> PromptParameters {
        PromptParameters {
            content_type: ContentType::Blog,
            platform: Platform::Twitter,
            tone,
            raw_content: text.to_string(),
            custom_instructions: None,
        }
    }

    #[test]
    fn system_message_has_every_section() {
        let mut p = params(Tone::Educational, STRONG);
        p.custom_instructions = Some("Mention the newsletter.".to_string());
        let result = generate_prompt(&p);
        let sys = &result.system_message;
        assert!(sys.starts_with("You are an expert"));
        assert!(sys.contains("240-270 characters"));
        assert!(sys.contains(templates::tone_directive(Tone::Educational)));
        assert!(sys.contains("blog post"));
        assert!(sys.contains("## Content analysis"));
        assert!(sys.contains("- Call to action: weak"));
        assert!(sys.ends_with("## Custom instructions\nMention the newsletter."));
        assert!(result.recommended_temperature.is_none());
    }

    #[test]
    fn user_prompt_embeds_content_verbatim() {
        let p = params(Tone::Casual, "Line one.\n\nLine two!");
        let user = generate_prompt(&p).user_prompt;
        assert!(user.starts_with("Transform the following blog into thread content for Twitter/X."));
        assert!(user.contains("---BEGIN CONTENT---\nLine one.\n\nLine two!\n---END CONTENT---"));
    }

    #[test]
    fn blank_custom_instructions_are_skipped() {
        let mut p = params(Tone::Casual, STRONG);
        p.custom_instructions = Some("   ".to_string());
        assert!(!generate_prompt(&p).system_message.contains("Custom instructions"));
    }

    #[test]
    fn enhanced_prompt_states_preservation() {
        let result = generate_enhanced_prompt(&params(Tone::Inspiring, STRONG));
        let sys = &result.system_message;
        assert!(sys.contains("## Content insights"));
        assert!(sys.contains("- Main theme: The key lesson is simple: save 2 hours a day."));
        assert!(sys.contains("must be preserved"));
        assert!(!sys.contains("## Content analysis"));
    }

    #[test]
    fn humorous_tone_on_ready_content_is_playful() {
        let enhanced = analysis::analyze_content_enhanced(STRONG, Platform::Twitter);
        assert!(enhanced.transformation_readiness.score >= 80.0);
        assert_ne!(enhanced.base.readability.reading_level, ReadingLevel::Difficult);

        let result = generate_context_aware_prompt(&params(Tone::Humorous, STRONG));
        assert_eq!(result.recommended_temperature, Some(0.8));
        assert!(result.system_message.contains("lean into strengths"));
    }

    #[test]
    fn temperature_precedence() {
        let level = ReadingLevel::Standard;
        assert!((recommended_temperature(Tone::Conversational, 70.0, level) - 0.7).abs() < 1e-9);
        assert!((recommended_temperature(Tone::Conversational, 40.0, level) - 0.5).abs() < 1e-9);
        assert!((recommended_temperature(Tone::Casual, 40.0, level) - 0.8).abs() < 1e-9);
        assert!((recommended_temperature(Tone::Professional, 90.0, level) - 0.6).abs() < 1e-9);
        assert!(
            (recommended_temperature(Tone::Humorous, 90.0, ReadingLevel::Difficult) - 0.6).abs()
                < 1e-9
        );
        assert!(
            (recommended_temperature(Tone::Inspiring, 90.0, ReadingLevel::VeryDifficult) - 0.7)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn sparse_content_gets_expansion_strategy() {
        let result = generate_context_aware_prompt(&params(Tone::Casual, "Rivers run to the sea."));
        assert!(result.system_message.contains("extract and expand"));
    }

    #[test]
    fn variations_end_with_storytelling() {
        let p = params(Tone::Casual, "Rivers run to the sea.");
        let all = generate_variations(&p, 10);
        assert!(!all.is_empty());
        assert_eq!(all.last().map(|v| v.strategy.as_str()), Some("storytelling"));
        assert!(all.iter().all(|v| v.prompt.recommended_temperature.is_some()));
        assert!(all[0].prompt.system_message.contains("## Variation strategy"));

        let one = generate_variations(&p, 1);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].strategy, all[0].strategy);

        assert!(generate_variations(&p, 0).is_empty());
    }

    #[test]
    fn parameters_deserialize_with_defaults() {
        let json = r#"{"platform":"linkedin","rawContent":"Hello there."}"#;
        let p: PromptParameters = serde_json::from_str(json).unwrap();
        assert_eq!(p.tone, Tone::Conversational);
        assert_eq!(p.content_type, ContentType::General);
        assert!(p.custom_instructions.is_none());
    }
}

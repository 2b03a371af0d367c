//! Content analysis aggregation.
//!
//! [`analyze_content`] composes the individual scorers into one
//! [`ContentAnalysis`]. [`analyze_content_enhanced`] adds key insights,
//! themes and transformation readiness. Both are pure and synchronous;
//! [`analyze_content_with_suggestions`] is the async variant that merges
//! AI hashtag suggestions into the local ones.

pub mod insights;
pub mod readiness;
pub mod reports;
pub mod themes;

pub use insights::{
    KeyPointExtractor, extract_key_insights, extract_key_points, extract_key_points_after_opener,
};
pub use readiness::{READINESS_WEIGHTS, ReadinessInputs, score_readiness};
pub use reports::{
    ContentAnalysis, ContentMetrics, EnhancedContentAnalysis, KeyInsight, MainThemes,
    TransformationReadiness,
};
pub use themes::extract_main_themes;

use crate::clarity;
use crate::cta;
use crate::engagement;
use crate::hashtags::{self, HashtagSource};
use crate::platform::Platform;
use crate::readability;
use crate::text;

/// Reading speed used for reading-time estimates.
const WORDS_PER_MINUTE: usize = 200;

/// Size metrics for a text.
pub fn content_metrics(text: &str) -> ContentMetrics {
    let word_count = text::split_words(text).len();
    ContentMetrics {
        word_count,
        sentence_count: text::split_sentences(text).len(),
        paragraph_count: text::split_paragraphs(text).len(),
        reading_time_minutes: word_count.div_ceil(WORDS_PER_MINUTE),
    }
}

/// Analyze a text for a target platform, using local hashtags only.
#[tracing::instrument(skip(text), fields(text_len = text.len(), platform = %platform))]
pub fn analyze_content(text: &str, platform: Platform) -> ContentAnalysis {
    ContentAnalysis {
        readability: readability::analyze_readability(text),
        engagement: engagement::analyze_engagement(text),
        clarity: clarity::analyze_clarity(text),
        hashtags: hashtags::generate_hashtags(text, platform),
        metrics: content_metrics(text),
        cta: cta::detect_cta(text),
    }
}

/// Analyze a text, merging AI hashtag suggestions when a suggester is given.
///
/// A failing suggester leaves the local hashtags in place.
pub async fn analyze_content_with_suggestions(
    text: &str,
    platform: Platform,
    suggester: Option<&dyn HashtagSource>,
) -> ContentAnalysis {
    let mut analysis = analyze_content(text, platform);
    if let Some(suggester) = suggester {
        let ai = suggester.suggest_hashtags(text, platform).await;
        let report = &mut analysis.hashtags;
        report.suggested = hashtags::merge_hashtags(&ai, &report.suggested, &report.extracted, platform);
    }
    analysis
}

/// Analyze a text and add insights, themes and readiness.
#[tracing::instrument(skip(text), fields(text_len = text.len(), platform = %platform))]
pub fn analyze_content_enhanced(text: &str, platform: Platform) -> EnhancedContentAnalysis {
    enhance(text, analyze_content(text, platform))
}

/// Extend an existing analysis of `text` with insights, themes and readiness.
pub fn enhance(text: &str, base: ContentAnalysis) -> EnhancedContentAnalysis {
    let key_insights = extract_key_insights(text);
    let main_themes = extract_main_themes(text);
    let inputs = ReadinessInputs {
        insight_count: key_insights.len(),
        engagement: base.engagement.score,
        flesch: base.readability.flesch_score,
        has_value_props: !main_themes.value_props.is_empty(),
        word_count: base.metrics.word_count,
        clarity: base.clarity.score,
    };
    let transformation_readiness = score_readiness(&inputs, &READINESS_WEIGHTS);
    tracing::debug!(
        insights = key_insights.len(),
        readiness = transformation_readiness.score,
        "enhanced analysis complete"
    );

    EnhancedContentAnalysis {
        base,
        key_insights,
        main_themes,
        transformation_readiness,
    }
}

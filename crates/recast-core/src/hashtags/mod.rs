//! Hashtag extraction and suggestion.
//!
//! The local generator maps detected topics and themes to curated tag pools,
//! adds platform-specific tags, and trims the result to the platform cap. The
//! [`suggest`] submodule adds optional suggestions from a remote
//! chat-completions service, merged with local output by [`merge_hashtags`].

pub mod suggest;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::topics::{self, TopicReport};
use crate::word_lists::{GENERIC_HASHTAGS, THEME_HASHTAGS, TOPIC_HASHTAGS};

pub use suggest::{HashtagSource, HashtagSuggester, parse_hashtag_response};

static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").expect("valid regex"));

/// AI tags kept when merging.
const MAX_AI_TAGS: usize = 8;

/// Local tags kept alongside AI tags when merging.
const MAX_LOCAL_TAGS_WITH_AI: usize = 4;

/// Tags added for a platform when a topic or theme is present.
const PLATFORM_CONDITIONED_HASHTAGS: &[(Platform, &str, &str)] = &[
    (Platform::Twitter, "technology", "#TechTwitter"),
    (Platform::Twitter, "business", "#StartupLife"),
    (Platform::Twitter, "tutorial", "#Thread"),
    (Platform::Linkedin, "business", "#CareerGrowth"),
    (Platform::Linkedin, "technology", "#FutureOfWork"),
    (Platform::Linkedin, "education", "#LifelongLearning"),
    (Platform::Linkedin, "tips", "#ProfessionalDevelopment"),
    (Platform::Instagram, "creative", "#CreativeLife"),
    (Platform::Instagram, "health", "#FitnessMotivation"),
    (Platform::Instagram, "technology", "#TechLife"),
    (Platform::Instagram, "tutorial", "#LearnOnInstagram"),
];

/// Tags a platform falls back on when no topic or theme matched.
const PLATFORM_DEFAULT_HASHTAGS: &[(Platform, &[&str])] = &[
    (Platform::Twitter, &["#Thread", "#Daily"]),
    (
        Platform::Linkedin,
        &["#Professional", "#Insights", "#Motivation"],
    ),
    (
        Platform::Instagram,
        &["#InstaDaily", "#Inspiration", "#Daily", "#Motivation", "#Tips"],
    ),
];

/// Hashtags found in and suggested for a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HashtagReport {
    /// Tags already present in the text, first spelling wins.
    pub extracted: Vec<String>,
    /// New tags, never overlapping `extracted`, capped per platform.
    pub suggested: Vec<String>,
}

/// Find hashtags already written in the text.
///
/// Duplicates are dropped case-insensitively; the first spelling is kept.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    HASHTAG
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Local hashtag report for a text on a platform.
#[tracing::instrument(skip(text), fields(text_len = text.len(), platform = %platform))]
pub fn generate_hashtags(text: &str, platform: Platform) -> HashtagReport {
    let topics = topics::extract_topics(text);
    let extracted = extract_hashtags(text);
    let suggested = generate_local_hashtags(&topics, &extracted, platform);
    HashtagReport {
        extracted,
        suggested,
    }
}

/// Build suggestions from detected topics and themes.
pub fn generate_local_hashtags(
    topics: &TopicReport,
    extracted: &[String],
    platform: Platform,
) -> Vec<String> {
    let mut pool: Vec<&str> = Vec::new();

    for (topic, tags) in TOPIC_HASHTAGS {
        if topics.has_topic(topic) {
            pool.extend(tags);
        }
    }
    for (theme, tags) in THEME_HASHTAGS {
        if topics.has_theme(theme) {
            pool.extend(tags);
        }
    }
    for (target, key, tag) in PLATFORM_CONDITIONED_HASHTAGS {
        if *target == platform && (topics.has_topic(key) || topics.has_theme(key)) {
            pool.push(tag);
        }
    }
    if pool.is_empty() {
        for (target, tags) in PLATFORM_DEFAULT_HASHTAGS {
            if *target == platform {
                pool.extend(*tags);
            }
        }
    }

    finalize(pool.into_iter().map(str::to_string), extracted, platform)
}

/// Combine AI and local suggestions.
///
/// With no AI tags the local list is returned unchanged. Otherwise up to
/// eight AI tags lead, followed by up to four local tags.
pub fn merge_hashtags(
    ai: &[String],
    local: &[String],
    extracted: &[String],
    platform: Platform,
) -> Vec<String> {
    if ai.is_empty() {
        return local.to_vec();
    }
    let combined = ai
        .iter()
        .take(MAX_AI_TAGS)
        .chain(local.iter().take(MAX_LOCAL_TAGS_WITH_AI))
        .cloned();
    finalize(combined, extracted, platform)
}

/// Dedupe, drop already-present tags, push generic tags last, cap.
fn finalize(
    tags: impl Iterator<Item = String>,
    extracted: &[String],
    platform: Platform,
) -> Vec<String> {
    let mut seen: HashSet<String> = extracted.iter().map(|t| t.to_lowercase()).collect();
    let mut unique: Vec<String> = tags.filter(|t| seen.insert(t.to_lowercase())).collect();

    // stable: specific tags keep their order ahead of generic ones
    unique.sort_by_key(|t| is_generic(t));
    unique.truncate(platform.hashtag_cap());
    unique
}

fn is_generic(tag: &str) -> bool {
    GENERIC_HASHTAGS.iter().any(|g| g.eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower_set(tags: &[String]) -> HashSet<String> {
        tags.iter().map(|t| t.to_lowercase()).collect()
    }

    #[test]
    fn extracts_existing_tags_once() {
        let tags = extract_hashtags("Loving #Rust and #rust and #WebDev today");
        assert_eq!(tags, vec!["#Rust", "#WebDev"]);
    }

    #[test]
    fn topic_pools_lead_suggestions() {
        let report = generate_hashtags(
            "Software automation saves engineering time with cloud data.",
            Platform::Linkedin,
        );
        assert_eq!(report.suggested[0], "#Tech");
        assert!(report.suggested.contains(&"#FutureOfWork".to_string()));
    }

    #[test]
    fn suggestions_skip_extracted_case_insensitively() {
        let text = "Our #tech stack uses software and cloud data. #INNOVATION";
        let report = generate_hashtags(text, Platform::Instagram);
        let extracted = lower_set(&report.extracted);
        assert!(report
            .suggested
            .iter()
            .all(|t| !extracted.contains(&t.to_lowercase())));
        assert!(!report.suggested.contains(&"#Tech".to_string()));
    }

    #[test]
    fn suggestions_respect_platform_caps() {
        let text = "How to build software for business health education and creative design. \
                    Tips: review the news about learning and wellness.";
        for platform in Platform::ALL {
            let report = generate_hashtags(text, platform);
            assert!(report.suggested.len() <= platform.hashtag_cap());
        }
        assert_eq!(
            generate_hashtags(text, Platform::Twitter).suggested.len(),
            Platform::Twitter.hashtag_cap()
        );
    }

    #[test]
    fn generic_tags_sort_last() {
        let report = generate_hashtags("Tips for better sleep and a healthy diet.", Platform::Instagram);
        let first_generic = report.suggested.iter().position(|t| is_generic(t));
        if let Some(idx) = first_generic {
            assert!(report.suggested[idx..].iter().all(|t| is_generic(t)));
        }
    }

    #[test]
    fn no_topics_falls_back_to_platform_defaults() {
        let report = generate_hashtags("", Platform::Twitter);
        assert!(report.extracted.is_empty());
        assert_eq!(report.suggested, vec!["#Thread", "#Daily"]);
    }

    #[test]
    fn platform_defaults_only_when_nothing_matched() {
        let report = generate_hashtags(
            "Software automation saves engineering time with cloud data.",
            Platform::Instagram,
        );
        assert!(!report.suggested.is_empty());
        for tag in ["#InstaDaily", "#Inspiration", "#Daily", "#Motivation", "#Tips"] {
            assert!(!report.suggested.contains(&tag.to_string()), "unexpected {tag}");
        }
    }

    #[test]
    fn merge_without_ai_is_local() {
        let local = vec!["#Tech".to_string(), "#Daily".to_string()];
        assert_eq!(merge_hashtags(&[], &local, &[], Platform::Twitter), local);
    }

    #[test]
    fn merge_takes_ai_then_local() {
        let ai: Vec<String> = (0..10).map(|i| format!("#Ai{i}")).collect();
        let local: Vec<String> = (0..6).map(|i| format!("#Local{i}")).collect();
        let merged = merge_hashtags(&ai, &local, &[], Platform::Instagram);
        assert_eq!(merged.len(), 12);
        assert_eq!(merged[7], "#Ai7");
        assert_eq!(merged[8], "#Local0");
        assert!(!merged.contains(&"#Ai8".to_string()));
    }

    #[test]
    fn merge_dedupes_and_drops_extracted() {
        let ai = vec!["#Rust".to_string(), "#Tech".to_string()];
        let local = vec!["#tech".to_string(), "#Coding".to_string()];
        let extracted = vec!["#RUST".to_string()];
        let merged = merge_hashtags(&ai, &local, &extracted, Platform::Twitter);
        assert_eq!(merged, vec!["#Tech", "#Coding"]);
    }
}

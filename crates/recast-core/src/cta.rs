//! Call-to-action detection.
//!
//! Matches a fixed phrase dictionary as whole words, ignoring case, and
//! grades the result: no phrases is weak, one or two is moderate, three or
//! more strong.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clarity::{whole_word_hits, whole_word_matcher};
use crate::word_lists::CTA_PHRASES;

/// Distinct phrase count at which a CTA becomes strong.
const STRONG_THRESHOLD: usize = 3;

static CTA_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| whole_word_matcher(CTA_PHRASES));

/// Strength of the text's call to action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CtaStrength {
    /// No call-to-action phrase found.
    #[default]
    Weak,
    /// One or two phrases.
    Moderate,
    /// Three or more phrases.
    Strong,
}

impl CtaStrength {
    /// Lowercase label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }
}

impl std::fmt::Display for CtaStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of call-to-action detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CtaReport {
    /// Distinct phrases found, in dictionary order.
    pub phrases: Vec<String>,
    /// Overall strength.
    pub strength: CtaStrength,
    /// Ways to strengthen the call to action.
    pub suggestions: Vec<String>,
}

/// Detect call-to-action phrases in text.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn detect_cta(text: &str) -> CtaReport {
    let lower = text.to_lowercase();
    let mut found = vec![false; CTA_PHRASES.len()];
    for m in whole_word_hits(&CTA_MATCHER, &lower) {
        found[m.pattern().as_usize()] = true;
    }

    let phrases: Vec<String> = CTA_PHRASES
        .iter()
        .zip(&found)
        .filter(|(_, hit)| **hit)
        .map(|(phrase, _)| (*phrase).to_string())
        .collect();

    let (strength, suggestions) = match phrases.len() {
        0 => (
            CtaStrength::Weak,
            vec![
                "Add a clear call to action telling readers what to do next".to_string(),
                "Ask readers to comment, share, or follow for more".to_string(),
                "Close with a direct invitation such as \"Comment below\"".to_string(),
            ],
        ),
        n if n < STRONG_THRESHOLD => (
            CtaStrength::Moderate,
            vec!["Make the call to action more prominent and specific".to_string()],
        ),
        _ => (CtaStrength::Strong, Vec::new()),
    };

    CtaReport {
        phrases,
        strength,
        suggestions,
    }
}

//! Topic, entity and theme extraction.
//!
//! Keywords come from a frequency table over stopword-filtered words. Topics
//! and themes are dictionary names whose terms appear (by substring) in the
//! text or in the keyword list.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::word_lists::{STOPWORDS, THEME_PATTERNS, TOPIC_DICTIONARIES};

/// Maximum keywords kept.
const MAX_KEYWORDS: usize = 15;

/// Words shorter than or equal to this are ignored.
const MIN_WORD_LEN: usize = 2;

/// Words longer than this qualify as keywords even when seen once.
const LONG_WORD_LEN: usize = 6;

/// Topics, keyword entities and themes found in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TopicReport {
    /// Matched topic names (technology, business, health, education, creative).
    pub topics: Vec<String>,
    /// Most salient keywords, most frequent first.
    pub entities: Vec<String>,
    /// Matched theme names (tutorial, tips, review, news).
    pub themes: Vec<String>,
}

impl TopicReport {
    /// Whether a topic was detected.
    pub fn has_topic(&self, name: &str) -> bool {
        self.topics.iter().any(|t| t == name)
    }

    /// Whether a theme was detected.
    pub fn has_theme(&self, name: &str) -> bool {
        self.themes.iter().any(|t| t == name)
    }
}

/// Extract topics, keyword entities and themes from text.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn extract_topics(text: &str) -> TopicReport {
    let lower = text.to_lowercase();
    let entities = extract_keywords(&lower);

    let topics = match_dictionary(TOPIC_DICTIONARIES, &lower, &entities);
    let themes = match_dictionary(THEME_PATTERNS, &lower, &entities);

    TopicReport {
        topics,
        entities,
        themes,
    }
}

/// Frequency-ranked keywords from lowercased text.
fn extract_keywords(lower: &str) -> Vec<String> {
    let cleaned: String = lower
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    // word -> (count, first position)
    let mut freq: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, word) in cleaned.split_whitespace().enumerate() {
        if word.chars().count() <= MIN_WORD_LEN || STOPWORDS.contains(word) {
            continue;
        }
        freq.entry(word).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = freq
        .into_iter()
        .filter(|(word, (count, _))| *count >= 2 || word.chars().count() > LONG_WORD_LEN)
        .map(|(word, (count, pos))| (word, count, pos))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _, _)| word.to_string())
        .collect()
}

fn match_dictionary(dictionary: &[(&str, &[&str])], lower: &str, keywords: &[String]) -> Vec<String> {
    dictionary
        .iter()
        .filter(|(_, terms)| {
            terms.iter().any(|term| {
                lower.contains(term) || keywords.iter().any(|k| k.contains(term))
            })
        })
        .map(|(name, _)| (*name).to_string())
        .collect()
}

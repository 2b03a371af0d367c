//! AI-assisted hashtag suggestions.
//!
//! Sends a short excerpt to a chat-completions endpoint and parses the reply
//! into validated tags. Every failure degrades to an empty list: the caller
//! always has the local suggestions to fall back on.

use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;

use crate::backend::{self, ChatMessage, ChatRequest};
use crate::config::HashtagServiceConfig;
use crate::error::BackendResult;
use crate::platform::Platform;

/// Characters of source text sent to the service.
const EXCERPT_CHARS: usize = 500;

static VALID_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid regex"));

/// Anything that can suggest extra hashtags for a text.
///
/// Implementations never fail; an unavailable source yields an empty list.
#[async_trait]
pub trait HashtagSource: Send + Sync {
    /// Suggest hashtags for `text` on `platform`.
    async fn suggest_hashtags(&self, text: &str, platform: Platform) -> Vec<String>;
}

/// Client for a remote hashtag-suggestion service.
#[derive(Debug, Clone)]
pub struct HashtagSuggester {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    retries: u32,
    max_tokens: u32,
    temperature: f64,
}

impl HashtagSuggester {
    /// Create a suggester with an explicit API key.
    pub fn new(config: &HashtagServiceConfig, api_key: impl Into<String>) -> BackendResult<Self> {
        Ok(Self {
            client: backend::http_client(Duration::from_secs(config.timeout_secs))?,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: api_key.into(),
            retries: config.retries,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Create a suggester, reading the API key from the configured variable.
    pub fn from_config(config: &HashtagServiceConfig) -> BackendResult<Self> {
        let api_key = backend::api_key_from_env(&config.api_key_env)?;
        Self::new(config, api_key)
    }

    /// Ask the service for hashtags. Never fails; returns an empty list instead.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len(), platform = %platform))]
    pub async fn suggest(&self, text: &str, platform: Platform) -> Vec<String> {
        let attempts = self.retries.saturating_add(1);
        for attempt in 1..=attempts {
            match self.request(text, platform).await {
                Ok(content) => {
                    let tags = parse_hashtag_response(&content);
                    if tags.is_empty() {
                        tracing::warn!("hashtag service returned no usable tags");
                    } else {
                        tracing::debug!(count = tags.len(), "hashtag service responded");
                    }
                    return tags;
                }
                Err(e) => {
                    tracing::warn!(attempt, attempts, error = %e, "hashtag service request failed");
                }
            }
        }
        Vec::new()
    }

    async fn request(&self, text: &str, platform: Platform) -> BackendResult<String> {
        let system = format!(
            "You are a social media strategist. Suggest 8-12 relevant, specific hashtags \
             for a {} post about the content provided. Respond with only the hashtags, \
             comma-separated, each starting with #.",
            platform.display_name()
        );
        let excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage::system(&system), ChatMessage::user(&excerpt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        backend::send_chat(&self.client, &self.endpoint, &self.api_key, &request).await
    }
}

#[async_trait]
impl HashtagSource for HashtagSuggester {
    async fn suggest_hashtags(&self, text: &str, platform: Platform) -> Vec<String> {
        self.suggest(text, platform).await
    }
}

/// Parse a comma- or line-separated tag list into `#Word` tokens.
///
/// A missing `#` is added. Tokens that are not a letter followed by letters,
/// digits or underscores are dropped, as are case-insensitive duplicates.
pub fn parse_hashtag_response(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    content
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|token| token.trim_matches(|c: char| matches!(c, '.' | ';' | ':' | '"' | '\'' | '`')))
        .map(|token| token.trim_start_matches('#'))
        .filter(|word| VALID_TAG.is_match(word))
        .filter(|word| seen.insert(word.to_lowercase()))
        .map(|word| format!("#{word}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_and_newline_lists() {
        let tags = parse_hashtag_response("#Rust, #Programming\n#OpenSource,WebDev");
        assert_eq!(tags, vec!["#Rust", "#Programming", "#OpenSource", "#WebDev"]);
    }

    #[test]
    fn drops_invalid_tokens() {
        let tags = parse_hashtag_response("#1st, #ok_tag, #, #bad-tag, 42, \"#Quoted\"");
        assert_eq!(tags, vec!["#ok_tag", "#Quoted"]);
    }

    #[test]
    fn dedupes_case_insensitively() {
        let tags = parse_hashtag_response("#AI, #ai, #Ai.");
        assert_eq!(tags, vec!["#AI"]);
    }

    #[test]
    fn empty_response_yields_nothing() {
        assert!(parse_hashtag_response("").is_empty());
        assert!(parse_hashtag_response("  \n , ").is_empty());
    }

    #[tokio::test]
    async fn unreachable_service_fails_open() {
        let config = HashtagServiceConfig {
            endpoint: "http://127.0.0.1:1/v1/chat/completions".to_string(),
            timeout_secs: 1,
            retries: 1,
            ..HashtagServiceConfig::default()
        };
        let suggester = HashtagSuggester::new(&config, "test-key").unwrap();
        let tags = suggester
            .suggest("Rust makes systems programming safer.", Platform::Twitter)
            .await;
        assert!(tags.is_empty());
    }
}

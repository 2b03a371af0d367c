//! End-to-end transformation of one text into several platforms' content.
//!
//! Each target platform is handled independently and concurrently. AI
//! hashtags, when a source is configured, are merged into the analysis
//! first; the prompt and any synthesized fallback are both built from that
//! merged analysis. A backend failure never fails the request; that
//! platform is synthesized instead and marked `mock`.

use futures::future::join_all;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::{self, ContentAnalysis};
use crate::backend::{GenerationOptions, GenerativeBackend};
use crate::error::{RecastError, RecastResult};
use crate::hashtags::HashtagSource;
use crate::platform::{ContentType, Platform, Tone};
use crate::prompt::{self, PromptParameters, TEMPERATURE_RULES};
use crate::synthesis;

/// Optional caller preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Source type; detected from the text when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    /// Output voice; detected from the text when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    /// Extra instructions for every platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<String>,
}

/// A text and the platforms to transform it for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    /// The source text.
    pub raw_content: String,
    /// Target platforms, one to three.
    pub platforms: Vec<Platform>,
    /// Optional preferences.
    #[serde(default)]
    pub preferences: Preferences,
}

impl TransformRequest {
    /// Check the platform list.
    pub fn validate(&self) -> RecastResult<()> {
        match self.platforms.len() {
            0 => Err(RecastError::NoPlatforms),
            n if n > Platform::ALL.len() => Err(RecastError::TooManyPlatforms { count: n }),
            _ => Ok(()),
        }
    }
}

/// Content produced for one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    /// Target platform.
    pub platform: Platform,
    /// Output format (thread, carousel, script).
    pub format: String,
    /// The generated or synthesized content.
    pub content: String,
    /// Analysis of the source for this platform.
    pub analysis: ContentAnalysis,
    /// Source improvement tips, present when the backend generated the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_tips: Option<Vec<String>>,
    /// Platform advice, present when the backend generated the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_recommendations: Option<Vec<String>>,
    /// `true` when the synthesizer produced the content.
    pub mock: bool,
}

/// Runs transform requests against optional remote services.
#[derive(Clone, Copy)]
pub struct Transformer<'a> {
    backend: Option<&'a dyn GenerativeBackend>,
    suggester: Option<&'a dyn HashtagSource>,
    max_tokens: u32,
}

impl std::fmt::Debug for Transformer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transformer")
            .field("backend", &self.backend.map(GenerativeBackend::name))
            .field("suggester", &self.suggester.is_some())
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Default for Transformer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Transformer<'a> {
    /// A transformer with no remote services; every platform is synthesized.
    pub fn new() -> Self {
        Self {
            backend: None,
            suggester: None,
            max_tokens: GenerationOptions::default().max_tokens,
        }
    }

    /// Generate content with this backend.
    pub fn with_backend(mut self, backend: &'a dyn GenerativeBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Merge AI hashtag suggestions from this service.
    pub fn with_suggester(mut self, suggester: &'a dyn HashtagSource) -> Self {
        self.suggester = Some(suggester);
        self
    }

    /// Completion token limit for generation.
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Transform the request for every platform, concurrently.
    ///
    /// Results follow the request's platform order; duplicate platforms are
    /// produced once.
    #[tracing::instrument(skip_all, fields(text_len = request.raw_content.len(), platforms = request.platforms.len()))]
    pub async fn transform(&self, request: &TransformRequest) -> RecastResult<Vec<TransformResult>> {
        request.validate()?;

        let mut platforms = request.platforms.clone();
        let mut seen = Vec::with_capacity(platforms.len());
        platforms.retain(|p| {
            let fresh = !seen.contains(p);
            seen.push(*p);
            fresh
        });

        let tasks = platforms
            .into_iter()
            .map(|platform| self.transform_one(request, platform));
        Ok(join_all(tasks).await)
    }

    async fn transform_one(&self, request: &TransformRequest, platform: Platform) -> TransformResult {
        let text = &request.raw_content;
        let prefs = &request.preferences;
        let params = PromptParameters {
            content_type: prefs
                .content_type
                .unwrap_or_else(|| synthesis::detect_content_type(text)),
            platform,
            tone: prefs.tone.unwrap_or_else(|| synthesis::detect_tone(text)),
            raw_content: text.clone(),
            custom_instructions: prefs.custom_instructions.clone(),
        };

        let base =
            analysis::analyze_content_with_suggestions(text, platform, self.suggester).await;
        let enhanced = analysis::enhance(text, base);

        let prompt = prompt::generate_context_aware_prompt_from(&params, &enhanced);
        let analysis = prompt.content_analysis;

        if let Some(backend) = self.backend {
            let options = GenerationOptions {
                temperature: prompt
                    .recommended_temperature
                    .unwrap_or(TEMPERATURE_RULES.default),
                max_tokens: self.max_tokens,
            };
            match backend
                .generate(&prompt.system_message, &prompt.user_prompt, options)
                .await
            {
                Ok(content) => {
                    return TransformResult {
                        platform,
                        format: platform.format_name().to_string(),
                        content,
                        analysis,
                        improvement_tips: Some(prompt.improvement_tips),
                        platform_recommendations: Some(prompt.platform_recommendations),
                        mock: false,
                    };
                }
                Err(e) => {
                    tracing::warn!(%platform, backend = backend.name(), error = %e, "generation failed, synthesizing instead");
                }
            }
        }

        tracing::debug!(%platform, "using synthesized content");
        TransformResult {
            platform,
            format: platform.format_name().to_string(),
            content: synthesis::synthesize_with(platform, text, analysis.clone()),
            analysis,
            improvement_tips: None,
            platform_recommendations: None,
            mock: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{BackendError, BackendResult};

    const TEXT: &str = "The key lesson is simple: save 2 hours a day. The best tip is to \
                        start early. What will you try first?";

    #[derive(Default)]
    struct RecordingBackend {
        calls: Mutex<Vec<(String, f64)>>,
    }

    #[async_trait]
    impl GenerativeBackend for RecordingBackend {
        fn name(&self) -> &str {
            "recording"
        }

        async fn generate(
            &self,
            system: &str,
            _user: &str,
            options: GenerationOptions,
        ) -> BackendResult<String> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), options.temperature));
            Ok(format!("generated ({} chars of instructions)", system.len()))
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl GenerativeBackend for FailingBackend {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _: &str, _: &str, _: GenerationOptions) -> BackendResult<String> {
            Err(BackendError::EmptyResponse)
        }
    }

    struct FixedTags(Vec<&'static str>);

    #[async_trait]
    impl HashtagSource for FixedTags {
        async fn suggest_hashtags(&self, _: &str, _: Platform) -> Vec<String> {
            self.0.iter().map(|t| (*t).to_string()).collect()
        }
    }

    fn request(platforms: Vec<Platform>) -> TransformRequest {
        TransformRequest {
            raw_content: TEXT.to_string(),
            platforms,
            preferences: Preferences::default(),
        }
    }

    #[test]
    fn validation_bounds_platform_count() {
        assert_eq!(request(vec![]).validate(), Err(RecastError::NoPlatforms));
        assert_eq!(
            request(vec![Platform::Twitter; 4]).validate(),
            Err(RecastError::TooManyPlatforms { count: 4 })
        );
        assert!(request(Platform::ALL.to_vec()).validate().is_ok());
    }

    #[tokio::test]
    async fn without_backend_everything_is_synthesized() {
        let results = Transformer::new()
            .transform(&request(Platform::ALL.to_vec()))
            .await
            .unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.mock));
        assert!(results.iter().all(|r| r.improvement_tips.is_none()));
        assert_eq!(results[0].format, "thread");
        assert!(results[0].content.starts_with("1/"));
        assert_eq!(results[1].format, "carousel");
        assert_eq!(results[2].format, "script");
    }

    #[tokio::test]
    async fn backend_output_is_used() {
        let backend = RecordingBackend::default();
        let mut req = request(vec![Platform::Linkedin, Platform::Twitter]);
        req.preferences.tone = Some(Tone::Professional);
        req.preferences.custom_instructions = Some("Mention our podcast.".to_string());

        let results = Transformer::new()
            .with_backend(&backend)
            .transform(&req)
            .await
            .unwrap();

        assert_eq!(results[0].platform, Platform::Linkedin);
        assert_eq!(results[1].platform, Platform::Twitter);
        assert!(results.iter().all(|r| !r.mock));
        assert!(results[0].content.starts_with("generated"));
        assert!(results[0].improvement_tips.is_some());

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, t)| (*t - 0.6).abs() < 1e-9));
        assert!(calls.iter().all(|(s, _)| s.contains("Mention our podcast.")));
    }

    #[tokio::test]
    async fn backend_failure_falls_back_per_platform() {
        let results = Transformer::new()
            .with_backend(&FailingBackend)
            .transform(&request(vec![Platform::Instagram]))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].mock);
        assert!(results[0].content.contains("[0-3s] HOOK"));
    }

    #[tokio::test]
    async fn ai_hashtags_reach_synthesized_content() {
        let tags = FixedTags(vec!["#TimeHacks", "#MorningRoutine"]);
        let results = Transformer::new()
            .with_suggester(&tags)
            .transform(&request(vec![Platform::Instagram]))
            .await
            .unwrap();
        let result = &results[0];
        assert!(result.mock);
        assert_eq!(result.analysis.hashtags.suggested[0], "#TimeHacks");
        let rendered = result.content.split("HASHTAGS\n").nth(1).unwrap();
        let expected: Vec<&str> = result
            .analysis
            .hashtags
            .suggested
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(rendered, expected.join(" "));
    }

    #[tokio::test]
    async fn ai_hashtags_shape_the_prompt_analysis() {
        let backend = RecordingBackend::default();
        let tags = FixedTags(vec!["#TimeHacks"]);
        let results = Transformer::new()
            .with_backend(&backend)
            .with_suggester(&tags)
            .transform(&request(vec![Platform::Twitter]))
            .await
            .unwrap();
        assert!(!results[0].mock);
        assert_eq!(results[0].analysis.hashtags.suggested[0], "#TimeHacks");
    }

    #[tokio::test]
    async fn duplicate_platforms_run_once() {
        let results = Transformer::new()
            .transform(&request(vec![Platform::Twitter, Platform::Twitter]))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn invalid_request_is_rejected() {
        let err = Transformer::new().transform(&request(vec![])).await.unwrap_err();
        assert_eq!(err, RecastError::NoPlatforms);
    }

    #[test]
    fn request_deserializes_from_camel_case() {
        let json = r#"{"rawContent":"Hi.","platforms":["twitter","instagram"],"preferences":{"tone":"humorous"}}"#;
        let req: TransformRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.platforms, vec![Platform::Twitter, Platform::Instagram]);
        assert_eq!(req.preferences.tone, Some(Tone::Humorous));
        assert!(req.preferences.content_type.is_none());
    }
}

//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes content analysis, hashtag suggestions, prompt assembly and local
//! synthesis over stdio. Each `#[tool]` method validates its input and
//! delegates to `recast_core`; no analysis logic lives here.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use recast_core::config::Config;
use recast_core::hashtags::{self, HashtagSuggester};
use recast_core::prompt::{self, PromptParameters};
use recast_core::{ContentType, Platform, Tone, analysis, markdown, synthesis};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_content` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeContentParams {
    /// The text to analyze.
    pub text: String,
    /// Target platform: "twitter", "linkedin" or "instagram".
    pub platform: String,
    /// Include key insights, themes and transformation readiness.
    #[serde(default)]
    pub enhanced: bool,
    /// Whether to flatten markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `suggest_hashtags` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestHashtagsParams {
    /// The text to suggest hashtags for.
    pub text: String,
    /// Target platform: "twitter", "linkedin" or "instagram".
    pub platform: String,
    /// Ask the configured hashtag service for extra suggestions.
    #[serde(default)]
    pub ai: bool,
}

/// Parameters for the `generate_prompt` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GeneratePromptParams {
    /// The source text.
    pub text: String,
    /// Target platform: "twitter", "linkedin" or "instagram".
    pub platform: String,
    /// Voice: casual, professional, humorous, inspiring, educational, conversational.
    pub tone: Option<String>,
    /// Source type: blog, video_script, podcast_transcript, article, newsletter, general.
    pub content_type: Option<String>,
    /// Generator: "standard", "enhanced" or "context_aware" (default).
    pub mode: Option<String>,
    /// Extra instructions appended to the system message.
    pub custom_instructions: Option<String>,
    /// Return up to this many A/B variations instead of one prompt.
    pub variations: Option<usize>,
}

/// Parameters for the `synthesize_content` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SynthesizeContentParams {
    /// The source text.
    pub text: String,
    /// Output format: "twitter", "linkedin" or "instagram".
    pub format: String,
}

/// MCP server exposing recast to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    suggester: Option<HashtagSuggester>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

fn parse_platform(name: &str) -> Result<Platform, McpError> {
    name.parse::<Platform>()
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a server with the default input limit and no hashtag service.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: Some(recast_core::DEFAULT_MAX_INPUT_BYTES),
            suggester: None,
        }
    }

    /// Create a server using the loaded configuration.
    ///
    /// The hashtag service is enabled only when its API key is available.
    pub fn from_config(config: &Config, max_input_bytes: Option<usize>) -> Self {
        let suggester = HashtagSuggester::from_config(&config.hashtag_service)
            .inspect_err(|e| tracing::debug!(error = %e, "hashtag service unavailable"))
            .ok();
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
            suggester,
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "platforms": Platform::ALL.map(|p| p.as_str()),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Analyze content for a platform.
    #[tool(
        description = "Analyze content for a social platform. Returns readability (Flesch), engagement, clarity, call-to-action strength, hashtags and basic metrics; with enhanced=true also key insights, themes and transformation readiness."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", platform = %params.platform))]
    fn analyze_content(
        &self,
        Parameters(params): Parameters<AnalyzeContentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_content", enhanced = params.enhanced, "executing MCP tool");
        self.check_size(&params.text)?;
        let platform = parse_platform(&params.platform)?;

        let text = if params.strip_markdown {
            markdown::to_plain_text(&params.text)
        } else {
            params.text
        };

        let json = if params.enhanced {
            to_json(&analysis::analyze_content_enhanced(&text, platform))?
        } else {
            to_json(&analysis::analyze_content(&text, platform))?
        };

        tracing::info!(tool = "analyze_content", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Suggest hashtags for a platform.
    #[tool(
        description = "Extract existing hashtags and suggest new ones for a platform. With ai=true, suggestions from the configured hashtag service are merged in when available."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", platform = %params.platform))]
    async fn suggest_hashtags(
        &self,
        Parameters(params): Parameters<SuggestHashtagsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "suggest_hashtags", ai = params.ai, "executing MCP tool");
        self.check_size(&params.text)?;
        let platform = parse_platform(&params.platform)?;

        let mut report = hashtags::generate_hashtags(&params.text, platform);
        if params.ai {
            match &self.suggester {
                Some(suggester) => {
                    let ai = suggester.suggest(&params.text, platform).await;
                    report.suggested =
                        hashtags::merge_hashtags(&ai, &report.suggested, &report.extracted, platform);
                }
                None => tracing::warn!("hashtag service not configured, using local suggestions"),
            }
        }

        let json = to_json(&report)?;
        tracing::info!(
            tool = "suggest_hashtags",
            suggested = report.suggested.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Build a transformation prompt.
    #[tool(
        description = "Build a system message and user prompt for transforming content into a Twitter/X thread, LinkedIn carousel or Instagram video script. Returns the prompt with its content analysis, improvement tips and platform recommendations."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", platform = %params.platform))]
    fn generate_prompt(
        &self,
        Parameters(params): Parameters<GeneratePromptParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "generate_prompt", mode = ?params.mode, "executing MCP tool");
        self.check_size(&params.text)?;
        let prompt_params = PromptParameters {
            content_type: params
                .content_type
                .as_deref()
                .map(ContentType::from_name)
                .unwrap_or_default(),
            platform: parse_platform(&params.platform)?,
            tone: params.tone.as_deref().map(Tone::from_name).unwrap_or_default(),
            raw_content: params.text,
            custom_instructions: params.custom_instructions,
        };

        let json = if let Some(count) = params.variations {
            to_json(&prompt::generate_variations(&prompt_params, count))?
        } else {
            let result = match params.mode.as_deref().unwrap_or("context_aware") {
                "standard" => prompt::generate_prompt(&prompt_params),
                "enhanced" => prompt::generate_enhanced_prompt(&prompt_params),
                "context_aware" | "context-aware" => {
                    prompt::generate_context_aware_prompt(&prompt_params)
                }
                other => {
                    return Err(McpError::invalid_params(
                        format!("unknown mode: {other}. Use: standard, enhanced, context_aware"),
                        None,
                    ));
                }
            };
            to_json(&result)?
        };

        tracing::info!(tool = "generate_prompt", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Synthesize platform content locally.
    #[tool(
        description = "Produce a Twitter/X thread, LinkedIn carousel or Instagram script from content without a language model."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", format = %params.format))]
    fn synthesize_content(
        &self,
        Parameters(params): Parameters<SynthesizeContentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "synthesize_content", "executing MCP tool");
        self.check_size(&params.text)?;

        let content = synthesis::synthesize(&params.format, &params.text);
        tracing::info!(tool = "synthesize_content", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(content)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Analyze content, suggest hashtags, and build prompts for \
                 repurposing it on Twitter/X, LinkedIn and Instagram.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

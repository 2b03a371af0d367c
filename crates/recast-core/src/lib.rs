//! Core library for recast.
//!
//! Analyzes a piece of written content (readability, engagement, clarity,
//! calls to action, topics, hashtags) and turns that analysis into prompts
//! for repurposing the content as a Twitter/X thread, a LinkedIn carousel,
//! or an Instagram video script. When no generative backend is available,
//! [`synthesis`] produces the same formats locally.
//!
//! # Modules
//!
//! - [`analysis`] - Aggregated and enhanced content analysis
//! - [`prompt`] - Prompt assembly and variations
//! - [`synthesis`] - Offline content synthesis
//! - [`transform`] - Multi-platform transformation pipeline
//! - [`hashtags`] - Hashtag extraction, generation and AI suggestions
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use recast_core::{Platform, analyze_content};
//!
//! let analysis = analyze_content("Start small. Ship daily. What will you build?", Platform::Twitter);
//! assert!(analysis.engagement.score <= 100.0);
//! assert!(analysis.hashtags.suggested.len() <= 5);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod backend;
pub mod clarity;
pub mod config;
pub mod cta;
pub mod engagement;
pub mod error;
pub mod hashtags;
pub mod markdown;
pub mod platform;
pub mod prompt;
pub mod readability;
pub mod synthesis;
pub mod syllables;
pub mod text;
pub mod topics;
pub mod transform;
pub mod word_lists;

pub use analysis::{ContentAnalysis, EnhancedContentAnalysis, analyze_content, analyze_content_enhanced};
pub use backend::{ChatCompletionsBackend, GenerationOptions, GenerativeBackend};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{BackendError, BackendResult, ConfigError, ConfigResult, RecastError, RecastResult};
pub use hashtags::{HashtagSource, HashtagSuggester};
pub use platform::{ContentType, Platform, Tone};
pub use prompt::{PromptParameters, PromptResult};
pub use transform::{Preferences, TransformRequest, TransformResult, Transformer};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

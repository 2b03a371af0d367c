//! Target platforms, tones and source content types.
//!
//! Platforms parse strictly because a wrong platform changes every output
//! format. Tones and content types parse leniently: an unknown name falls
//! back to [`Tone::Conversational`] or [`ContentType::General`].

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RecastError;

/// Social platform a piece of content is shaped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Platform {
    /// Numbered tweet threads.
    Twitter,
    /// Carousel slide decks.
    Linkedin,
    /// Short-form video scripts.
    Instagram,
}

impl Platform {
    /// Every supported platform.
    pub const ALL: [Self; 3] = [Self::Twitter, Self::Linkedin, Self::Instagram];

    /// Lowercase identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
        }
    }

    /// Display name used inside prompts.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter/X",
            Self::Linkedin => "LinkedIn",
            Self::Instagram => "Instagram",
        }
    }

    /// Maximum number of suggested hashtags.
    pub const fn hashtag_cap(&self) -> usize {
        match self {
            Self::Twitter => 5,
            Self::Linkedin => 8,
            Self::Instagram => 15,
        }
    }

    /// Name of the format produced for this platform.
    pub const fn format_name(&self) -> &'static str {
        match self {
            Self::Twitter => "thread",
            Self::Linkedin => "carousel",
            Self::Instagram => "script",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = RecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::Linkedin),
            "instagram" => Ok(Self::Instagram),
            _ => Err(RecastError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}

/// Voice applied to generated content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Tone {
    /// Relaxed and friendly.
    Casual,
    /// Polished and authoritative.
    Professional,
    /// Witty and light.
    Humorous,
    /// Uplifting and motivational.
    Inspiring,
    /// Clear and instructive.
    Educational,
    /// Natural, like talking to a friend.
    #[default]
    Conversational,
}

impl Tone {
    /// Lowercase identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Professional => "professional",
            Self::Humorous => "humorous",
            Self::Inspiring => "inspiring",
            Self::Educational => "educational",
            Self::Conversational => "conversational",
        }
    }

    /// Parse a tone name, falling back to the default for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "casual" => Self::Casual,
            "professional" => Self::Professional,
            "humorous" => Self::Humorous,
            "inspiring" => Self::Inspiring,
            "educational" => Self::Educational,
            "conversational" => Self::Conversational,
            other => {
                tracing::debug!(tone = other, "unknown tone, using default");
                Self::default()
            }
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presumed origin format of the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ContentType {
    /// Blog post.
    Blog,
    /// Script written for video.
    VideoScript,
    /// Transcript of a podcast episode.
    PodcastTranscript,
    /// Long-form article.
    Article,
    /// Email newsletter.
    Newsletter,
    /// Anything else.
    #[default]
    General,
}

impl ContentType {
    /// Snake-case identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::VideoScript => "video_script",
            Self::PodcastTranscript => "podcast_transcript",
            Self::Article => "article",
            Self::Newsletter => "newsletter",
            Self::General => "general",
        }
    }

    /// Parse a content type name, falling back to the default for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "blog" => Self::Blog,
            "video_script" | "video" => Self::VideoScript,
            "podcast_transcript" | "podcast" => Self::PodcastTranscript,
            "article" => Self::Article,
            "newsletter" => Self::Newsletter,
            "general" => Self::General,
            other => {
                tracing::debug!(content_type = other, "unknown content type, using default");
                Self::default()
            }
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_strictly() {
        assert_eq!("Twitter".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!("x".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!(" linkedin ".parse::<Platform>().unwrap(), Platform::Linkedin);
        let err = "tiktok".parse::<Platform>().unwrap_err();
        assert!(err.to_string().contains("tiktok"));
    }

    #[test]
    fn hashtag_caps() {
        assert_eq!(Platform::Twitter.hashtag_cap(), 5);
        assert_eq!(Platform::Linkedin.hashtag_cap(), 8);
        assert_eq!(Platform::Instagram.hashtag_cap(), 15);
    }

    #[test]
    fn unknown_tone_falls_back() {
        assert_eq!(Tone::from_name("HUMOROUS"), Tone::Humorous);
        assert_eq!(Tone::from_name("sarcastic"), Tone::Conversational);
    }

    #[test]
    fn unknown_content_type_falls_back() {
        assert_eq!(ContentType::from_name("video-script"), ContentType::VideoScript);
        assert_eq!(ContentType::from_name("tweetstorm"), ContentType::General);
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&ContentType::PodcastTranscript).unwrap(),
            "\"podcast_transcript\""
        );
        assert_eq!(serde_json::to_string(&Platform::Linkedin).unwrap(), "\"linkedin\"");
    }
}

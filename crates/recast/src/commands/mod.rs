//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use recast_core::config::{Config, ConfigSources};
use recast_core::{ContentType, Tone, markdown};

pub mod analyze;
pub mod hashtags;
pub mod info;
pub mod prompt;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod synthesize;
pub mod transform;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read source content, flattening markdown files to plain text.
pub fn read_content(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if markdown::is_markdown_path(path.as_str()) {
        Ok(markdown::to_plain_text(&content))
    } else {
        Ok(content)
    }
}

/// Prompt settings taken from configuration, overridable per command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDefaults {
    /// Tone used when `--tone` is absent.
    pub tone: Option<Tone>,
    /// Content type used when `--content-type` is absent.
    pub content_type: Option<ContentType>,
    /// Standing custom instructions.
    pub instructions: Option<String>,
}

impl PromptDefaults {
    /// Read defaults from config, loading an instructions file if one is set.
    ///
    /// Relative instruction files resolve against the primary config file's
    /// directory, or `cwd` when no file was loaded.
    pub fn from_config(
        config: &Config,
        sources: &ConfigSources,
        cwd: &Utf8Path,
    ) -> anyhow::Result<Self> {
        let instructions = match &config.instructions {
            Some(i) => i
                .resolve(sources.primary_dir().unwrap_or(cwd))
                .context("failed to load custom instructions")?,
            None => None,
        };
        Ok(Self {
            tone: config.default_tone,
            content_type: config.default_content_type,
            instructions,
        })
    }

    /// Command-line instructions replace configured ones.
    pub fn instructions_or(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.instructions.clone())
    }
}

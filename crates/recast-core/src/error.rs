//! Error types for recast-core.
//!
//! Analysis itself never fails: degenerate input produces zeroed reports.
//! Errors only arise from configuration, strict input parsing, and the
//! generative backend.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A configured instructions file could not be read.
    #[error("failed to read instructions file {path}: {source}")]
    InstructionsFile {
        /// The resolved path that failed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while validating caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecastError {
    /// The platform identifier is not one of twitter, linkedin, instagram.
    #[error("unknown platform: {name}. Use: twitter, linkedin, instagram")]
    UnknownPlatform {
        /// The identifier that was requested.
        name: String,
    },

    /// A transform request named no target platforms.
    #[error("at least one target platform is required")]
    NoPlatforms,

    /// A transform request named more platforms than exist.
    #[error("too many target platforms: {count} (max 3)")]
    TooManyPlatforms {
        /// Number of platforms requested.
        count: usize,
    },
}

/// Result type alias using [`RecastError`].
pub type RecastResult<T> = Result<T, RecastError>;

/// Errors returned by a generative text backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// No API key was available for the backend.
    #[error("generative backend is not configured: missing {env_var}")]
    MissingApiKey {
        /// Environment variable that should hold the key.
        env_var: String,
    },

    /// The HTTP request could not be sent or timed out.
    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Trimmed response body.
        body: String,
    },

    /// The response had no usable content.
    #[error("backend response contained no content")]
    EmptyResponse,
}

/// Result type alias using [`BackendError`].
pub type BackendResult<T> = Result<T, BackendError>;

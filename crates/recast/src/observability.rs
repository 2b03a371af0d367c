//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr. When a log file or directory is
//! configured, the same events are also written as JSON lines through a
//! non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Explicit log file path.
pub const LOG_PATH_ENV: &str = "RECAST_LOG_PATH";
/// Directory for daily-rolling log files.
pub const LOG_DIR_ENV: &str = "RECAST_LOG_DIR";
const LOG_FILE_PREFIX: &str = "recast.jsonl";

/// Where JSON log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single file, never rotated.
    File(PathBuf),
    /// Daily-rolling files inside a directory.
    Directory(PathBuf),
}

/// Resolved logging destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// File logging target, if any.
    pub target: Option<LogTarget>,
}

impl ObservabilityConfig {
    /// Resolve from the environment, falling back to the configured log directory.
    ///
    /// `RECAST_LOG_PATH` wins over `RECAST_LOG_DIR`, which wins over config.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();
        let target = log_path
            .filter(non_empty)
            .map(LogTarget::File)
            .or_else(|| {
                log_dir
                    .filter(non_empty)
                    .or(config_log_dir)
                    .map(LogTarget::Directory)
            });
        Self { target }
    }
}

/// Build the event filter.
///
/// `--quiet` and `-v` take precedence, then `RUST_LOG`, then the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered file output is flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &config.target {
        Some(target) => {
            let (writer, guard) = tracing_appender::non_blocking(appender(target)?);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn appender(target: &LogTarget) -> anyhow::Result<RollingFileAppender> {
    match target {
        LogTarget::Directory(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            Ok(rolling::daily(dir, LOG_FILE_PREFIX))
        }
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            Ok(rolling::never(dir, name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/a.jsonl")),
            Some(PathBuf::from("/tmp/logs")),
            Some(PathBuf::from("/var/log/recast")),
        );
        assert_eq!(cfg.target, Some(LogTarget::File(PathBuf::from("/tmp/a.jsonl"))));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/tmp/logs")),
            Some(PathBuf::from("/var/log/recast")),
        );
        assert_eq!(cfg.target, Some(LogTarget::Directory(PathBuf::from("/tmp/logs"))));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::new()),
            Some(PathBuf::new()),
            Some(PathBuf::from("/var/log/recast")),
        );
        assert_eq!(
            cfg.target,
            Some(LogTarget::Directory(PathBuf::from("/var/log/recast")))
        );
    }

    #[test]
    fn nothing_configured_means_stderr_only() {
        assert_eq!(ObservabilityConfig::resolve(None, None, None).target, None);
    }

    #[test]
    fn quiet_and_verbose_levels() {
        assert_eq!(env_filter(true, 3, "info").to_string(), "error");
        assert_eq!(env_filter(false, 1, "info").to_string(), "debug");
        assert_eq!(env_filter(false, 2, "info").to_string(), "trace");
    }

    #[test]
    fn file_appender_creates_parent_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("recast.jsonl");
        appender(&LogTarget::File(path)).unwrap();
        assert!(tmp.path().join("nested").is_dir());
    }
}

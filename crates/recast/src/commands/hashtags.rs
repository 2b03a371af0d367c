//! Hashtags command: extracted tags plus local or AI-augmented suggestions.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use recast_core::config::HashtagServiceConfig;
use recast_core::hashtags::{self, HashtagReport, HashtagSuggester};
use recast_core::Platform;

use super::read_content;

/// Arguments for the `hashtags` subcommand.
#[derive(Args, Debug)]
pub struct HashtagsArgs {
    /// File to read hashtags from.
    pub file: Utf8PathBuf,

    /// Target platform (sets the suggestion cap).
    #[arg(short, long, value_enum)]
    pub platform: Platform,

    /// Ask the configured hashtag service for extra suggestions.
    #[arg(long)]
    pub ai: bool,
}

/// Print extracted and suggested hashtags for a file.
#[instrument(name = "cmd_hashtags", skip_all, fields(file = %args.file, platform = %args.platform))]
pub fn cmd_hashtags(
    args: HashtagsArgs,
    global_json: bool,
    service: &HashtagServiceConfig,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(ai = args.ai, "executing hashtags command");

    let content = read_content(&args.file, max_input_bytes)?;
    let mut report = hashtags::generate_hashtags(&content, args.platform);

    if args.ai {
        let suggester = HashtagSuggester::from_config(service)
            .context("hashtag service is not available")?;
        let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
        let ai = rt.block_on(suggester.suggest(&content, args.platform));
        report.suggested =
            hashtags::merge_hashtags(&ai, &report.suggested, &report.extracted, args.platform);
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &HashtagReport) {
    if !report.extracted.is_empty() {
        println!("{} {}", "Found:".dimmed(), report.extracted.join(" "));
    }
    if report.suggested.is_empty() {
        println!("{}", "No suggestions.".yellow());
    } else {
        println!("{}", report.suggested.join(" ").cyan());
    }
}

//! Transform command: generate content for one or more platforms.

use std::time::Duration;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument, warn};

use recast_core::config::Config;
use recast_core::{
    ChatCompletionsBackend, ContentType, GenerativeBackend, HashtagSource, HashtagSuggester,
    Platform, Preferences, Tone, TransformRequest, TransformResult, Transformer,
};

use super::{PromptDefaults, read_content};

/// Arguments for the `transform` subcommand.
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Source file (`.md` files are flattened first).
    pub file: Utf8PathBuf,

    /// Target platforms (comma-separated, up to three).
    #[arg(short, long, value_enum, value_delimiter = ',', required = true)]
    pub platforms: Vec<Platform>,

    /// Voice for the output (default from config, else detected).
    #[arg(short, long, value_enum)]
    pub tone: Option<Tone>,

    /// What the source is (default from config, else detected).
    #[arg(long, value_enum)]
    pub content_type: Option<ContentType>,

    /// Extra instructions for every platform.
    #[arg(long)]
    pub instructions: Option<String>,

    /// Skip remote services and synthesize locally.
    #[arg(long)]
    pub offline: bool,
}

/// Transform a file for the requested platforms.
#[instrument(name = "cmd_transform", skip_all, fields(file = %args.file, platforms = ?args.platforms))]
pub fn cmd_transform(
    args: TransformArgs,
    global_json: bool,
    config: &Config,
    defaults: &PromptDefaults,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(offline = args.offline, "executing transform command");

    let raw_content = read_content(&args.file, max_input_bytes)?;
    let request = TransformRequest {
        raw_content,
        platforms: args.platforms,
        preferences: Preferences {
            content_type: args.content_type.or(defaults.content_type),
            tone: args.tone.or(defaults.tone),
            custom_instructions: defaults.instructions_or(args.instructions),
        },
    };
    request.validate()?;

    let (backend, suggester) = if args.offline {
        (None, None)
    } else {
        connect(config)
    };

    let mut transformer = Transformer::new().with_max_tokens(config.generation.max_tokens);
    if let Some(ref backend) = backend {
        transformer = transformer.with_backend(backend as &dyn GenerativeBackend);
    }
    if let Some(ref suggester) = suggester {
        transformer = transformer.with_suggester(suggester as &dyn HashtagSource);
    }

    let spinner = (backend.is_some() && !global_json).then(|| spinner(request.platforms.len()));
    let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
    let results = rt.block_on(transformer.transform(&request));
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let results = results?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }
    Ok(())
}

/// Build remote clients from config; a missing key leaves that service off.
fn connect(config: &Config) -> (Option<ChatCompletionsBackend>, Option<HashtagSuggester>) {
    let backend = ChatCompletionsBackend::from_config(&config.generation)
        .inspect_err(|e| warn!(error = %e, "generation unavailable, synthesizing locally"))
        .ok();
    let suggester = HashtagSuggester::from_config(&config.hashtag_service)
        .inspect_err(|e| debug!(error = %e, "hashtag service unavailable"))
        .ok();
    (backend, suggester)
}

fn spinner(platforms: usize) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(format!("Generating content for {platforms} platform(s)..."));
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn print_results(results: &[TransformResult]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let source = if result.mock { "synthesized" } else { "generated" };
        println!(
            "{} {} ({})",
            result.platform.display_name().bold(),
            result.format.cyan(),
            source.dimmed(),
        );
        println!("{}", "-".repeat(40).dimmed());
        println!("{}", result.content);
        if let Some(ref tips) = result.improvement_tips
            && !tips.is_empty()
        {
            println!("\n{}", "Improvement tips:".yellow());
            for tip in tips {
                println!("  - {tip}");
            }
        }
    }
}

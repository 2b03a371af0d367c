//! Prompt command: assemble the system and user messages for a platform.

use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use recast_core::prompt::{self, PromptParameters, PromptResult};
use recast_core::{ContentType, Platform, Tone};

use super::{PromptDefaults, read_content};

/// Which prompt generator to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PromptMode {
    /// Base analysis summary.
    Standard,
    /// Enhanced analysis summary with insights and themes.
    Enhanced,
    /// Enhanced summary plus strategy blocks and a recommended temperature.
    #[default]
    ContextAware,
}

/// Arguments for the `prompt` subcommand.
#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Source file (`.md` files are flattened first).
    pub file: Utf8PathBuf,

    /// Target platform.
    #[arg(short, long, value_enum)]
    pub platform: Platform,

    /// Voice for the output (default from config, else conversational).
    #[arg(short, long, value_enum)]
    pub tone: Option<Tone>,

    /// What the source is (default from config, else general).
    #[arg(long, value_enum)]
    pub content_type: Option<ContentType>,

    /// Prompt generator.
    #[arg(short, long, value_enum, default_value_t)]
    pub mode: PromptMode,

    /// Emit up to N A/B variations instead of a single prompt.
    #[arg(long, value_name = "N", conflicts_with = "mode")]
    pub variations: Option<usize>,

    /// Extra instructions appended to the system message.
    #[arg(long)]
    pub instructions: Option<String>,
}

/// Print a transformation prompt for a file.
#[instrument(name = "cmd_prompt", skip_all, fields(file = %args.file, platform = %args.platform))]
pub fn cmd_prompt(
    args: PromptArgs,
    global_json: bool,
    defaults: &PromptDefaults,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(mode = ?args.mode, variations = ?args.variations, "executing prompt command");

    let raw_content = read_content(&args.file, max_input_bytes)?;
    let params = PromptParameters {
        content_type: args.content_type.or(defaults.content_type).unwrap_or_default(),
        platform: args.platform,
        tone: args.tone.or(defaults.tone).unwrap_or_default(),
        raw_content,
        custom_instructions: defaults.instructions_or(args.instructions),
    };

    if let Some(count) = args.variations {
        let variations = prompt::generate_variations(&params, count);
        if global_json {
            println!("{}", serde_json::to_string_pretty(&variations)?);
        } else {
            for (i, variation) in variations.iter().enumerate() {
                if i > 0 {
                    println!("\n{}\n", "=".repeat(60).dimmed());
                }
                println!("{} {}", "Variation:".bold(), variation.strategy.cyan());
                print_prompt(&variation.prompt);
            }
        }
        return Ok(());
    }

    let result = match args.mode {
        PromptMode::Standard => prompt::generate_prompt(&params),
        PromptMode::Enhanced => prompt::generate_enhanced_prompt(&params),
        PromptMode::ContextAware => prompt::generate_context_aware_prompt(&params),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_prompt(&result);
    }
    Ok(())
}

fn print_prompt(result: &PromptResult) {
    if let Some(t) = result.recommended_temperature {
        println!("{} {t:.1}", "Temperature:".dimmed());
    }
    println!("\n{}", "SYSTEM".bold().underline());
    println!("{}", result.system_message);
    println!("\n{}", "USER".bold().underline());
    println!("{}", result.user_prompt);
}

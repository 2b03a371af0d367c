//! Synthesize command: produce platform content locally, without a model.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use recast_core::synthesis;

use super::read_content;

/// Arguments for the `synthesize` subcommand.
#[derive(Args, Debug)]
pub struct SynthesizeArgs {
    /// Source file (`.md` files are flattened first).
    pub file: Utf8PathBuf,

    /// Output format: twitter, linkedin or instagram.
    #[arg(short, long)]
    pub format: String,
}

#[derive(Serialize)]
struct SynthesisOutput<'a> {
    format: &'a str,
    content: String,
}

/// Print synthesized content for a file.
#[instrument(name = "cmd_synthesize", skip_all, fields(file = %args.file, format = %args.format))]
pub fn cmd_synthesize(
    args: SynthesizeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing synthesize command");

    let content = read_content(&args.file, max_input_bytes)?;
    let output = synthesis::synthesize(&args.format, &content);
    if output == synthesis::UNSUPPORTED_FORMAT {
        bail!("{} Use: twitter, linkedin, instagram", synthesis::UNSUPPORTED_FORMAT);
    }

    if global_json {
        let out = SynthesisOutput {
            format: &args.format,
            content: output,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{output}");
    }
    Ok(())
}

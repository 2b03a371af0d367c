//! Analyze command: readability, engagement, clarity, CTA and hashtags.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use recast_core::Platform;
use recast_core::analysis::{self, ContentAnalysis, EnhancedContentAnalysis};

use super::read_content;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`.md` files are flattened first).
    pub file: Utf8PathBuf,

    /// Platform used for hashtag suggestions.
    #[arg(short, long, value_enum, default_value_t = Platform::Twitter)]
    pub platform: Platform,

    /// Include key insights, themes and transformation readiness.
    #[arg(long)]
    pub enhanced: bool,
}

/// Analyze a file and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file, platform = %args.platform))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(enhanced = args.enhanced, "executing analyze command");

    let content = read_content(&args.file, max_input_bytes)?;

    if args.enhanced {
        let report = analysis::analyze_content_enhanced(&content, args.platform);
        if global_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", args.file.bold());
            print_base(&report.base);
            print_enhanced(&report);
        }
    } else {
        let report = analysis::analyze_content(&content, args.platform);
        if global_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", args.file.bold());
            print_base(&report);
        }
    }

    Ok(())
}

fn print_base(report: &ContentAnalysis) {
    let m = &report.metrics;
    println!(
        "\n  {} {} words, {} sentences, {} paragraphs, ~{} min read",
        "Metrics:".cyan(),
        m.word_count,
        m.sentence_count,
        m.paragraph_count,
        m.reading_time_minutes,
    );

    let r = &report.readability;
    println!(
        "\n  {} Flesch {:.1} ({}), {:.1} words/sentence",
        "Readability:".cyan(),
        r.flesch_score,
        r.reading_level,
        r.avg_words_per_sentence,
    );

    println!("\n  {} {}", "Engagement:".cyan(), score(report.engagement.score));
    for factor in &report.engagement.factors {
        println!("    {} {factor}", "+".green());
    }
    for suggestion in &report.engagement.suggestions {
        println!("    {} {suggestion}", "-".yellow());
    }

    println!("\n  {} {}", "Clarity:".cyan(), score(report.clarity.score));
    for issue in &report.clarity.issues {
        println!("    {} {issue}", "!".yellow());
    }
    for improvement in &report.clarity.improvements {
        println!("    {} {improvement}", "-".dimmed());
    }

    let cta = &report.cta;
    if cta.phrases.is_empty() {
        println!("\n  {} {}", "Call to action:".cyan(), cta.strength);
    } else {
        println!(
            "\n  {} {} ({})",
            "Call to action:".cyan(),
            cta.strength,
            cta.phrases.join(", "),
        );
    }
    for suggestion in &cta.suggestions {
        println!("    {} {suggestion}", "-".dimmed());
    }

    let h = &report.hashtags;
    if !h.extracted.is_empty() {
        println!("\n  {} {}", "Hashtags found:".cyan(), h.extracted.join(" "));
    }
    println!("\n  {} {}", "Suggested hashtags:".cyan(), h.suggested.join(" "));
}

fn print_enhanced(report: &EnhancedContentAnalysis) {
    let readiness = &report.transformation_readiness;
    println!(
        "\n  {} {}",
        "Transformation readiness:".cyan(),
        score(readiness.score)
    );
    for strength in &readiness.strengths {
        println!("    {} {strength}", "+".green());
    }
    for challenge in &readiness.challenges {
        println!("    {} {challenge}", "-".yellow());
    }

    if !report.main_themes.main_theme.is_empty() {
        println!("\n  {} {}", "Main theme:".cyan(), report.main_themes.main_theme);
    }
    if !report.main_themes.sub_themes.is_empty() {
        println!(
            "  {} {}",
            "Sub-themes:".cyan(),
            report.main_themes.sub_themes.join("; ")
        );
    }

    if !report.key_insights.is_empty() {
        println!("\n  {}", "Key insights:".cyan());
        for insight in &report.key_insights {
            println!("    [{}] {}", insight.score, insight.text);
        }
    }
}

fn score(value: f64) -> String {
    let text = format!("{value:.0}/100");
    if value >= 70.0 {
        text.green().to_string()
    } else if value >= 50.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const POST: &str = "How to save 10 hours a week. Most people waste time on busywork. \
                    The key lesson is to start with one habit. What do you think?";

/// Returns a Command configured to run our binary.
///
/// Remote services are disabled by pointing their key variables at unset names.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("RECAST_GENERATION__API_KEY_ENV", "RECAST_TEST_NO_SUCH_KEY")
        .env("RECAST_HASHTAG_SERVICE__API_KEY_ENV", "RECAST_TEST_NO_SUCH_KEY");
    cmd
}

fn write_post(tmp: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = tmp.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("transform"))
        .stdout(predicate::str::contains("synthesize"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// =============================================================================
// Info & Global Flags
// =============================================================================

#[test]
fn info_json_outputs_valid_json() {
    let json = stdout_json(cmd().args(["info", "--json"]));
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["generation"]["api_key_set"], false);
}

#[test]
fn global_flags_accepted() {
    cmd().args(["-q", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn analyze_json_reports_scores() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    let json = stdout_json(cmd().args(["analyze", post.to_str().unwrap(), "--json"]));
    assert_eq!(json["cta"]["strength"], "weak");
    assert!(json["cta"]["phrases"].as_array().unwrap().is_empty());
    let factors = json["engagement"]["factors"].as_array().unwrap();
    assert!(factors.iter().any(|f| f == "Contains engaging questions"));
    assert!(json["hashtags"]["suggested"].as_array().unwrap().len() <= 5);
}

#[test]
fn analyze_enhanced_adds_readiness() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.md", &format!("# Time\n\n{POST}"));

    let json = stdout_json(cmd().args([
        "analyze",
        post.to_str().unwrap(),
        "--enhanced",
        "--platform",
        "linkedin",
        "--json",
    ]));
    assert!(json["transformationReadiness"]["score"].as_f64().is_some());
    assert_eq!(json["mainThemes"]["subThemes"][0], "Time");
}

#[test]
fn analyze_text_output() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    cmd()
        .args(["--color", "never", "analyze", post.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Readability:"))
        .stdout(predicate::str::contains("Engagement:"));
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/post.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn oversized_input_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);
    std::fs::write(tmp.path().join(".recast.toml"), "max_input_bytes = 16\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", post.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Hashtags
// =============================================================================

#[test]
fn hashtags_respect_platform_cap() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", "Coding with AI is the future. #AI #coding");

    let json = stdout_json(cmd().args([
        "hashtags",
        post.to_str().unwrap(),
        "--platform",
        "twitter",
        "--json",
    ]));
    assert_eq!(json["extracted"], serde_json::json!(["#AI", "#coding"]));
    let suggested = json["suggested"].as_array().unwrap();
    assert!(suggested.len() <= 5);
    assert!(!suggested.iter().any(|t| t == "#AI"));
}

#[test]
fn hashtags_ai_without_key_fails() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    cmd()
        .args(["hashtags", post.to_str().unwrap(), "-p", "instagram", "--ai"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RECAST_TEST_NO_SUCH_KEY"));
}

// =============================================================================
// Prompt
// =============================================================================

#[test]
fn prompt_context_aware_json() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    let json = stdout_json(cmd().args([
        "prompt",
        post.to_str().unwrap(),
        "--platform",
        "linkedin",
        "--tone",
        "professional",
        "--json",
    ]));
    assert_eq!(json["recommendedTemperature"], 0.6);
    assert!(json["userPrompt"].as_str().unwrap().contains("---BEGIN CONTENT---"));
}

#[test]
fn prompt_standard_mode_has_no_temperature() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    let json = stdout_json(cmd().args([
        "prompt",
        post.to_str().unwrap(),
        "-p",
        "twitter",
        "--mode",
        "standard",
        "--json",
    ]));
    assert!(json.get("recommendedTemperature").is_none());
}

#[test]
fn prompt_uses_configured_instructions() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);
    std::fs::write(
        tmp.path().join(".recast.toml"),
        "[instructions]\ntext = \"Always mention the podcast.\"\n",
    )
    .unwrap();

    let json = stdout_json(cmd().args([
        "-C",
        tmp.path().to_str().unwrap(),
        "prompt",
        post.to_str().unwrap(),
        "-p",
        "instagram",
        "--json",
    ]));
    assert!(
        json["systemMessage"]
            .as_str()
            .unwrap()
            .contains("Always mention the podcast.")
    );
}

#[test]
fn prompt_variations_json() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    let json = stdout_json(cmd().args([
        "prompt",
        post.to_str().unwrap(),
        "-p",
        "twitter",
        "--variations",
        "2",
        "--json",
    ]));
    let variations = json.as_array().unwrap();
    assert!(!variations.is_empty() && variations.len() <= 2);
}

#[test]
fn prompt_rejects_unknown_platform() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    cmd()
        .args(["prompt", post.to_str().unwrap(), "-p", "tiktok"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tiktok"));
}

// =============================================================================
// Synthesize & Transform
// =============================================================================

#[test]
fn synthesize_thread() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    cmd()
        .args(["synthesize", post.to_str().unwrap(), "--format", "twitter"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1/"));
}

#[test]
fn synthesize_unknown_format_fails() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    cmd()
        .args(["synthesize", post.to_str().unwrap(), "--format", "tiktok"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available for this format"));
}

#[test]
fn transform_offline_marks_results_mock() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    let json = stdout_json(cmd().args([
        "transform",
        post.to_str().unwrap(),
        "--platforms",
        "twitter,linkedin,instagram",
        "--offline",
        "--json",
    ]));
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r["mock"] == true));
    assert_eq!(results[1]["format"], "carousel");
}

#[test]
fn transform_without_key_falls_back() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    let json = stdout_json(cmd().args([
        "transform",
        post.to_str().unwrap(),
        "-p",
        "instagram",
        "--json",
    ]));
    assert_eq!(json[0]["mock"], true);
    assert!(json[0]["content"].as_str().unwrap().contains("[0-3s] HOOK"));
}

#[test]
fn transform_requires_platforms() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    cmd()
        .args(["transform", post.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--platforms"));
}

#[test]
fn transform_rejects_too_many_platforms() {
    let tmp = TempDir::new().unwrap();
    let post = write_post(&tmp, "post.txt", POST);

    cmd()
        .args([
            "transform",
            post.to_str().unwrap(),
            "-p",
            "twitter,twitter,linkedin,instagram",
            "--offline",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many target platforms"));
}

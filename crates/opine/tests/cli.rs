//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::NamedTempFile;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write content to a fresh temp file and return the handle.
fn input_file(content: &str) -> NamedTempFile {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), content).unwrap();
    tmp
}

/// Run a subcommand with `--json` on a file and parse the output.
fn run_json(subcommand: &str, content: &str, extra: &[&str]) -> Value {
    let tmp = input_file(content);
    let mut args = vec![subcommand, tmp.path().to_str().unwrap(), "--json"];
    args.extend_from_slice(extra);
    let output = cmd().args(&args).output().expect("failed to run command");
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
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
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

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

// =============================================================================
// Sentiment Command
// =============================================================================

#[test]
fn sentiment_counts_blank_lines_as_no_opinion() {
    // Blank lines are absent responses and must not reach any bucket.
    let json = run_json(
        "sentiment",
        "Great support, very helpful\nPoor response time\n\n   \n",
        &[],
    );
    assert_eq!(json["positive"], 1);
    assert_eq!(json["negative"], 1);
    assert_eq!(json["neutral"], 0);
    assert_eq!(json["uncategorized"], 0);
    assert_eq!(json["total_comments"], 2);
}

#[test]
fn sentiment_buckets_sum_to_comment_count() {
    let json = run_json(
        "sentiment",
        "excellent work\nokay I suppose\nno opinion here\nworse than before\n",
        &[],
    );
    let sum = json["positive"].as_u64().unwrap()
        + json["negative"].as_u64().unwrap()
        + json["neutral"].as_u64().unwrap()
        + json["uncategorized"].as_u64().unwrap();
    assert_eq!(sum, json["total_comments"].as_u64().unwrap());
    assert_eq!(sum, 4);
}

#[test]
fn mixed_comment_is_positive_by_priority() {
    // Positive keywords are checked before negative; a comment with both
    // counts once, as positive. Swapping the order would flip this.
    let json = run_json("sentiment", "good and bad service\n", &[]);
    assert_eq!(json["positive"], 1);
    assert_eq!(json["negative"], 0);
}

#[test]
fn sentiment_whole_word_mode_changes_matching() {
    // Substring mode reads the "like" inside "dislike" as positive.
    let substring = run_json("sentiment", "i dislike this\n", &[]);
    assert_eq!(substring["positive"], 1);

    let whole_word = run_json("sentiment", "i dislike this\n", &["--match-mode", "whole-word"]);
    assert_eq!(whole_word["positive"], 0);
    assert_eq!(whole_word["negative"], 1);
}

#[test]
fn sentiment_text_output_shows_buckets() {
    let tmp = input_file("great service\n");
    cmd()
        .args(["sentiment", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Positive:"))
        .stdout(predicate::str::contains("Uncategorized:"));
}

// =============================================================================
// Categories Command
// =============================================================================

#[test]
fn categories_match_independently() {
    let json = run_json(
        "categories",
        "Great support, very helpful\nPoor response time\n\n",
        &[],
    );
    let categories = json["categories"].as_array().unwrap();
    let count_of = |label: &str| {
        categories
            .iter()
            .find(|c| c["label"] == label)
            .map(|c| c["count"].as_u64().unwrap())
            .unwrap()
    };
    assert_eq!(count_of("Support"), 1);
    assert_eq!(count_of("Response Time"), 1);
    assert_eq!(count_of("Communication"), 0);
    assert_eq!(json["uncategorized"], 0);
    assert_eq!(json["total_comments"], 2);
}

#[test]
fn one_comment_can_hit_multiple_categories() {
    let json = run_json("categories", "support took time to fix the bug\n", &[]);
    let total: u64 = json["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["count"].as_u64().unwrap())
        .sum();
    assert!(total >= 3, "expected Support, Technical Issues, Response Time");
    assert_eq!(json["categorized_comments"], 1);
    assert_eq!(json["total_comments"], 1);
}

#[test]
fn uncategorized_comments_are_counted_separately() {
    let json = run_json("categories", "nothing to report\n", &[]);
    assert_eq!(json["uncategorized"], 1);
    assert_eq!(json["categorized_comments"], 0);
}

// =============================================================================
// Terms Command
// =============================================================================

#[test]
fn terms_ranked_descending_and_bounded() {
    let json = run_json(
        "terms",
        "slow service on the train\nservice was slow\ntrain service is good\ncrowded train\n",
        &[],
    );
    let terms = json["terms"].as_array().unwrap();
    assert!(!terms.is_empty());
    assert!(terms.len() <= 10);
    let counts: Vec<u64> = terms.iter().map(|t| t["count"].as_u64().unwrap()).collect();
    let mut sorted = counts.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(counts, sorted, "terms must be sorted by count descending");
    assert!(counts.iter().all(|&c| c > 0));
}

#[test]
fn terms_single_comment_corpus_is_empty() {
    // One comment cannot satisfy the min-document-count threshold of 2.
    let json = run_json("terms", "great service, very helpful\n", &[]);
    assert!(json["terms"].as_array().unwrap().is_empty());
    assert_eq!(json["total_comments"], 1);
}

#[test]
fn terms_empty_result_prints_notice_not_error() {
    let tmp = input_file("just one comment\n");
    cmd()
        .args(["terms", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "no terms met the document-frequency thresholds",
        ));
}

#[test]
fn terms_top_flag_limits_output() {
    let json = run_json(
        "terms",
        "alpha beta gamma\nalpha beta\nalpha beta gamma\nomega alone\n",
        &["--top", "2"],
    );
    let terms = json["terms"].as_array().unwrap();
    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0]["term"], "alpha");
    assert_eq!(terms[1]["term"], "beta");
}

#[test]
fn terms_rerun_is_identical() {
    let content = "service was slow\nslow train service\nthe train was late\n";
    let first = run_json("terms", content, &[]);
    let second = run_json("terms", content, &[]);
    assert_eq!(first, second);
}

// =============================================================================
// Ratings Command
// =============================================================================

#[test]
fn ratings_tallied_in_display_order() {
    let json = run_json(
        "ratings",
        "Satisfied\nVery Satisfied\nSatisfied\n\nNot Applicable\n",
        &[],
    );
    let levels = json["levels"].as_array().unwrap();
    let labels: Vec<&str> = levels.iter().map(|l| l["label"].as_str().unwrap()).collect();
    assert_eq!(
        labels,
        [
            "Very Satisfied",
            "Satisfied",
            "Neutral",
            "Dissatisfied",
            "Very Dissatisfied",
            "Not Applicable"
        ]
    );
    let counts: Vec<u64> = levels.iter().map(|l| l["count"].as_u64().unwrap()).collect();
    assert_eq!(counts, [1, 2, 0, 0, 0, 1]);
    assert_eq!(json["total_responses"], 4);
}

#[test]
fn ratings_unknown_values_are_unrecognized() {
    let json = run_json("ratings", "Satisfied\nMeh\n", &[]);
    assert_eq!(json["unrecognized"], 1);
    assert_eq!(json["total_responses"], 2);
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_json_contains_all_sections() {
    let json = run_json(
        "analyze",
        "The support team was helpful\nLong wait, poor communication\nAverage experience\n",
        &[],
    );
    assert!(json["sentiment"].is_object());
    assert!(json["categories"].is_object());
    assert!(json["terms"].is_object());
}

#[test]
fn analyze_checks_flag_selects_passes() {
    let json = run_json("analyze", "Great support\nBad delays\n", &["--checks", "sentiment"]);
    assert!(json["sentiment"].is_object());
    assert!(json.get("categories").is_none());
    assert!(json.get("terms").is_none());
}

#[test]
fn analyze_unknown_check_name_is_ignored() {
    let json = run_json(
        "analyze",
        "Great support\n",
        &["--checks", "sentiment,wordcloud"],
    );
    assert!(json["sentiment"].is_object());
    assert!(json.get("terms").is_none());
}

#[test]
fn analyze_text_output_has_sections() {
    let tmp = input_file("Great support\nBad delays\n");
    cmd()
        .args(["analyze", tmp.path().to_str().unwrap(), "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentiment:"))
        .stdout(predicate::str::contains("Categories:"))
        .stdout(predicate::str::contains("Terms:"));
}

#[test]
fn analyze_empty_file_is_valid() {
    let json = run_json("analyze", "", &[]);
    assert_eq!(json["sentiment"]["total_comments"], 0);
    assert!(json["terms"]["terms"].as_array().unwrap().is_empty());
}

// =============================================================================
// Input Size Limit
// =============================================================================

#[test]
fn oversized_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("opine.toml");
    std::fs::write(&config_path, "max_input_bytes = 16\n").unwrap();

    let input_path = dir.path().join("comments.txt");
    std::fs::write(&input_path, "a comment that is longer than sixteen bytes\n").unwrap();

    cmd()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "sentiment",
            input_path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn missing_input_file_fails() {
    cmd()
        .args(["sentiment", "/nonexistent/comments.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

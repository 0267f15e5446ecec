//! CLI integration tests
use std::path::{Path, PathBuf};

use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("lexis")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn fixture_url(name: &str) -> String {
    let path = std::fs::canonicalize(get_fixture_path(name)).expect("fixture should exist");
    format!("file://{}", path.display())
}

/// Writes an input table with the given (URL_ID, URL) rows.
fn write_input(dir: &Path, rows: &[(&str, &str)]) -> PathBuf {
    let path = dir.join("Input.csv");
    let mut contents = String::from("URL_ID,URL\n");
    for (id, url) in rows {
        contents.push_str(&format!("{},{}\n", id, url));
    }
    std::fs::write(&path, contents).unwrap();
    path
}

fn run_report(tmp: &TempDir, rows: &[(&str, &str)], output: &str) -> assert_cmd::assert::Assert {
    let input = write_input(tmp.path(), rows);
    cmd()
        .arg(&input)
        .args(["-o", tmp.path().join(output).to_str().unwrap()])
        .args(["--lexicon-dir", &get_fixture_path("lexicon")])
        .assert()
}

#[test]
fn test_cli_scores_rows_and_skips_failures() {
    let tmp = TempDir::new().unwrap();
    let article = fixture_url("article.html");

    run_report(&tmp, &[("1", article.as_str()), ("2", "not-a-url"), ("3", article.as_str())], "Output.csv")
        .success()
        .stderr(predicate::str::contains("Scored 2 of 3 articles"))
        .stderr(predicate::str::contains("Skipped 1 of 3 rows"));

    let output = std::fs::read_to_string(tmp.path().join("Output.csv")).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("URL_ID,URL,POSITIVE SCORE,NEGATIVE SCORE,POLARITY SCORE"));
    assert!(lines[1].starts_with("1,file://"));
    assert!(lines[2].starts_with("3,file://"));
}

#[test]
fn test_cli_json_output_inferred_from_extension() {
    let tmp = TempDir::new().unwrap();
    let article = fixture_url("article.html");

    run_report(&tmp, &[("bctech2011", article.as_str())], "Output.json").success();

    let json = std::fs::read_to_string(tmp.path().join("Output.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["URL_ID"], "bctech2011");
    assert_eq!(rows[0]["POSITIVE SCORE"], 5);
    assert_eq!(rows[0]["NEGATIVE SCORE"], 4);
    assert_eq!(rows[0]["PERSONAL PRONOUNS"], 3);
}

#[test]
fn test_cli_xlsx_output_is_default_format() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[("1", fixture_url("article.html").as_str())]);

    cmd()
        .current_dir(tmp.path())
        .arg(&input)
        .args(["--lexicon-dir", std::fs::canonicalize(get_fixture_path("lexicon")).unwrap().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Output.xlsx"));

    let bytes = std::fs::read(tmp.path().join("Output.xlsx")).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_cli_format_flag_overrides_extension() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[("1", fixture_url("article.html").as_str())]);
    let output = tmp.path().join("report.txt");

    cmd()
        .arg(&input)
        .args(["-o", output.to_str().unwrap(), "-f", "json"])
        .args(["--lexicon-dir", &get_fixture_path("lexicon")])
        .assert()
        .success();

    let contents = std::fs::read_to_string(output).unwrap();
    assert!(contents.trim_start().starts_with('['));
}

#[test]
fn test_cli_all_rows_failing_still_writes_header() {
    let tmp = TempDir::new().unwrap();

    run_report(
        &tmp,
        &[("1", "not-a-url"), ("2", fixture_url("empty_content.html").as_str())],
        "Output.csv",
    )
    .success()
    .stderr(predicate::str::contains("Scored 0 of 2 articles"));

    let output = std::fs::read_to_string(tmp.path().join("Output.csv")).unwrap();
    assert_eq!(output.lines().count(), 1);
    assert!(output.ends_with("AVG WORD LENGTH\n"));
}

#[test]
fn test_cli_invalid_input_file() {
    cmd()
        .args(["nonexistent.csv", "--lexicon-dir", &get_fixture_path("lexicon")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input table"));
}

#[test]
fn test_cli_missing_lexicons() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[("1", "https://example.com")]);

    cmd()
        .arg(&input)
        .args(["--lexicon-dir", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load lexicons"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["Input.csv", "-f", "parquet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_cli_requires_input() {
    cmd().assert().failure();
}

#[test]
fn test_cli_verbose() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(tmp.path(), &[("1", fixture_url("article.html").as_str())]);

    cmd()
        .arg(&input)
        .args(["-v", "-o", tmp.path().join("Output.csv").to_str().unwrap()])
        .args(["--lexicon-dir", &get_fixture_path("lexicon")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Lexis"))
        .stderr(predicate::str::contains("Writing report"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lexis"))
        .stdout(predicate::str::contains("--lexicon-dir"))
        .stdout(predicate::str::contains("--user-agent"));
}

#[test]
fn test_generated_completions_use_hyphenated_flags() {
    let completions = Path::new(env!("OUT_DIR")).join("completions");

    for script in ["lexis.bash", "_lexis", "lexis.fish"] {
        let contents = std::fs::read_to_string(completions.join(script)).unwrap();
        assert!(contents.contains("lexicon-dir"), "{} lacks --lexicon-dir", script);
        assert!(contents.contains("user-agent"), "{} lacks --user-agent", script);
        assert!(!contents.contains("lexicon_dir"), "{} offers --lexicon_dir", script);
        assert!(!contents.contains("user_agent"), "{} offers --user_agent", script);
    }
}

//! CLI Integration Tests for tweetsense-cli

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn tweetsense() -> Command {
    let mut cmd = Command::cargo_bin("tweetsense").expect("Failed to find tweetsense binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Writes 16 alternating positive/negative tweets and their labels.
fn write_corpus(dir: &Path) {
    let positive = [
        "love this so much!",
        "great day, love it",
        "so happy and great",
        "love love love",
        "what a great film",
        "happy happy day",
        "great news, so happy",
        "love the sunshine",
    ];
    let negative = [
        "hate this so much.",
        "awful day, hate it",
        "so sad and awful",
        "hate hate hate",
        "what an awful film",
        "sad sad day",
        "awful news, so sad",
        "hate the rain",
    ];
    let mut tweets = String::new();
    let mut labels = String::new();
    for (p, n) in positive.iter().zip(negative.iter()) {
        tweets.push_str(&format!("{p}\n{n}\n"));
        labels.push_str("1\n-1\n");
    }
    std::fs::write(dir.join("tweets.txt"), tweets).unwrap();
    std::fs::write(dir.join("labels.txt"), labels).unwrap();
}

fn run_args(dir: &Path) -> Vec<String> {
    vec![
        "run".to_string(),
        "--tweets".to_string(),
        dir.join("tweets.txt").display().to_string(),
        "--labels".to_string(),
        dir.join("labels.txt").display().to_string(),
        "--train-size".to_string(),
        "12".to_string(),
        "--folds".to_string(),
        "3".to_string(),
        "-q".to_string(),
    ]
}

#[test]
fn test_help_flag() {
    tweetsense()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("vocab"));
}

#[test]
fn test_version_flag() {
    tweetsense()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tweetsense"));
}

#[test]
fn test_config_prints_defaults() {
    tweetsense()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("train_size = 560"))
        .stdout(predicate::str::contains("n_folds = 5"));
}

#[test]
fn test_config_applies_overrides() {
    tweetsense()
        .args(["config", "--folds", "10", "--metric", "auroc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n_folds = 10"))
        .stdout(predicate::str::contains("auroc"))
        .stdout(predicate::str::contains("f1_score").not());
}

#[test]
fn test_run_text_report() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    tweetsense()
        .args(run_args(dir.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Hyperparameter selection (accuracy)"))
        .stdout(predicate::str::contains("Held-out performance"))
        .stdout(predicate::str::contains("12 / 4"));
}

#[test]
fn test_run_json_report() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let output = tweetsense()
        .args(run_args(dir.path()))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["n_examples"], 16);
    assert_eq!(report["n_train"], 12);
    assert_eq!(report["selections"].as_array().unwrap().len(), 3);
    assert_eq!(report["selections"][0]["metric"], "accuracy");
    assert_eq!(report["selections"][0]["candidates"].as_array().unwrap().len(), 6);
    let candidate = &report["selections"][0]["candidates"][0];
    assert!(candidate["std"].as_f64().unwrap() >= 0.0);
    assert!(candidate["min"].as_f64().unwrap() <= candidate["max"].as_f64().unwrap());
    assert_eq!(report["test_scores"].as_array().unwrap().len(), 3);
}

#[test]
fn test_run_unknown_metric_exit_code() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    tweetsense()
        .args(run_args(dir.path()))
        .args(["--metric", "recall"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("recall"));
}

#[test]
fn test_run_missing_tweets_exit_code() {
    let dir = TempDir::new().unwrap();

    tweetsense()
        .args(run_args(dir.path()))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_run_bad_label_exit_code() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());
    std::fs::write(dir.path().join("labels.txt"), "1\nmaybe\n").unwrap();

    tweetsense()
        .args(run_args(dir.path()))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_vocab_lists_tokens_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tweets.txt"), "Hi!\nbye.\n").unwrap();

    let output = tweetsense()
        .args(["vocab", "--json", "--tweets"])
        .arg(dir.path().join("tweets.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["size"], 4);
    assert_eq!(summary["tokens"], serde_json::json!(["hi", "!", "bye", "."]));
}

// Drives the compiled binary with assert_cmd. Every run points --config at a
// temp dir so the user's own settings are never read or written.

use assert_cmd::Command;
use std::path::Path;

fn vocab_quiz(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vocab-quiz").unwrap();
    cmd.arg("--config").arg(config_dir.join("config.json"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn list_pools_prints_embedded_names() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(vocab_quiz(dir.path()).arg("--list-pools"));

    assert!(out.lines().any(|l| l == "basics"));
    assert!(out.lines().any(|l| l == "kitchen"));
}

#[test]
fn json_output_has_requested_shape() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(vocab_quiz(dir.path()).args([
        "--pool",
        "basics",
        "--questions",
        "3",
        "--options",
        "2",
        "--seed",
        "4",
        "--json",
    ]));

    let questions: serde_json::Value = serde_json::from_str(&out).unwrap();
    let questions = questions.as_array().unwrap();
    assert_eq!(questions.len(), 3);
    for question in questions {
        let options = question["options"].as_array().unwrap();
        assert_eq!(options.len(), 3);
        assert!(options.contains(&question["correct_answer"]));
    }
}

#[test]
fn seeded_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let args = ["--pool", "kitchen", "--questions", "4", "--seed", "17"];

    let first = stdout_of(vocab_quiz(dir.path()).args(args));
    let second = stdout_of(vocab_quiz(dir.path()).args(args));
    assert_eq!(first, second);
    assert!(first.starts_with("1. "));
}

#[test]
fn single_word_question() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(vocab_quiz(dir.path()).args([
        "--word",
        "basics-001",
        "--direction",
        "target-to-source",
        "--json",
    ]));

    let questions: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(questions[0]["prompt"], "koşmak");
    assert_eq!(questions[0]["correct_answer"], "run");
}

#[test]
fn unknown_word_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    vocab_quiz(dir.path())
        .args(["--word", "does-not-exist"])
        .assert()
        .failure();
}

#[test]
fn unknown_pool_fails() {
    let dir = tempfile::tempdir().unwrap();
    vocab_quiz(dir.path())
        .args(["--pool", "klingon"])
        .assert()
        .failure();
}

#[test]
fn save_config_persists_flags() {
    let dir = tempfile::tempdir().unwrap();
    stdout_of(vocab_quiz(dir.path()).args([
        "--pool",
        "kitchen",
        "--options",
        "2",
        "--save-config",
        "--seed",
        "1",
    ]));

    let saved: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("config.json")).unwrap()).unwrap();
    assert_eq!(saved["pool"], "kitchen");
    assert_eq!(saved["max_options"], 2);

    // later runs pick the stored settings up
    let out = stdout_of(vocab_quiz(dir.path()).args(["--questions", "1", "--json"]));
    let questions: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 3);
    assert!(questions[0]["word_id"].as_str().unwrap().starts_with("kitchen-"));
}

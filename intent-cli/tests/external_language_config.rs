//! Integration tests for external language configuration

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn intent() -> Command {
    Command::cargo_bin("intent").unwrap()
}

/// Test generating language configuration template
#[test]
fn test_generate_config_command() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("test_lang.toml");

    intent()
        .args([
            "generate-config",
            "--language-code",
            "test",
            "--output",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration template generated successfully",
        ));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("code = \"test\""));
    assert!(content.contains("[metadata]"));
    assert!(content.contains("[lexicon]"));
}

/// A generated template validates and classifies without edits
#[test]
fn test_generated_template_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    let config = config_path.to_str().unwrap();

    intent()
        .args(["generate-config", "-l", "xx", "-o", config])
        .assert()
        .success();

    intent()
        .args(["validate", "-c", config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Language code: xx"));

    intent()
        .args(["classify", "play the gadget", "-c", config])
        .assert()
        .success()
        .stdout("play the gadget\tplay\tgadget\t-\n");
}

#[test]
fn test_validate_with_sample() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("valid.toml");
    fs::write(
        &config_path,
        r#"
[metadata]
code = "gadget"
name = "Gadget English"

[lexicon]
zap = ["VB"]
the = ["DT"]
"#,
    )
    .unwrap();

    intent()
        .args([
            "validate",
            "-c",
            config_path.to_str().unwrap(),
            "--sample",
            "zap the gizmo",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lexicon entries: 2"))
        .stdout(predicate::str::contains("intent: zap"))
        .stdout(predicate::str::contains("context: gizmo"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("invalid.toml");
    fs::write(
        &config_path,
        r#"
[metadata]
code = "broken"
name = "Broken"

[lexicon]
zap = []
"#,
    )
    .unwrap();

    intent()
        .args(["validate", "-c", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"))
        .stderr(predicate::str::contains("has no tags"));
}

#[test]
fn test_validate_malformed_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("malformed.toml");
    fs::write(&config_path, "[metadata\ncode = ").unwrap();

    intent()
        .args(["validate", "-c", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse configuration"));
}

#[test]
fn test_classify_with_missing_language_config() {
    intent()
        .args(["classify", "pause music", "-c", "/nonexistent/lang.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid language configuration"));
}

#[test]
fn test_language_config_from_cli_config() {
    let temp_dir = TempDir::new().unwrap();
    let language_path = temp_dir.path().join("gadget.toml");
    fs::write(
        &language_path,
        r#"
[metadata]
code = "gadget"
name = "Gadget English"

[lexicon]
zap = ["VB"]
"#,
    )
    .unwrap();

    let config_path = temp_dir.path().join("intent.toml");
    fs::write(
        &config_path,
        format!(
            "[classification]\nlanguage_config = {:?}\n",
            language_path.to_str().unwrap()
        ),
    )
    .unwrap();

    intent()
        .args(["classify", "zap gizmo", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("zap gizmo\tzap\tgizmo\t-\n");
}

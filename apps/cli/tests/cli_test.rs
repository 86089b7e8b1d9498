//! Integration tests for the `artdoc` binary.
//!
//! Every command runs with HOME and the working directory pointed at a temp dir so
//! no user configuration leaks in, and the gateway URL points at a closed port.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn artdoc(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("artdoc").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env("ARTDOC_BASE_URL", "http://127.0.0.1:9/v1beta")
        .env_remove("ARTDOC_API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("ARTDOC_MODEL")
        .env_remove("ARTDOC_MODEL_TYPE")
        .env_remove("ARTDOC_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_tools() {
    let temp_dir = TempDir::new().unwrap();
    artdoc(&temp_dir).arg("--help").assert().success().stdout(
        predicate::str::contains("chat")
            .and(predicate::str::contains("calc"))
            .and(predicate::str::contains("translate"))
            .and(predicate::str::contains("transcribe"))
            .and(predicate::str::contains("diagram")),
    );
}

#[test]
fn test_missing_api_key_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    artdoc(&temp_dir)
        .args(["calc", "2+2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ARTDOC_API_KEY"));
}

#[test]
fn test_gemini_key_fallback_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    artdoc(&temp_dir)
        .env("GEMINI_API_KEY", "fallback-key")
        .args(["translate", "   ", "--to", "es"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter text to translate."));
}

#[test]
fn test_blank_calculation_rejected_before_any_request() {
    let temp_dir = TempDir::new().unwrap();
    artdoc(&temp_dir)
        .env("ARTDOC_API_KEY", "test-key")
        .args(["calc", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a calculation or question."));
}

#[test]
fn test_unreachable_gateway_degrades_to_fallback() {
    let temp_dir = TempDir::new().unwrap();
    artdoc(&temp_dir)
        .env("ARTDOC_API_KEY", "test-key")
        .args(["calc", "2+2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorry, I couldn't process that calculation."));
}

#[test]
fn test_config_redacts_key() {
    let temp_dir = TempDir::new().unwrap();
    artdoc(&temp_dir)
        .env("ARTDOC_API_KEY", "super-secret-key")
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<redacted>")
                .and(predicate::str::contains("super-secret-key").not())
                .and(predicate::str::contains("gemini-2.5-flash")),
        );
}

#[test]
fn test_config_reads_local_file_and_model_flag() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".artdocrc"), "timeout_secs = 5\nmodel = \"gemini-2.5-pro\"\n")
        .unwrap();

    artdoc(&temp_dir)
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"timeout_secs\": 5").and(predicate::str::contains("gemini-2.5-pro")));

    artdoc(&temp_dir)
        .args(["--model", "gemini-2.0-flash", "config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini-2.0-flash"));
}

#[test]
fn test_malformed_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "model = [").unwrap();

    artdoc(&temp_dir)
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_missing_image_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    artdoc(&temp_dir)
        .env("ARTDOC_API_KEY", "test-key")
        .args(["diagram", "missing.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.png"));
}

#[test]
fn test_ask_with_empty_document_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("empty.txt"), "\n").unwrap();

    artdoc(&temp_dir)
        .env("ARTDOC_API_KEY", "test-key")
        .args(["ask", "--document", "empty.txt", "What is this?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please provide document content and a question."));
}

#[test]
fn test_chat_history_and_exit() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "Launch is on Monday.").unwrap();

    artdoc(&temp_dir)
        .env("ARTDOC_API_KEY", "test-key")
        .args(["chat", "--document", "notes.txt"])
        .write_stdin("/history\n/exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages yet."));
}

#[test]
fn test_chat_reset_when_idle() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "Launch is on Monday.").unwrap();

    artdoc(&temp_dir)
        .env("ARTDOC_API_KEY", "test-key")
        .args(["chat", "--document", "notes.txt"])
        .write_stdin("/reset\n/exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversation history cleared."));
}

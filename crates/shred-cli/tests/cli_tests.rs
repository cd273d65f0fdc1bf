//! Integration tests for the shred CLI
//!
//! Every test points `SHRED_CONFIG` at a temporary location so a user's
//! configuration file never influences the results.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command for the shred binary with an isolated config path
#[allow(deprecated)]
fn shred(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shred").unwrap();
    cmd.env("SHRED_CONFIG", config_dir.join("shred_config.toml"));
    cmd
}

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    shred(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("random data"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("wipe"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    shred(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shred"))
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_no_args_shows_help() {
    let dir = TempDir::new().unwrap();
    shred(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_wipe_help() {
    let dir = TempDir::new().unwrap();
    shred(dir.path())
        .args(["wipe", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<FILE>"))
        .stdout(predicate::str::contains("--passes"))
        .stdout(predicate::str::contains("--chunk-size"))
        .stdout(predicate::str::contains("--remove"));
}

// ============================================================================
// Wipe Command Tests
// ============================================================================

#[test]
fn test_wipe_overwrites_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("secret.bin");
    let original = patterned(3500);
    fs::write(&target, &original).unwrap();

    shred(dir.path())
        .args(["wipe", "-y", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shredded"));

    let after = fs::read(&target).unwrap();
    assert_eq!(after.len(), original.len());
    assert_ne!(after, original);
}

#[test]
fn test_wipe_with_options() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("secret.bin");
    fs::write(&target, patterned(10_000)).unwrap();

    shred(dir.path())
        .args([
            "wipe",
            "--yes",
            "--passes",
            "5",
            "--chunk-size",
            "4K",
            target.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 passes"));
}

#[test]
fn test_wipe_and_remove() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("secret.bin");
    fs::write(&target, patterned(2048)).unwrap();

    shred(dir.path())
        .args(["wipe", "-y", "-u", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    assert!(!target.exists());
}

#[test]
fn test_wipe_keeps_file_by_default() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("secret.bin");
    fs::write(&target, patterned(100)).unwrap();

    shred(dir.path())
        .args(["wipe", "-y", target.to_str().unwrap()])
        .assert()
        .success();

    assert!(target.exists());
}

#[test]
fn test_wipe_empty_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("empty.bin");
    fs::write(&target, "").unwrap();

    shred(dir.path())
        .args(["wipe", "-y", target.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::metadata(&target).unwrap().len(), 0);
}

#[test]
fn test_wipe_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.bin");

    shred(dir.path())
        .args(["wipe", "-y", missing.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("nope.bin"));
}

#[test]
fn test_wipe_invalid_passes() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("secret.bin");
    fs::write(&target, patterned(100)).unwrap();

    shred(dir.path())
        .args(["wipe", "-y", "--passes", "0", target.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass count"));

    // Nothing was written
    assert_eq!(fs::read(&target).unwrap(), patterned(100));
}

#[test]
fn test_wipe_invalid_chunk_size() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("secret.bin");
    fs::write(&target, patterned(100)).unwrap();

    shred(dir.path())
        .args(["wipe", "-y", "--chunk-size", "lots", target.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid chunk size"));
}

#[test]
fn test_wipe_missing_random_source() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("secret.bin");
    fs::write(&target, patterned(100)).unwrap();

    shred(dir.path())
        .args([
            "wipe",
            "-y",
            "--random-source",
            "/nonexistent/rng",
            target.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to shred"))
        .stderr(predicate::str::contains("secret.bin"));

    // Nothing was written before the source failed to open
    assert_eq!(fs::read(&target).unwrap(), patterned(100));
}

#[test]
fn test_wipe_failure_shows_cause_chain() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("secret.bin");
    fs::write(&target, patterned(100)).unwrap();

    shred(dir.path())
        .env("RUST_BACKTRACE", "1")
        .args([
            "wipe",
            "-y",
            "--random-source",
            "/nonexistent/rng",
            target.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("random source during pass 1"));
}

#[test]
fn test_wipe_silent() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("secret.bin");
    fs::write(&target, patterned(4096)).unwrap();

    shred(dir.path())
        .args(["--silent", "wipe", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_wipe_uses_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("shred_config.toml"),
        "[shred]\npasses = 2\n\n[behavior]\nskip_confirmation = true\n",
    )
    .unwrap();

    let target = dir.path().join("secret.bin");
    fs::write(&target, patterned(1024)).unwrap();

    // No --yes: confirmation is skipped by the config file
    shred(dir.path())
        .args(["wipe", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 passes"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_path() {
    let dir = TempDir::new().unwrap();
    shred(dir.path())
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shred_config.toml"));
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();

    shred(dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(dir.path().join("shred_config.toml").exists());

    shred(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[shred]"))
        .stdout(predicate::str::contains("passes = 3"));
}

#[test]
fn test_config_json() {
    let dir = TempDir::new().unwrap();
    shred(dir.path())
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"chunk_size\": \"1K\""));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    shred(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shred"));
}

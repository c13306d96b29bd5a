//! End-to-end tests for the `ctable` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ctable() -> Command {
    let mut cmd = Command::cargo_bin("ctable").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("CTABLE_WIDTH");
    cmd
}

fn write_document(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("table.toml");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn renders_document_at_width() {
    let dir = TempDir::new().unwrap();
    let path = write_document(
        &dir,
        r#"
        [[rows]]
        cells = ["hello world"]
        "#,
    );

    ctable()
        .args(["--color", "never", "render", "--width", "5"])
        .arg(&path)
        .assert()
        .success()
        .stdout("hello\nworld\n");
}

#[test]
fn width_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "rows = [{ cells = [\"hello world\"] }]\n");

    ctable()
        .env("CTABLE_WIDTH", "5")
        .args(["render", "--color", "never"])
        .arg(&path)
        .assert()
        .success()
        .stdout("hello\nworld\n");
}

#[test]
fn renders_document_from_stdin() {
    ctable()
        .args(["render", "-", "--width", "20", "--color", "never"])
        .write_stdin("rows = [{ cells = [\"a\", \"b\"] }]\n")
        .assert()
        .success()
        .stdout("ab\n");
}

#[test]
fn color_always_emits_escapes() {
    ctable()
        .args(["render", "-", "--width", "20", "--color", "always"])
        .write_stdin("rows = [{ cells = [{ text = \"hot\", fg = \"red\" }] }]\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").and(predicate::str::contains("hot")));
}

#[test]
fn prints_pattern_expansion() {
    ctable()
        .args(["pattern", "[+](-)[+]", "8"])
        .assert()
        .success()
        .stdout("+------+\n");
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    ctable()
        .arg("render")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read document"));
}

#[test]
fn invalid_document_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "rows = [{ cells = [{ text = \"x\", fg = \"mauve\" }] }]\n");

    ctable()
        .arg("render")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid document"));
}

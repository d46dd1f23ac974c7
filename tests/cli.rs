use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn dirdigest() -> Command {
    Command::cargo_bin("dirdigest").unwrap()
}

#[test]
fn cli_writes_output_file() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("main.rs"), "fn main() {}").unwrap();
    let out = dir.path().join("out/digest.txt");

    dirdigest()
        .arg(&src)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis complete! Output written to:"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("Directory: src\n\nFiles analyzed: 1\n"));
    assert!(written.contains("Directory structure:\n└── src/\n    └── main.rs\n"));
    assert!(written.contains("FILE: main.rs\n"));
}
#[test]
fn cli_version() {
    dirdigest()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dirdigest version "));
}
#[test]
fn cli_missing_source_fails() {
    let dir = tempdir().unwrap();
    dirdigest()
        .arg(dir.path().join("missing"))
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
#[test]
fn cli_files_without_valid_entries_fails() {
    let dir = tempdir().unwrap();
    dirdigest()
        .current_dir(dir.path())
        .args(["-f", "nope.txt,also-nope.txt", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid files were found to process"));
}
#[test]
fn cli_files_are_separate_roots() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    fs::write(dir.path().join("b.txt"), "beta").unwrap();
    let assert = dirdigest()
        .current_dir(dir.path())
        .args(["--files", "a.txt, missing.txt, b.txt", "--stdout"])
        .assert()
        .success()
        .stderr(predicate::str::contains("File 'missing.txt' does not exist"));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("File: a.txt\n"));
    assert!(stdout.contains(&format!("\n{}\n\nFile: b.txt\n", dirdigest::SEPARATOR)));
}
#[test]
fn cli_include_and_exclude() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "# hi").unwrap();
    fs::write(dir.path().join("notes.md"), "notes").unwrap();
    fs::write(dir.path().join("main.go"), "package main").unwrap();
    dirdigest()
        .arg(dir.path())
        .args(["-i", "*.md", "-e", "notes.md", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE: readme.md"))
        .stdout(predicate::str::contains("notes.md").not())
        .stdout(predicate::str::contains("main.go").not());
}
#[test]
fn cli_include_help_mentions_directories() {
    dirdigest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directories must match too"));
}

//! The `tagcheck` binary: plain text outcome lines, no output options

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn demo_prints_one_line_per_sample() {
    let mut cmd = cargo_bin_cmd!("tagcheck");
    cmd.arg("demo");

    cmd.assert().success().stdout(
        "Correctly tagged paragraph\n\
         Correctly tagged paragraph\n\
         Expected </C> found </B>\n\
         Expected # found </C>\n\
         Expected </B> found #\n",
    );
}

#[test]
fn demo_rejects_format_flag() {
    let mut cmd = cargo_bin_cmd!("tagcheck");
    cmd.arg("demo").arg("--format").arg("yaml");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--format"));
}

#[test]
fn formats_subcommand_does_not_exist() {
    let mut cmd = cargo_bin_cmd!("tagcheck");
    cmd.arg("formats");

    cmd.assert().failure().stdout(predicate::str::is_empty());
}

#[test]
fn check_without_path_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("tagcheck");
    cmd.arg("check");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<path>"))
        .stderr(predicate::str::contains("File not found").not());
}

#[test]
fn check_prints_outcome_per_paragraph() {
    let path = std::env::temp_dir().join(format!("tagcheck-cli-{}.txt", std::process::id()));
    fs::write(&path, "<B>bold</B>\n<B><C>nested</C>\n")
        .expect("Failed to write paragraph file");

    let mut cmd = cargo_bin_cmd!("tagcheck");
    cmd.arg("check").arg(&path);
    let assert = cmd.assert();
    fs::remove_file(&path).ok();

    assert
        .success()
        .stdout("Correctly tagged paragraph\nExpected </B> found #\n");
}

#[test]
fn check_missing_file_reports_path() {
    let mut cmd = cargo_bin_cmd!("tagcheck");
    cmd.arg("check").arg("no/such/paragraphs.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: File not found: no/such/paragraphs.txt"));
}

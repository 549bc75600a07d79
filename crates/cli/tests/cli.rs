use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn stockroom(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.arg("--file").arg(file).arg("--log-format").arg("compact");
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn add_writes_sorted_document() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("inventory.json");

    stockroom(&file)
        .args(["add", "banana", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 3 of banana"));
    stockroom(&file)
        .args(["add", "apple", "10"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("apple: 10\n"));

    let content = fs::read_to_string(&file).unwrap();
    assert_eq!(content, "{\n    \"apple\": 10,\n    \"banana\": 3\n}\n");
}

#[test]
fn insufficient_stock_fails_and_keeps_quantity() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("inventory.json");

    stockroom(&file).args(["add", "apple", "10"]).assert().success();
    stockroom(&file).args(["add", "apple", "5"]).assert().success();

    stockroom(&file)
        .args(["remove", "apple", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient stock for 'apple'"));

    stockroom(&file)
        .args(["get", "apple"])
        .assert()
        .success()
        .stdout("15\n");
}

#[test]
fn empty_name_is_rejected_without_creating_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("inventory.json");

    stockroom(&file)
        .args(["add", "", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("item name cannot be empty"));

    assert!(!file.exists());
}

#[test]
fn negative_add_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("inventory.json");

    stockroom(&file)
        .args(["add", "test", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn report_is_the_default_command() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("inventory.json");

    stockroom(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No items in inventory"));

    fs::write(&file, r#"{"apple": 10, "banana": 3}"#).unwrap();

    stockroom(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("apple           ->  10 units [OK]"))
        .stdout(predicate::str::contains("banana          ->   3 units [LOW STOCK]"))
        .stdout(predicate::str::contains("Total items: 13"));
}

#[test]
fn report_labels_follow_threshold_flag() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("inventory.json");
    fs::write(&file, r#"{"apple": 10}"#).unwrap();

    stockroom(&file)
        .args(["report", "--threshold", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apple           ->  10 units [LOW STOCK]"));
}

#[test]
fn low_lists_items_under_threshold() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("inventory.json");
    fs::write(&file, r#"{"apple": 10, "banana": 3}"#).unwrap();

    stockroom(&file).arg("low").assert().success().stdout("banana\n");
    stockroom(&file)
        .args(["low", "--threshold", "11"])
        .assert()
        .success()
        .stdout("apple\nbanana\n");
}

#[test]
fn malformed_document_is_reported_and_left_alone() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("inventory.json");
    fs::write(&file, "not json").unwrap();

    stockroom(&file)
        .args(["add", "apple", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load inventory"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "not json");
}

#[test]
fn demo_runs_end_to_end() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("inventory.json");

    stockroom(&file)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEMONSTRATION RESULTS"))
        .stdout(predicate::str::contains("INVENTORY REPORT"));

    stockroom(&file)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_units\": 14"));
}

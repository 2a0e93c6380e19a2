#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn flashdeck(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flashdeck").unwrap();
    cmd.env("FLASHDECK_DATA_DIR", data_dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn create_deck_and_cards_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    flashdeck(temp_dir.path())
        .args(["new", "Spanish", "-d", "Everyday words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deck created (1): Spanish"));

    flashdeck(temp_dir.path())
        .args(["add", "spanish", "hola", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card added (1): hola"));

    flashdeck(temp_dir.path())
        .args(["add", "1", "gracias", "thank you"])
        .assert()
        .success();

    flashdeck(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Spanish").and(predicate::str::contains("2 cards")));

    flashdeck(temp_dir.path())
        .args(["cards", "Spanish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. hola → hello"))
        .stdout(predicate::str::contains("2. gracias → thank you"));

    assert!(temp_dir.path().join("decks.json").is_file());
}

#[test]
fn list_filter_keeps_positions() {
    let temp_dir = tempfile::tempdir().unwrap();
    for name in ["Math", "Spanish", "Spanish verbs"] {
        flashdeck(temp_dir.path()).args(["new", name]).assert().success();
    }

    flashdeck(temp_dir.path())
        .args(["ls", "span"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Spanish"))
        .stdout(predicate::str::contains("3. Spanish verbs"))
        .stdout(predicate::str::contains("Math").not());
}

#[test]
fn empty_name_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    flashdeck(temp_dir.path())
        .args(["new", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deck name cannot be empty"));
}

#[test]
fn unknown_deck_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    flashdeck(temp_dir.path())
        .args(["cards", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn study_session_records_answers() {
    let temp_dir = tempfile::tempdir().unwrap();
    flashdeck(temp_dir.path()).args(["new", "Quiz"]).assert().success();
    flashdeck(temp_dir.path())
        .args(["add", "Quiz", "2+2", "4"])
        .assert()
        .success();

    flashdeck(temp_dir.path())
        .args(["study", "Quiz"])
        .write_stdin("\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/1] 2+2"))
        .stdout(predicate::str::contains("→ 4"))
        .stdout(predicate::str::contains("Session finished: 1/1 correct (100.0%)"));

    flashdeck(temp_dir.path())
        .args(["stats", "Quiz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Answers:      1 (1 correct, 0 incorrect)"))
        .stdout(predicate::str::contains("Success rate: 100.0%"))
        .stdout(predicate::str::contains("1/1 (100.0%)"));
}

#[test]
fn studying_an_empty_deck_says_so() {
    let temp_dir = tempfile::tempdir().unwrap();
    flashdeck(temp_dir.path()).args(["new", "Empty"]).assert().success();

    flashdeck(temp_dir.path())
        .args(["study", "Empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("This deck has no cards to study."));
}

#[test]
fn edit_and_delete_with_confirmation() {
    let temp_dir = tempfile::tempdir().unwrap();
    flashdeck(temp_dir.path()).args(["new", "Old"]).assert().success();
    flashdeck(temp_dir.path())
        .args(["add", "Old", "q", "a"])
        .assert()
        .success();

    flashdeck(temp_dir.path())
        .args(["edit", "1", "--name", "New"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deck updated: New"));

    flashdeck(temp_dir.path())
        .args(["edit-card", "New", "1", "--back", "answer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card updated: q"));

    flashdeck(temp_dir.path())
        .args(["rm", "New"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    flashdeck(temp_dir.path())
        .args(["rm", "New", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deck deleted: New (1 cards)"));

    flashdeck(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No decks found."));
}

#[test]
fn config_set_and_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    flashdeck(temp_dir.path())
        .args(["config", "study-limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("study-limit set to 5"));

    flashdeck(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("decks-file = decks.json"))
        .stdout(predicate::str::contains("study-limit = 5"));
}

#[test]
fn data_dir_flag_overrides_env() {
    let env_dir = tempfile::tempdir().unwrap();
    let flag_dir = tempfile::tempdir().unwrap();

    flashdeck(env_dir.path())
        .args(["new", "Flagged", "--data-dir"])
        .arg(flag_dir.path())
        .assert()
        .success();

    assert!(flag_dir.path().join("decks.json").is_file());
    assert!(!env_dir.path().join("decks.json").exists());
}

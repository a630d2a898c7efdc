//! End-to-end tests for the ritmo binary.
//!
//! Each test runs against its own `RITMO_HOME` so no real data is touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ritmo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ritmo").expect("binary builds");
    cmd.env("RITMO_HOME", home.path());
    cmd
}

#[test]
fn add_then_list_shows_habit() {
    let home = TempDir::new().unwrap();

    ritmo(&home)
        .args(["add", "Morning run #fitness daily x1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning run"));

    ritmo(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning run"))
        .stdout(predicate::str::contains("#fitness"));
}

#[test]
fn done_marks_today() {
    let home = TempDir::new().unwrap();

    ritmo(&home).args(["add", "Read #personal"]).assert().success();

    ritmo(&home)
        .args(["done", "Read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"));

    ritmo(&home)
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 done"));
}

#[test]
fn done_then_undone_round_trip() {
    let home = TempDir::new().unwrap();

    ritmo(&home).args(["add", "Read"]).assert().success();
    ritmo(&home).args(["done", "Read"]).assert().success();

    ritmo(&home)
        .args(["undone", "Read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Un-marked"));

    ritmo(&home)
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("0/1 done"));
}

#[test]
fn unknown_habit_fails() {
    let home = TempDir::new().unwrap();

    ritmo(&home)
        .args(["done", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn unknown_category_tag_fails() {
    let home = TempDir::new().unwrap();

    ritmo(&home)
        .args(["add", "Walk #chores"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn zero_target_fails_validation() {
    let home = TempDir::new().unwrap();

    ritmo(&home)
        .args(["add", "Read", "--target", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn stats_summary_json_exposes_both_streak_fields() {
    let home = TempDir::new().unwrap();

    ritmo(&home).args(["add", "Read"]).assert().success();
    ritmo(&home).args(["done", "Read"]).assert().success();

    let output = ritmo(&home)
        .args(["stats", "summary", "-o", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["total_habits"], 1);
    assert_eq!(parsed["completed_today"], 1);
    assert_eq!(parsed["sum_of_streaks"], 1);
    assert_eq!(parsed["best_streak"], 1);
}

#[test]
fn empty_store_stats_are_zero_not_nan() {
    let home = TempDir::new().unwrap();

    let output = ritmo(&home)
        .args(["stats", "summary", "-o", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["total_habits"], 0);
    assert_eq!(parsed["weekly_completion"], 0.0);
    assert_eq!(parsed["monthly_completion"], 0.0);
}

#[test]
fn backfilled_completion_counts() {
    let home = TempDir::new().unwrap();

    ritmo(&home).args(["add", "Read"]).assert().success();
    ritmo(&home)
        .args(["done", "Read", "--date", "yesterday"])
        .assert()
        .success();
    ritmo(&home).args(["done", "Read"]).assert().success();

    let output = ritmo(&home)
        .args(["stats", "summary", "-o", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["best_streak"], 2);
}

#[test]
fn achievements_and_challenges_render() {
    let home = TempDir::new().unwrap();

    ritmo(&home).args(["add", "Read"]).assert().success();

    ritmo(&home)
        .arg("achievements")
        .assert()
        .success()
        .stdout(predicate::str::contains("ACHIEVEMENTS"));

    ritmo(&home)
        .arg("challenges")
        .assert()
        .success()
        .stdout(predicate::str::contains("THIS WEEK"));
}

#[test]
fn quote_is_stable_within_a_day() {
    let home = TempDir::new().unwrap();

    let first = ritmo(&home).arg("quote").assert().success();
    let second = ritmo(&home).arg("quote").assert().success();
    assert_eq!(
        first.get_output().stdout,
        second.get_output().stdout
    );
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();

    ritmo(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ritmo"));
}

#[test]
fn sqlite_backend_round_trips() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "storage:\n  backend: sqlite\n",
    )
    .unwrap();

    ritmo(&home)
        .args(["add", "Gym #fitness weekly x3"])
        .assert()
        .success();
    ritmo(&home).args(["done", "Gym"]).assert().success();

    ritmo(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym"));
    assert!(home.path().join("ritmo.db").exists());
}

#[test]
fn json_store_file_lands_in_ritmo_home() {
    let home = TempDir::new().unwrap();

    ritmo(&home).args(["add", "Read"]).assert().success();
    assert!(home.path().join("habits.json").exists());
}

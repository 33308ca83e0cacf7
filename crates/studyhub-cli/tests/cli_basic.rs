//! Basic CLI E2E tests.
//!
//! Each test runs the binary with HOME pointed at a scratch directory so
//! the config file never touches the real user profile.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studyhub(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studyhub").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("STUDYHUB_ENV")
        .env_remove("STUDYHUB_LOG");
    cmd
}

#[test]
fn test_gpa_report_text() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .args(["gpa", "--subject", "Math:4:A", "--subject", "Physics:3:B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total credits: 7"))
        .stdout(predicate::str::contains("CGPA: 7.14 (Very Good)"));
}

#[test]
fn test_gpa_report_json() {
    let home = TempDir::new().unwrap();
    let output = studyhub(&home)
        .args(["gpa", "--json", "--subject", "Math:4:O"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["total_credits"], 4);
    assert_eq!(json["summary"]["classification"], "outstanding");
    assert_eq!(json["cgpa_display"], "10.00");
    assert_eq!(json["subjects"][0]["grade"], "O");
    assert_eq!(json["subjects"][0]["grade_points"], 10);
}

#[test]
fn test_gpa_large_credit_counts() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .args([
            "gpa",
            "--subject",
            "Thesis:500000000:O",
            "--subject",
            "Capstone:4294967295:O",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total credits: 4794967295"))
        .stdout(predicate::str::contains("CGPA: 10.00 (Outstanding)"));
}

#[test]
fn test_gpa_empty_table() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .arg("gpa")
        .assert()
        .success()
        .stdout(predicate::str::contains("No subjects added yet"));
}

#[test]
fn test_gpa_rejects_unknown_grade() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .args(["gpa", "--subject", "Math:4:D"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown grade 'D'"));
}

#[test]
fn test_deadlines_sorted_json() {
    let home = TempDir::new().unwrap();
    let output = studyhub(&home)
        .args([
            "deadlines",
            "--json",
            "--now",
            "2025-03-10T12:00:00Z",
            "--assignment",
            "Math:Later:2025-03-20",
            "--assignment",
            "Physics:Overdue:2025-03-09",
            "--assignment",
            "Chem:Soon:2025-03-13",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let titles: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Overdue", "Soon", "Later"]);
    assert_eq!(rows[0]["days_left"], -1);
    assert_eq!(rows[0]["priority"], "overdue");
    assert_eq!(rows[1]["days_left"], 3);
    assert_eq!(rows[1]["priority"], "urgent");
    assert_eq!(rows[2]["priority"], "normal");
}

#[test]
fn test_deadlines_rejects_bad_date() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .args(["deadlines", "--assignment", "Math:Quiz:next week"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid due date"));
}

#[test]
fn test_notes_list() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .args(["notes", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8. Semester 8"))
        .stdout(predicate::str::contains("placeholder-semester-1"));
}

#[test]
fn test_notes_open_unknown_semester() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .args(["notes", "open", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no semester with id 42"));
}

#[test]
fn test_config_set_get_reset() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .args(["config", "get", "deadlines.refresh_interval_secs"])
        .assert()
        .success()
        .stdout("3600\n");

    studyhub(&home)
        .args(["config", "set", "shell.default_view", "gpa"])
        .assert()
        .success();
    studyhub(&home)
        .args(["config", "get", "shell.default_view"])
        .assert()
        .success()
        .stdout("gpa\n");

    studyhub(&home)
        .args(["config", "set", "deadlines.refresh_interval_secs", "0"])
        .assert()
        .failure();

    studyhub(&home).args(["config", "reset"]).assert().success();
    studyhub(&home)
        .args(["config", "get", "shell.default_view"])
        .assert()
        .success()
        .stdout("home\n");
}

#[test]
fn test_config_unknown_key() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .args(["config", "get", "ui.theme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown key: ui.theme"));
}

#[test]
fn test_shell_session_from_stdin() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .arg("shell")
        .write_stdin("view gpa\ngpa add Math 4 A\ngpa add Physics 3 B\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[GPA Calculator]"))
        .stdout(predicate::str::contains("CGPA: 7.14 (Very Good)"));
}

#[test]
fn test_shell_ends_on_eof() {
    let home = TempDir::new().unwrap();
    studyhub(&home)
        .arg("shell")
        .write_stdin("notes toggle 2\nview notes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("v 2. Semester 2"));
}

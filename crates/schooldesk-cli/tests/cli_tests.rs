//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `schooldesk` command isolated in `dir`: no config is picked up from the
/// real working directory or home, and data lands in `dir/data`.
fn schooldesk(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("schooldesk").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("SCHOOLDESK_DATA_DIR", dir.path().join("data"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created schooldesk.toml"));

    assert!(dir.path().join("schooldesk.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir).arg("init").assert().success();

    schooldesk(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn subjects_lists_catalog() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics"))
        .stdout(predicate::str::contains("  - Algebra"))
        .stdout(predicate::str::contains("English"));
}

#[test]
fn categories_lists_descriptions_and_departments() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Examinations"))
        .stdout(predicate::str::contains("Test and assessment schedules"))
        .stdout(predicate::str::contains("Urgent notices and alerts"))
        .stdout(predicate::str::contains(
            "Departments: Academics, Administration, Cultural, Library, Science, Sports",
        ));
}

#[test]
fn tests_empty_store() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .arg("tests")
        .assert()
        .success()
        .stdout(predicate::str::contains("No practice tests yet"));
}

#[test]
fn generate_unknown_subject_needs_chapters() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .args(["generate", "--subject", "History"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown subject"));

    schooldesk(&dir)
        .args(["generate", "--subject", "History", "--chapters", "Ancient,Modern"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History (10 questions"));
}

#[test]
fn generate_rejects_empty_distribution() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .args([
            "generate", "--subject", "Science", "--easy", "0", "--medium", "0", "--hard", "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one question"));
}

#[test]
fn generate_rejects_overflowing_distribution() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .args([
            "generate",
            "--subject",
            "Mathematics",
            "--easy",
            "4294967295",
            "--medium",
            "1",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: a practice test can have at most"))
        .stderr(predicate::str::contains("panicked").not());

    assert!(!dir.path().join("data").join("practiceTests.json").exists());
}

#[test]
fn start_unknown_test_fails() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .args(["start", "--id", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("practice test not found"));
}

#[test]
fn complete_rejects_negative_score() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .args(["complete", "--id", "any", "--score", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn corrupt_store_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/practiceTests.json"), "{oops").unwrap();

    schooldesk(&dir)
        .arg("tests")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
}

#[test]
fn notices_default_sorted_by_date() {
    let dir = TempDir::new().unwrap();

    let output = schooldesk(&dir)
        .args(["notices", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let notices: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
    let dates: Vec<&str> = notices.iter().map(|n| n["date"].as_str().unwrap()).collect();
    assert_eq!(
        dates,
        vec![
            "2025-04-05",
            "2025-03-25",
            "2025-03-20",
            "2025-03-15",
            "2025-03-10",
            "2025-03-08"
        ]
    );
}

#[test]
fn notices_events_by_priority() {
    let dir = TempDir::new().unwrap();

    let output = schooldesk(&dir)
        .args([
            "notices",
            "--category",
            "event",
            "--sort",
            "priority",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let notices: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
    let titles: Vec<&str> = notices.iter().map(|n| n["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec!["Annual Sports Day", "Cultural Program", "Science Exhibition"]
    );
}

#[test]
fn notices_search_text_output() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .args(["notices", "--search", "RAIN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weather Advisory: Heavy Rain"))
        .stdout(predicate::str::contains("1 of 6 notice(s)"));

    schooldesk(&dir)
        .args(["notices", "--search", "no such notice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notices match."));
}

#[test]
fn notices_rejects_unknown_selectors() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .args(["notices", "--category", "party"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown notice category"));

    schooldesk(&dir)
        .args(["notices", "--sort", "title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort order"));

    schooldesk(&dir)
        .args(["notices", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format: xml"));
}

#[test]
fn tests_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .args(["tests", "--format", "yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown output format: yaml"));
}

#[test]
fn notices_from_configured_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("notices.json"),
        r#"[{"id":"n1","title":"Board Meeting","description":"Staff only",
            "category":"announcement","date":"2025-05-01","priority":"low",
            "author":"Office","department":"Administration"}]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("schooldesk.toml"),
        "notices_file = \"notices.json\"\n",
    )
    .unwrap();

    schooldesk(&dir)
        .arg("notices")
        .assert()
        .success()
        .stdout(predicate::str::contains("Board Meeting"))
        .stdout(predicate::str::contains("1 of 1 notice(s)"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notices.json");
    std::fs::write(
        &path,
        r#"[{"id":"n1","title":"","description":"Something",
            "category":"event","date":"someday","priority":"high",
            "author":"Office","department":"Sports"}]"#,
    )
    .unwrap();

    schooldesk(&dir)
        .arg("validate")
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[n1] WARNING: title is required"))
        .stdout(predicate::str::contains("2 warning(s) found."));
}

#[test]
fn validate_rejects_unknown_department() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notices.json");
    std::fs::write(
        &path,
        r#"[{"id":"n1","title":"t","description":"d","category":"event",
            "date":"2025-01-01","priority":"high","author":"a","department":"Music"}]"#,
    )
    .unwrap();

    schooldesk(&dir)
        .arg("validate")
        .arg("--file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse notices file"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .args(["validate", "--file", "nonexistent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Practice tests and notices for the school dashboard",
        ));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    schooldesk(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("schooldesk"));
}

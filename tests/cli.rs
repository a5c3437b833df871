use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn proofline() -> Command {
    Command::cargo_bin("proofline").unwrap()
}

#[test]
fn line_command_prints_line_and_range() {
    let file = temp_file("first line\nsecond line\nthird line");

    proofline()
        .args(["--no-color", "line"])
        .arg(file.path())
        .args(["--cursor", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second line"))
        .stdout(predicate::str::contains("11..23"));
}

#[test]
fn line_command_clamps_negative_cursor() {
    let file = temp_file("first line\nsecond line");

    proofline()
        .args(["--no-color", "line"])
        .arg(file.path())
        .args(["--cursor", "-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first line"));
}

#[test]
fn line_command_reports_blank_line() {
    let file = temp_file("first\n\nthird");

    proofline()
        .args(["--no-color", "line"])
        .arg(file.path())
        .args(["--cursor", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No actionable line"));
}

#[test]
fn line_command_json_null_for_blank_line() {
    let file = temp_file("first\n\nthird");

    proofline()
        .args(["--no-color", "--format", "json", "line"])
        .arg(file.path())
        .args(["--cursor", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
}

#[test]
fn merge_command_drops_overlapping_secondary() {
    let primary = temp_file(
        r#"[{"word": "teh", "start": 0, "end": 5, "kind": "spelling", "suggestions": ["the"]}]"#,
    );
    let secondary = temp_file(
        r#"[
            {"word": "shadowed", "start": 3, "end": 7, "kind": "grammar"},
            {"word": "later", "start": 10, "end": 15, "kind": "style"}
        ]"#,
    );

    proofline()
        .args(["--no-color", "merge", "--primary"])
        .arg(primary.path())
        .arg("--secondary")
        .arg(secondary.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("teh"))
        .stdout(predicate::str::contains("later"))
        .stdout(predicate::str::contains("shadowed").not())
        .stdout(predicate::str::contains("1 overlapping dropped"));
}

#[test]
fn merge_command_json_output() {
    let primary =
        temp_file(r#"[{"word": "teh", "start": 0, "end": 3, "kind": "spelling"}]"#);
    let secondary =
        temp_file(r#"[{"word": "was ran", "start": 10, "end": 17, "kind": "grammar"}]"#);

    let output = proofline()
        .args(["--no-color", "--format", "json", "merge", "--primary"])
        .arg(primary.path())
        .arg("--secondary")
        .arg(secondary.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_issues\": 2"))
        .get_output()
        .stdout
        .clone();

    // The whole stdout must be one parseable JSON document.
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["issues"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["issues"][0]["start"], 0);
}

#[test]
fn merge_command_fails_on_missing_report() {
    let secondary = temp_file("[]");

    proofline()
        .args(["--no-color", "merge", "--primary", "/nonexistent/report.json"])
        .arg("--secondary")
        .arg(secondary.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load primary report"));
}

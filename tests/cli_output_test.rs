use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Forty books by one author, ids `b1..b40`.
fn fixture() -> NamedTempFile {
    let books: Vec<String> = (1..=40)
        .map(|n| {
            format!(
                r#"{{"id":"b{n}","title":"Book Number {n}","author":"a1","image":"https://covers.example/b{n}.jpg",
                    "description":"Description of Book Number {n}","published":"1990-03-14T00:00:00.000Z",
                    "genres":["g1"]}}"#,
                n = n
            )
        })
        .collect();
    let json = format!(
        r#"{{"books":[{}],"authors":{{"a1":"Ada Lovelace"}},"genres":{{"g1":"Computing"}}}}"#,
        books.join(",")
    );

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn folio(data: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("-f").arg(data.path());
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "folio exited with {:?}", output.status);
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// Table output tests
// ---------------------------------------------------------------------------

#[test]
fn test_output_has_correct_headers() {
    let data = fixture();
    let stdout = stdout_of(&mut folio(&data));
    let first_line = stdout.lines().next().unwrap_or("");

    assert!(first_line.starts_with("ID"), "Header should start with ID");
    assert!(first_line.contains("TITLE"), "Header should contain TITLE");
    assert!(first_line.contains("AUTHOR"), "Header should contain AUTHOR");
    assert!(first_line.contains("YEAR"), "Header should contain YEAR");
}

#[test]
fn test_first_page_and_show_more_count() {
    let data = fixture();
    let stdout = stdout_of(&mut folio(&data));
    let rows: Vec<&str> = stdout.lines().filter(|l| l.starts_with('b')).collect();

    assert_eq!(rows.len(), 36);
    assert!(rows[0].contains("Book Number 1"));
    assert!(rows[0].contains("Ada Lovelace"));
    assert!(rows[0].ends_with("1990"));
    assert!(stdout.ends_with("Show more (4)\n"));
}

#[test]
fn test_second_page() {
    let data = fixture();
    let stdout = stdout_of(folio(&data).args(["-p", "2"]));
    let rows: Vec<&str> = stdout.lines().filter(|l| l.starts_with('b')).collect();

    assert_eq!(rows.len(), 4);
    assert!(rows[0].starts_with("b37"));
    assert!(stdout.ends_with("Show more (0)\n"));
}

#[test]
fn test_page_past_the_end_is_empty() {
    let data = fixture();
    let stdout = stdout_of(folio(&data).args(["-p", "9"]));
    assert_eq!(stdout.lines().filter(|l| l.starts_with('b')).count(), 0);
    assert!(stdout.ends_with("Show more (0)\n"));
}

#[test]
fn test_page_size_flag() {
    let data = fixture();
    let stdout = stdout_of(folio(&data).args(["--page-size", "15"]));
    assert_eq!(stdout.lines().filter(|l| l.starts_with('b')).count(), 15);
    assert!(stdout.ends_with("Show more (25)\n"));
}

#[test]
fn test_no_results_message() {
    let data = fixture();
    folio(&data)
        .args(["-t", "zzz-no-match"])
        .assert()
        .success()
        .stdout("No results found.\n");
}

// ---------------------------------------------------------------------------
// Terse and JSON output tests
// ---------------------------------------------------------------------------

#[test]
fn test_terse_output_ids_only() {
    let data = fixture();
    let stdout = stdout_of(folio(&data).arg("--terse"));
    let ids: Vec<&str> = stdout.lines().collect();

    assert_eq!(ids.len(), 40);
    assert_eq!(ids[0], "b1");
    assert_eq!(ids[39], "b40");
}

#[test]
fn test_terse_conflicts_with_json() {
    let data = fixture();
    folio(&data).args(["--terse", "--json"]).assert().failure();
}

#[test]
fn test_json_output() {
    let data = fixture();
    let stdout = stdout_of(folio(&data).args(["--json", "--page-size", "10", "-p", "3"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["page"], 3);
    assert_eq!(value["pages"], 4);
    assert_eq!(value["total"], 40);
    assert_eq!(value["remaining"], 10);
    assert_eq!(value["items"][0]["id"], "b21");
    assert_eq!(value["items"][0]["author"], "Ada Lovelace");
}

// ---------------------------------------------------------------------------
// Detail output tests
// ---------------------------------------------------------------------------

#[test]
fn test_show_detail() {
    let data = fixture();
    let stdout = stdout_of(folio(&data).args(["--show", "b7"]));
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "Book Number 7");
    assert_eq!(lines[1], "Ada Lovelace (1990)");
    assert_eq!(lines[2], "Computing");
    assert!(stdout.contains("Description of Book Number 7"));
    assert!(stdout.contains("cover: https://covers.example/b7.jpg"));
}

#[test]
fn test_show_detail_json() {
    let data = fixture();
    let stdout = stdout_of(folio(&data).args(["--show", "b2", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["subtitle"], "Ada Lovelace (1990)");
    assert_eq!(value["genres"][0], "Computing");
}

#[test]
fn test_show_unknown_id_fails() {
    let data = fixture();
    folio(&data)
        .args(["--show", "b99"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Book not found: b99"));
}

#[test]
fn test_show_outside_current_matches_fails() {
    let data = fixture();
    folio(&data)
        .args(["--show", "b7", "-t", "Number 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book not found: b7"));
}

// ---------------------------------------------------------------------------
// Argument validation tests
// ---------------------------------------------------------------------------

#[test]
fn test_page_zero_rejected() {
    let data = fixture();
    folio(&data).args(["-p", "0"]).assert().failure();
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("folio")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("folio"));
}

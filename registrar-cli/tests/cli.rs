//! Black-box runs of both binaries against a fixture store.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn fixture_store() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reg.sqlite");
    let conn = registrar_db::create_database(&path).unwrap();
    conn.execute_batch(
        "INSERT INTO courses (courseid, area, title, descrip, prereqs) VALUES
             (2000, 'QR', 'Introduction to Programming',
              'An introduction to computer science in the context of scientific, engineering, and commercial applications. The goal is to teach students how to write programs.',
              NULL),
             (3000, 'STN', 'Introduction to Programming', NULL, NULL),
             (4000, NULL, 'Multivariable Calculus', NULL, 'MAT 104.');
         INSERT INTO classes (classid, courseid, days, starttime, endtime, bldg, roomnum) VALUES
             (8321, 2000, 'MWF', '10:00 AM', '10:50 AM', 'FRIEN', '101'),
             (9032, 3000, 'TTh', '1:30 PM', '2:50 PM', 'EQUAD', 'B205'),
             (9977, 4000, NULL, NULL, NULL, NULL, NULL);
         INSERT INTO crosslistings (courseid, dept, coursenum) VALUES
             (2000, 'COS', '126'),
             (3000, 'ELE', '126'),
             (4000, 'MAT', '201');
         INSERT INTO profs (profid, profname) VALUES (1, 'B Jones'), (2, 'A Smith');
         INSERT INTO coursesprofs (courseid, profid) VALUES (2000, 1), (2000, 2);",
    )
    .unwrap();
    drop(conn);
    (dir, path)
}

fn run(bin: &str, db: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .arg("--database")
        .arg(db)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("REGISTRAR_DB")
        .output()
        .unwrap()
}

fn regoverviews(db: &Path, args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_regoverviews"), db, args)
}

fn regdetails(db: &Path, args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_regdetails"), db, args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ── regoverviews ────────────────────────────────────────────────────────────

#[test]
fn overviews_without_filters() {
    let (_dir, db) = fixture_store();
    let out = regoverviews(&db, &[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "ClsId Dept CrsNum Area Title\n\
         ----- ---- ------ ---- -----\n \
         8321 COS  126    QR   Introduction to Programming\n \
         9032 ELE  126    STN  Introduction to Programming\n \
         9977 MAT  201         Multivariable Calculus\n"
    );
}

#[test]
fn overviews_with_case_insensitive_filters() {
    let (_dir, db) = fixture_store();
    let out = regoverviews(&db, &["-d", "cos", "-t", "intro"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains(" 8321 COS"));
    assert!(!text.contains("ELE"));
}

#[test]
fn overviews_with_no_matches_print_nothing() {
    let (_dir, db) = fixture_store();
    let out = regoverviews(&db, &["-a", "zzz"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
}

#[test]
fn overviews_report_storage_faults() {
    let dir = TempDir::new().unwrap();
    let out = regoverviews(&dir.path().join("missing.sqlite"), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("regoverviews: "));
}

#[test]
fn overviews_reject_unknown_flags() {
    let (_dir, db) = fixture_store();
    let out = regoverviews(&db, &["-x", "foo"]);
    assert_eq!(out.status.code(), Some(2));
}

// ── regdetails ──────────────────────────────────────────────────────────────

#[test]
fn details_for_existing_class() {
    let (_dir, db) = fixture_store();
    let out = regdetails(&db, &["8321"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.starts_with("Class Details\n-------------\nClass Id: 8321\nCourse Id: 2000\n"));
    assert!(text.contains("Dept and Number: COS 126\n"));
    assert!(text.contains("Description: An introduction to computer science"));
    assert!(!text.contains("Prerequisites:"));
    assert!(text.ends_with("Professor: A Smith\nProfessor: B Jones\n"));
    for line in text.lines().filter(|l| !l.starts_with("Description: ")) {
        assert!(line.chars().count() <= 72, "line too long: {:?}", line);
    }
}

#[test]
fn details_with_null_fields() {
    let (_dir, db) = fixture_store();
    let out = regdetails(&db, &["9977"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("\nDays: \nStart time: \nEnd time: \nBuilding: \nRoom: \n"));
    assert!(text.contains("\nArea: \n"));
    assert!(text.contains("\nPrerequisites: MAT 104.\n"));
    assert!(!text.contains("Professor:"));
}

#[test]
fn details_for_unknown_class() {
    let (_dir, db) = fixture_store();
    let out = regdetails(&db, &["9034"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains(": no class with classid 9034 exists"));
}

#[test]
fn details_for_malformed_class_id() {
    let (_dir, db) = fixture_store();
    let out = regdetails(&db, &["abc123"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("no class with classid abc123 exists"));
}

#[test]
fn details_require_exactly_one_class_id() {
    let (_dir, db) = fixture_store();
    assert_eq!(regdetails(&db, &[]).status.code(), Some(2));
    assert_eq!(regdetails(&db, &["8321", "9032"]).status.code(), Some(2));
}

#[test]
fn details_help_exits_cleanly() {
    let (_dir, db) = fixture_store();
    let out = regdetails(&db, &["-h"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("show details about a class"));
}

#[test]
fn details_report_storage_faults() {
    let dir = TempDir::new().unwrap();
    let out = regdetails(&dir.path().join("missing.sqlite"), &["8321"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("regdetails: "));
}

#[test]
fn details_use_env_when_no_flag() {
    let (_dir, db) = fixture_store();
    let out = Command::new(env!("CARGO_BIN_EXE_regdetails"))
        .arg("8321")
        .env("REGISTRAR_DB", &db)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Class Id: 8321"));
}

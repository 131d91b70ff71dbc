#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains as str_contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn enrollment_file(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().expect("create temp file");
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("exam-scheduler").expect("exam-scheduler binary")
}

#[test]
fn cli_prints_schedule() {
    let file = enrollment_file("s1:CS101,CS102\ns2:CS102,CS103\n");
    cli()
        .arg(file.path())
        .assert()
        .success()
        .stdout(str_contains("Final Exam Period 1 -> CS101, CS103"))
        .stdout(str_contains("Final Exam Period 2 -> CS102"));
}

#[test]
fn cli_prints_matrix_on_request() {
    let file = enrollment_file("s1:A,B\n");
    cli()
        .arg(file.path())
        .arg("--matrix")
        .assert()
        .success()
        .stdout(str_contains("Adjacency Matrix:"))
        .stdout(str_contains("A\t0\t1"));
}

#[test]
fn cli_emits_csv() {
    let file = enrollment_file("s1:A,B\n");
    cli()
        .arg(file.path())
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout("period,course\n1,A\n2,B\n");
}

#[test]
fn cli_reports_malformed_lines() {
    let file = enrollment_file("s1:A,B\nno separator here\n");
    cli()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(str_contains("line 2"));
}

#[test]
fn cli_rejects_zero_shard_size() {
    let file = enrollment_file("s1:A,B\n");
    cli()
        .arg(file.path())
        .args(["--shard-size", "0"])
        .assert()
        .failure()
        .stderr(str_contains("shard_size"));
}

#[test]
fn cli_emits_json_report() {
    let file = enrollment_file("s1:A,B,C\n");
    let assert = cli()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success();
    let report: exam_scheduler::ScheduleReport =
        serde_json::from_slice(&assert.get_output().stdout).expect("json report");
    assert_eq!(report.period_count, 3);
    assert_eq!(report.conflicts.len(), 3);
}

#[test]
fn cli_emits_dot_graph() {
    let file = enrollment_file("s1:A,B\n");
    cli()
        .arg(file.path())
        .args(["--format", "dot"])
        .assert()
        .success()
        .stdout(str_contains("graph {"))
        .stdout(str_contains("fillcolor=\"yellow\""))
        .stdout(str_contains("fillcolor=\"red\""));
}

#[test]
fn cli_config_palette_reaches_dot_output() {
    let file = enrollment_file("s1:A,B\n");
    let config = enrollment_file(r#"{ "period_colors": ["Navy", "Gold"] }"#);
    cli()
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .args(["--format", "dot"])
        .assert()
        .success()
        .stdout(str_contains("fillcolor=\"navy\""))
        .stdout(str_contains("fillcolor=\"gold\""))
        .stdout(str_contains("yellow").not());
}

#[test]
fn cli_rejects_invalid_config_file() {
    let file = enrollment_file("s1:A,B\n");
    let config = enrollment_file(r#"{ "shard_size": 0 }"#);
    cli()
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(str_contains("loading config"));
}

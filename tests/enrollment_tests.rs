use exam_scheduler::{SchedulerError, load_enrollments, parse_enrollments, read_enrollments};
use std::io::Write;
use tempfile::NamedTempFile;

fn courses_of(input: &str) -> Vec<Vec<String>> {
    parse_enrollments(input)
        .unwrap()
        .into_iter()
        .map(|r| r.courses.into_iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn parses_one_student_per_line() {
    let records = parse_enrollments("s1:CS101,CS102\ns2:CS102,CS103\n").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].student, "s1");
    assert_eq!(records[1].student, "s2");
    assert_eq!(
        courses_of("s1:CS101,CS102\ns2:CS102,CS103\n"),
        vec![vec!["CS101", "CS102"], vec!["CS102", "CS103"]]
    );
}

#[test]
fn blank_and_comment_lines_are_ignored() {
    let input = "# fall term\n\ns1:A,B\n   \ns2:C\n";
    assert_eq!(courses_of(input), vec![vec!["A", "B"], vec!["C"]]);
}

#[test]
fn duplicate_courses_in_a_line_collapse() {
    assert_eq!(courses_of("s1:A,B,A,B,C\n"), vec![vec!["A", "B", "C"]]);
}

#[test]
fn students_without_courses_are_skipped() {
    assert_eq!(courses_of("s1:\ns2:,,\ns3:A\n"), vec![vec!["A"]]);
}

#[test]
fn windows_line_endings_are_accepted() {
    assert_eq!(courses_of("s1:A,B\r\ns2:B,C\r\n"), vec![vec!["A", "B"], vec!["B", "C"]]);
}

#[test]
fn missing_separator_is_malformed() {
    let err = parse_enrollments("s1:A,B\ns2:B\nbroken line\n").unwrap_err();
    match err {
        SchedulerError::MalformedRecord { line, reason } => {
            assert_eq!(line, 3);
            assert!(reason.contains("missing ':'"), "reason was {reason}");
        }
        other => panic!("expected malformed record, got {other}"),
    }
}

#[test]
fn extra_separator_is_malformed() {
    let err = parse_enrollments("s1:A:B\n").unwrap_err();
    assert!(matches!(err, SchedulerError::MalformedRecord { line: 1, .. }));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn empty_student_id_is_malformed() {
    let err = parse_enrollments(":A,B\n").unwrap_err();
    assert!(matches!(err, SchedulerError::MalformedRecord { line: 1, .. }));
}

#[test]
fn empty_input_yields_no_records() {
    assert!(parse_enrollments("").unwrap().is_empty());
    assert!(read_enrollments(std::io::empty()).unwrap().is_empty());
}

#[test]
fn loads_records_from_file() {
    let mut tmp = NamedTempFile::new().expect("create temp file");
    writeln!(tmp, "s1:MATH1,PHYS1").unwrap();
    writeln!(tmp, "s2:PHYS1,CHEM1").unwrap();
    tmp.flush().unwrap();

    let records = load_enrollments(tmp.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].courses[1].as_str(), "CHEM1");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_enrollments("/nonexistent/enrollments.txt").unwrap_err();
    assert!(matches!(err, SchedulerError::Io(_)));
}

fn malformed_line(input: &str) -> usize {
    match parse_enrollments(input).unwrap_err() {
        SchedulerError::MalformedRecord { line, .. } => line,
        other => panic!("expected malformed record, got {other}"),
    }
}

#[test]
fn error_line_counts_leading_comments() {
    assert_eq!(malformed_line("# c\nbroken\n"), 2);
}

#[test]
fn error_line_counts_leading_blank_lines() {
    assert_eq!(malformed_line("\n\nbroken\n"), 3);
}

#[test]
fn error_line_counts_blank_lines_between_records() {
    assert_eq!(malformed_line("s1:A\n\nbroken\n"), 3);
    assert_eq!(malformed_line("# header\n\ns1:A,B\n\nbroken\n"), 5);
}

#[test]
fn error_line_counts_skipped_empty_students() {
    assert_eq!(malformed_line("s1:\ns2:A\r\n   \ns3:A:B\n"), 4);
}

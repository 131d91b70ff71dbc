//! Reader for enrollment files.
//!
//! One student per line, `student_id:course1,course2,...`. Lines starting
//! with `#` and blank lines are ignored.

use crate::course::EnrollmentRecord;
use crate::error::{SchedulerError, SchedulerResult};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

pub fn parse_enrollments(input: &str) -> SchedulerResult<Vec<EnrollmentRecord>> {
    read_enrollments(input.as_bytes())
}

pub fn load_enrollments<P: AsRef<Path>>(path: P) -> SchedulerResult<Vec<EnrollmentRecord>> {
    let file = File::open(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "reading enrollments");
    read_enrollments(file)
}

/// Line numbers in errors count every physical line, including blanks and comments.
pub fn read_enrollments<R: Read>(reader: R) -> SchedulerResult<Vec<EnrollmentRecord>> {
    let mut fields = ReaderBuilder::new();
    fields
        .delimiter(b':')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .trim(Trim::All);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut row = StringRecord::new();
    for (idx, text) in BufReader::new(reader).lines().enumerate() {
        let text = text?;
        let line = idx + 1;
        if !fields.from_reader(text.as_bytes()).read_record(&mut row)? {
            continue;
        }
        match parse_row(&row, line)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    debug!(records = records.len(), skipped, "enrollments parsed");
    Ok(records)
}

/// `Ok(None)` for rows that carry no courses.
fn parse_row(row: &StringRecord, line: usize) -> SchedulerResult<Option<EnrollmentRecord>> {
    match row.len() {
        0 => Ok(None),
        1 if row[0].is_empty() => Ok(None),
        1 => Err(malformed(line, "missing ':' between student id and courses")),
        2 => {
            let student = &row[0];
            if student.is_empty() {
                return Err(malformed(line, "empty student id"));
            }
            let courses: Vec<&str> = row[1]
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .collect();
            if courses.is_empty() {
                warn!(line, student, "student has no courses, skipped");
                return Ok(None);
            }
            Ok(Some(EnrollmentRecord::new(student, courses)))
        }
        n => Err(malformed(
            line,
            &format!("expected one ':' separator, found {}", n - 1),
        )),
    }
}

fn malformed(line: usize, reason: &str) -> SchedulerError {
    SchedulerError::MalformedRecord {
        line,
        reason: reason.to_string(),
    }
}

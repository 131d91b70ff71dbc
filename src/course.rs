use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// Opaque course identifier taken verbatim from enrollment data.
///
/// Two courses are the same course iff their identifiers are byte-for-byte equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Course(String);

impl Course {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Course {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Course {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Course {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Course {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The courses one student is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub student: String,
    /// Distinct courses in the order they were listed.
    pub courses: Vec<Course>,
}

impl EnrollmentRecord {
    /// Repeated course identifiers collapse into their first occurrence.
    pub fn new<I, C>(student: impl Into<String>, courses: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Course>,
    {
        let mut seen = HashSet::new();
        let courses = courses
            .into_iter()
            .map(Into::into)
            .filter(|course: &Course| seen.insert(course.clone()))
            .collect();
        Self {
            student: student.into(),
            courses,
        }
    }

    /// A record only produces conflicts when it names two or more courses.
    pub fn is_conflict_source(&self) -> bool {
        self.courses.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_courses_keep_first_occurrence() {
        let record = EnrollmentRecord::new("s1", ["B", "A", "B", "C", "A"]);
        let ids: Vec<&str> = record.courses.iter().map(Course::as_str).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn single_course_record_is_not_a_conflict_source() {
        assert!(!EnrollmentRecord::new("s1", ["A", "A"]).is_conflict_source());
        assert!(EnrollmentRecord::new("s1", ["A", "B"]).is_conflict_source());
    }

    #[test]
    fn course_serializes_as_plain_string() {
        let json = serde_json::to_string(&Course::from("CS101")).unwrap();
        assert_eq!(json, "\"CS101\"");
    }
}

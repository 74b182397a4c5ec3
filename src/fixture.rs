//! fixture
//!
//! Loading roster fixture files into fresh in-memory stores.
//!
//! # Format
//!
//! The format follows the file extension: `.json` is parsed as JSON,
//! anything else as TOML.
//!
//! ```toml
//! [[students]]
//! id = 1
//! name = "Alice"
//! email = "alice@example.com"
//! address = "123 Main St"
//!
//! [[courses]]
//! id = 10
//! course_name = "Rust 101"
//! start_date = "2024-09-02"
//! week_duration = 8
//! students = [1]
//! ```
//!
//! # Semantics
//!
//! - Every record goes through entity validation; one invalid record fails
//!   the whole load.
//! - Records are saved in file order. A record whose id is already stored is
//!   skipped with a warning, so the first one wins.
//! - Roster entries naming students that were never loaded are kept and
//!   reported as warnings.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::course::Course;
use crate::core::student::Student;
use crate::core::types::{CourseId, StudentId};
use crate::store::{dangling_roster_ids, CourseDao, CourseStore, StudentDao, StudentStore};

/// Errors from fixture loading.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid fixture '{path}': {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Fixture file encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Toml,
    Json,
}

impl FixtureFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FixtureFormat::Json,
            _ => FixtureFormat::Toml,
        }
    }
}

/// A non-fatal problem found while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureWarning {
    DuplicateStudent(StudentId),
    DuplicateCourse(CourseId),
    UnknownRosterStudent { course: CourseId, student: StudentId },
}

impl fmt::Display for FixtureWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureWarning::DuplicateStudent(id) => {
                write!(f, "student {id} appears more than once; keeping the first")
            }
            FixtureWarning::DuplicateCourse(id) => {
                write!(f, "course {id} appears more than once; keeping the first")
            }
            FixtureWarning::UnknownRosterStudent { course, student } => {
                write!(f, "course {course} lists unknown student {student}")
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FixtureFile {
    students: Vec<Student>,
    courses: Vec<Course>,
}

/// Stores populated from a fixture.
#[derive(Debug, Default)]
pub struct Fixture {
    pub students: StudentStore,
    pub courses: CourseStore,
    pub warnings: Vec<FixtureWarning>,
}

impl Fixture {
    /// Read and load a fixture file.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::ReadError` if the file cannot be read and
    /// `FixtureError::Invalid` if it does not parse or holds an invalid
    /// record.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path).map_err(|e| FixtureError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let fixture = Self::parse(&contents, FixtureFormat::from_path(path)).map_err(|message| {
            FixtureError::Invalid {
                path: path.to_path_buf(),
                message,
            }
        })?;

        tracing::debug!(
            path = %path.display(),
            students = fixture.students.len(),
            courses = fixture.courses.len(),
            warnings = fixture.warnings.len(),
            "loaded fixture"
        );
        Ok(fixture)
    }

    /// Parse fixture contents. The error is a parser message.
    pub fn parse(contents: &str, format: FixtureFormat) -> Result<Self, String> {
        let file: FixtureFile = match format {
            FixtureFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string())?,
            FixtureFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string())?,
        };
        Ok(Self::from_records(file.students, file.courses))
    }

    /// Save records in order, collecting warnings for duplicates and
    /// unknown roster entries.
    pub fn from_records(students: Vec<Student>, courses: Vec<Course>) -> Self {
        let mut fixture = Fixture::default();

        for student in students {
            let id = student.id();
            if fixture.students.save(student).is_none() {
                fixture.warnings.push(FixtureWarning::DuplicateStudent(id));
            }
        }

        for course in courses {
            let id = course.id();
            let dangling = dangling_roster_ids(&course, &fixture.students);
            if fixture.courses.save(course).is_none() {
                fixture.warnings.push(FixtureWarning::DuplicateCourse(id));
                continue;
            }
            fixture.warnings.extend(
                dangling
                    .into_iter()
                    .map(|student| FixtureWarning::UnknownRosterStudent { course: id, student }),
            );
        }

        fixture
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    const TOML_FIXTURE: &str = r#"
        [[students]]
        id = 1
        name = "Alice"
        email = "alice@example.com"
        address = "123 Main St"

        [[students]]
        id = 2
        name = "Bob"
        email = "bob@example.com"
        address = "9 Side Rd"

        [[courses]]
        id = 10
        course_name = "Rust 101"
        start_date = "2024-09-02"
        week_duration = 8
        students = [2, 1]
    "#;

    #[test]
    fn parses_toml() {
        let fixture = Fixture::parse(TOML_FIXTURE, FixtureFormat::Toml).unwrap();
        assert_eq!(fixture.students.len(), 2);
        assert_eq!(fixture.courses.len(), 1);
        assert!(fixture.warnings.is_empty());

        let course = fixture.courses.find_by_id(CourseId::new(10)).unwrap();
        assert_eq!(
            course.start_date(),
            NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
        );
        assert_eq!(course.students(), &[StudentId::new(2), StudentId::new(1)]);
    }

    #[test]
    fn parses_json() {
        let json = r#"{
            "students": [{"id": 7, "name": "Gus", "email": "g@x.io", "address": "Dock 3"}],
            "courses": []
        }"#;
        let fixture = Fixture::parse(json, FixtureFormat::Json).unwrap();
        assert_eq!(
            fixture.students.find_by_email("g@x.io").map(|s| s.id()),
            Some(StudentId::new(7))
        );
    }

    #[test]
    fn empty_file_is_empty_fixture() {
        let fixture = Fixture::parse("", FixtureFormat::Toml).unwrap();
        assert!(fixture.students.is_empty());
        assert!(fixture.courses.is_empty());
    }

    #[test]
    fn invalid_record_fails_load() {
        let bad = r#"
            [[students]]
            id = 1
            name = "  "
            email = "a@x.io"
            address = "Here"
        "#;
        let err = Fixture::parse(bad, FixtureFormat::Toml).unwrap_err();
        assert!(err.contains("name may not be blank"));
    }

    #[test]
    fn duplicates_become_warnings() {
        let dupes = r#"
            [[students]]
            id = 1
            name = "First"
            email = "a@x.io"
            address = "Here"

            [[students]]
            id = 1
            name = "Second"
            email = "b@x.io"
            address = "There"

            [[courses]]
            id = 5
            course_name = "A"
            start_date = "2024-01-01"
            week_duration = 1

            [[courses]]
            id = 5
            course_name = "B"
            start_date = "2024-01-01"
            week_duration = 1
        "#;
        let fixture = Fixture::parse(dupes, FixtureFormat::Toml).unwrap();
        assert_eq!(fixture.students.len(), 1);
        assert_eq!(
            fixture.students.find_by_id(StudentId::new(1)).unwrap().name(),
            "First"
        );
        assert_eq!(
            fixture.warnings,
            vec![
                FixtureWarning::DuplicateStudent(StudentId::new(1)),
                FixtureWarning::DuplicateCourse(CourseId::new(5)),
            ]
        );
    }

    #[test]
    fn unknown_roster_students_are_kept_and_reported() {
        let contents = r#"
            [[courses]]
            id = 5
            course_name = "A"
            start_date = "2024-01-01"
            week_duration = 1
            students = [42]
        "#;
        let fixture = Fixture::parse(contents, FixtureFormat::Toml).unwrap();
        assert_eq!(
            fixture.courses.find_by_id(CourseId::new(5)).unwrap().students(),
            &[StudentId::new(42)]
        );
        assert_eq!(
            fixture.warnings,
            vec![FixtureWarning::UnknownRosterStudent {
                course: CourseId::new(5),
                student: StudentId::new(42),
            }]
        );
        assert!(fixture.warnings[0].to_string().contains("unknown student 42"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            FixtureFormat::from_path(Path::new("a/roster.JSON")),
            FixtureFormat::Json
        );
        assert_eq!(
            FixtureFormat::from_path(Path::new("roster.toml")),
            FixtureFormat::Toml
        );
        assert_eq!(FixtureFormat::from_path(Path::new("roster")), FixtureFormat::Toml);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Fixture::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, FixtureError::ReadError { .. }));
    }
}

//! core::course
//!
//! The course entity and its roster.
//!
//! # Identity
//!
//! Like [`Student`], a course is identified by its [`CourseId`] alone and the
//! id cannot be changed after construction.
//!
//! # Roster
//!
//! The roster is the ordered list of students registered for the course.
//! It holds student keys, not student records: a course refers to students
//! but does not own them, and removing a student from a store leaves every
//! roster that mentions it untouched. Use
//! [`resolve_roster`](crate::store::resolve_roster) to turn the keys back
//! into records.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rollbook::core::course::Course;
//! use rollbook::core::student::Student;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
//! let mut course = Course::new(10, "Rust 101", start, 8).unwrap();
//! let alice = Student::new(1, "Alice", "alice@example.com", "123 Main St").unwrap();
//!
//! course.register(&alice).unwrap();
//! assert!(course.register(&alice).is_err());
//!
//! // Unregistering someone who is not on the roster is fine.
//! course.unregister(&alice);
//! assert!(!course.unregister(&alice));
//! ```

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::student::Student;
use super::types::{CourseId, ModelError, NonBlank, StudentId, WeekDuration};

/// A course record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord", into = "CourseRecord")]
pub struct Course {
    id: CourseId,
    course_name: NonBlank,
    start_date: NaiveDate,
    week_duration: WeekDuration,
    students: Vec<StudentId>,
}

impl Course {
    /// Create a new course with an empty roster.
    ///
    /// # Errors
    ///
    /// - `ModelError::BlankField` if `course_name` is blank
    /// - `ModelError::InvalidWeekDuration` if `week_duration` is zero
    pub fn new(
        id: impl Into<CourseId>,
        course_name: impl Into<String>,
        start_date: NaiveDate,
        week_duration: u32,
    ) -> Result<Self, ModelError> {
        Ok(Self::from_parts(
            id.into(),
            NonBlank::new("courseName", course_name)?,
            start_date,
            WeekDuration::new(week_duration)?,
        ))
    }

    fn from_parts(
        id: CourseId,
        course_name: NonBlank,
        start_date: NaiveDate,
        week_duration: WeekDuration,
    ) -> Self {
        Self {
            id,
            course_name,
            start_date,
            week_duration,
            students: Vec::new(),
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn course_name(&self) -> &str {
        self.course_name.as_str()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn week_duration(&self) -> u32 {
        self.week_duration.get()
    }

    /// Registered student keys, in registration order.
    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn set_course_name(&mut self, course_name: impl Into<String>) -> Result<(), ModelError> {
        self.course_name = NonBlank::new("courseName", course_name)?;
        Ok(())
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
    }

    pub fn set_week_duration(&mut self, week_duration: u32) -> Result<(), ModelError> {
        self.week_duration = WeekDuration::new(week_duration)?;
        Ok(())
    }

    /// Replace the whole roster.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateRosterEntry` if `students` names the
    /// same key twice. The current roster is kept in that case.
    pub fn set_students(&mut self, students: Vec<StudentId>) -> Result<(), ModelError> {
        for (i, id) in students.iter().enumerate() {
            if students[..i].contains(id) {
                return Err(ModelError::DuplicateRosterEntry {
                    student: *id,
                    course: self.id,
                });
            }
        }
        self.students = students;
        Ok(())
    }

    pub fn is_registered(&self, student: &Student) -> bool {
        self.students.contains(&student.id())
    }

    /// Append a student to the roster.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::AlreadyRegistered` if an equal student is
    /// already on the roster.
    pub fn register(&mut self, student: &Student) -> Result<(), ModelError> {
        if self.is_registered(student) {
            return Err(ModelError::AlreadyRegistered {
                student: student.id(),
                course: self.id,
            });
        }
        self.students.push(student.id());
        Ok(())
    }

    /// Remove a student from the roster. Returns whether it was present.
    pub fn unregister(&mut self, student: &Student) -> bool {
        match self.students.iter().position(|id| *id == student.id()) {
            Some(index) => {
                self.students.remove(index);
                true
            }
            None => false,
        }
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CourseRecord {
    id: CourseId,
    course_name: String,
    start_date: NaiveDate,
    week_duration: i64,
    #[serde(default)]
    students: Vec<StudentId>,
}

impl TryFrom<CourseRecord> for Course {
    type Error = ModelError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        let mut course = Course::from_parts(
            record.id,
            NonBlank::new("courseName", record.course_name)?,
            record.start_date,
            WeekDuration::try_from(record.week_duration)?,
        );
        course.set_students(record.students)?;
        Ok(course)
    }
}

impl From<Course> for CourseRecord {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            course_name: course.course_name.into(),
            start_date: course.start_date,
            week_duration: i64::from(course.week_duration.get()),
            students: course.students,
        }
    }
}

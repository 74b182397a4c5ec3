//! store::memory
//!
//! In-memory store implementations.
//!
//! Each store owns its own [`OrderedSet`]; two stores never share entities.
//! Mutations emit `tracing` debug events so embedding applications can
//! follow what was saved or rejected.

use chrono::NaiveDate;

use super::ordered::OrderedSet;
use super::traits::{CourseDao, StudentDao};
use crate::core::course::Course;
use crate::core::student::Student;
use crate::core::types::{CourseId, StudentId};

/// In-memory [`StudentDao`].
#[derive(Debug, Clone, Default)]
pub struct StudentStore {
    students: OrderedSet<Student>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentDao for StudentStore {
    fn save(&mut self, student: Student) -> Option<&Student> {
        let id = student.id();
        let saved = self.students.insert(student);
        tracing::debug!(student_id = %id, saved = saved.is_some(), "save student");
        saved
    }

    fn find_by_email(&self, email: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.email() == email)
    }

    fn find_by_name(&self, name: &str) -> Vec<&Student> {
        self.students.iter().filter(|s| s.name() == name).collect()
    }

    fn find_by_id(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id)
    }

    fn find_by_id_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.get_mut(id)
    }

    fn find_all(&self) -> Vec<Student> {
        self.students.snapshot()
    }

    fn remove(&mut self, student: &Student) -> bool {
        let removed = self.students.remove(student.id());
        tracing::debug!(student_id = %student.id(), removed, "remove student");
        removed
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}

/// In-memory [`CourseDao`].
#[derive(Debug, Clone, Default)]
pub struct CourseStore {
    courses: OrderedSet<Course>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CourseDao for CourseStore {
    fn save(&mut self, course: Course) -> Option<&Course> {
        let id = course.id();
        let saved = self.courses.insert(course);
        tracing::debug!(course_id = %id, saved = saved.is_some(), "save course");
        saved
    }

    fn find_by_id(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(id)
    }

    fn find_by_id_mut(&mut self, id: CourseId) -> Option<&mut Course> {
        self.courses.get_mut(id)
    }

    fn find_by_name(&self, name: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.course_name() == name)
            .collect()
    }

    fn find_by_date(&self, date: NaiveDate) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.start_date() == date)
            .collect()
    }

    fn find_all(&self) -> Vec<Course> {
        self.courses.snapshot()
    }

    fn remove(&mut self, course: &Course) -> bool {
        let removed = self.courses.remove(course.id());
        tracing::debug!(course_id = %course.id(), removed, "remove course");
        removed
    }

    fn len(&self) -> usize {
        self.courses.len()
    }
}

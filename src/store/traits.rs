//! store::traits
//!
//! Data-access trait definitions.
//!
//! # Design
//!
//! [`StudentDao`] and [`CourseDao`] are the capability sets every storage
//! backend offers. Call sites take `&dyn StudentDao` / `&dyn CourseDao` so a
//! persistent backend can replace the in-memory stores without touching
//! them.
//!
//! # Sentinel results
//!
//! Negative outcomes are values, not errors:
//! - `save` returns `None` when the key is already stored
//! - `find_by_id` / `find_by_email` return `None` when nothing matches
//! - `find_by_name` / `find_by_date` return an empty `Vec`
//! - `remove` returns `false` when the entity was not stored
//!
//! # Concurrency
//!
//! Implementations are not synchronized. Callers sharing a store between
//! threads must wrap it in their own lock.
//!
//! # Example
//!
//! ```
//! use rollbook::core::student::Student;
//! use rollbook::core::types::StudentId;
//! use rollbook::store::{StudentDao, StudentStore};
//!
//! fn enroll(store: &mut dyn StudentDao, student: Student) -> bool {
//!     store.save(student).is_some()
//! }
//!
//! let mut store = StudentStore::new();
//! let alice = Student::new(1, "Alice", "alice@example.com", "123 Main St").unwrap();
//!
//! assert!(enroll(&mut store, alice.clone()));
//! assert!(!enroll(&mut store, alice));
//! assert!(store.find_by_id(StudentId::new(999)).is_none());
//! ```

use chrono::NaiveDate;

use crate::core::course::Course;
use crate::core::student::Student;
use crate::core::types::{CourseId, StudentId};

/// Storage operations for students.
pub trait StudentDao {
    /// Save a new student.
    ///
    /// Returns the stored student, or `None` if a student with the same id
    /// is already stored. The stored student is left as it was.
    fn save(&mut self, student: Student) -> Option<&Student>;

    /// First student, by insertion order, whose email equals `email`.
    ///
    /// Emails are not unique, so later matches are ignored.
    fn find_by_email(&self, email: &str) -> Option<&Student>;

    /// All students whose name equals `name`, in insertion order.
    fn find_by_name(&self, name: &str) -> Vec<&Student>;

    fn find_by_id(&self, id: StudentId) -> Option<&Student>;

    /// Mutable access for running validating setters on a stored student.
    fn find_by_id_mut(&mut self, id: StudentId) -> Option<&mut Student>;

    /// Owned copy of every stored student, in insertion order.
    ///
    /// Changing the returned `Vec` does not change the store.
    fn find_all(&self) -> Vec<Student>;

    /// Remove the student equal to `student`. Returns whether it was stored.
    fn remove(&mut self, student: &Student) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Storage operations for courses.
pub trait CourseDao {
    /// Save a new course.
    ///
    /// Returns the stored course, or `None` if a course with the same id is
    /// already stored.
    fn save(&mut self, course: Course) -> Option<&Course>;

    fn find_by_id(&self, id: CourseId) -> Option<&Course>;

    fn find_by_id_mut(&mut self, id: CourseId) -> Option<&mut Course>;

    /// All courses whose name equals `name`, in insertion order.
    fn find_by_name(&self, name: &str) -> Vec<&Course>;

    /// All courses starting on `date`, in insertion order.
    fn find_by_date(&self, date: NaiveDate) -> Vec<&Course>;

    /// Owned copy of every stored course, in insertion order.
    fn find_all(&self) -> Vec<Course>;

    /// Remove the course equal to `course`. Returns whether it was stored.
    fn remove(&mut self, course: &Course) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

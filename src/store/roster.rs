//! store::roster
//!
//! Resolving course rosters against a student store.
//!
//! Rosters hold student keys. No referential integrity is kept between a
//! course and the student store, so a roster may name students the store
//! no longer holds; those keys are skipped here and reported separately.

use super::traits::StudentDao;
use crate::core::course::Course;
use crate::core::student::Student;
use crate::core::types::StudentId;

/// Stored students on the roster of `course`, in roster order.
pub fn resolve_roster<'s>(course: &Course, students: &'s dyn StudentDao) -> Vec<&'s Student> {
    course
        .students()
        .iter()
        .filter_map(|id| students.find_by_id(*id))
        .collect()
}

/// Roster keys of `course` that `students` does not hold.
pub fn dangling_roster_ids(course: &Course, students: &dyn StudentDao) -> Vec<StudentId> {
    course
        .students()
        .iter()
        .copied()
        .filter(|id| students.find_by_id(*id).is_none())
        .collect()
}

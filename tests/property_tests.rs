//! Property-based tests for entities and stores.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use std::collections::HashSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use rollbook::core::course::Course;
use rollbook::core::student::Student;
use rollbook::core::types::{CourseId, ModelError, StudentId};
use rollbook::store::{CourseDao, CourseStore, StudentDao, StudentStore};

/// Strategy for strings with at least one non-whitespace character.
fn non_blank() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-z0-9@.]{1,12}[ ]{0,2}"
}

/// Strategy for strings that are empty or whitespace only.
fn blank() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 0..6)
        .prop_map(|chars| chars.into_iter().collect())
}

fn valid_date() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn student(id: i32) -> Student {
    Student::new(id, format!("S{id}"), format!("s{id}@x.io"), "Campus").unwrap()
}

proptest! {
    /// Valid field sets construct and read back unchanged.
    #[test]
    fn student_getters_return_inputs(
        id in any::<i32>(),
        name in non_blank(),
        email in non_blank(),
        address in non_blank(),
    ) {
        let s = Student::new(id, name.clone(), email.clone(), address.clone()).unwrap();
        prop_assert_eq!(s.id(), StudentId::new(id));
        prop_assert_eq!(s.name(), name.as_str());
        prop_assert_eq!(s.email(), email.as_str());
        prop_assert_eq!(s.address(), address.as_str());
    }

    #[test]
    fn course_getters_return_inputs(
        id in any::<i32>(),
        name in non_blank(),
        start in valid_date(),
        weeks in 1u32..520,
    ) {
        let c = Course::new(id, name.clone(), start, weeks).unwrap();
        prop_assert_eq!(c.id(), CourseId::new(id));
        prop_assert_eq!(c.course_name(), name.as_str());
        prop_assert_eq!(c.start_date(), start);
        prop_assert_eq!(c.week_duration(), weeks);
    }

    /// Blank input fails and leaves the entity as it was.
    #[test]
    fn blank_setters_never_change_student(value in blank()) {
        let mut s = student(1);
        prop_assert!(s.set_name(value.clone()).is_err());
        prop_assert!(s.set_email(value.clone()).is_err());
        prop_assert!(s.set_address(value.clone()).is_err());
        prop_assert_eq!(s.name(), "S1");
        prop_assert_eq!(s.email(), "s1@x.io");
        prop_assert_eq!(s.address(), "Campus");

        prop_assert_eq!(
            Student::new(1, value.clone(), "e", "a").unwrap_err(),
            ModelError::BlankField { field: "name" }
        );
    }

    #[test]
    fn blank_course_name_is_rejected(value in blank(), start in valid_date()) {
        prop_assert!(Course::new(1, value.clone(), start, 1).is_err());

        let mut c = Course::new(1, "Math", start, 1).unwrap();
        prop_assert!(c.set_course_name(value).is_err());
        prop_assert_eq!(c.course_name(), "Math");
    }

    /// find_all follows save order, skipping ids that were already saved.
    #[test]
    fn store_keeps_first_insertion_order(ids in prop::collection::vec(-20i32..20, 0..40)) {
        let mut store = StudentStore::new();
        let mut expected = Vec::new();
        let mut seen = HashSet::new();

        for id in &ids {
            let saved = store.save(student(*id)).is_some();
            prop_assert_eq!(saved, seen.insert(*id));
            if saved {
                expected.push(*id);
            }
        }

        let order: Vec<i32> = store.find_all().iter().map(|s| s.id().get()).collect();
        prop_assert_eq!(order, expected);
        prop_assert_eq!(store.len(), seen.len());
    }

    /// remove succeeds once per stored id and re-saving moves the id last.
    #[test]
    fn remove_once_then_resave_goes_last(
        ids in prop::collection::hash_set(0i32..50, 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let ids: Vec<i32> = ids.into_iter().collect();
        let mut store = StudentStore::new();
        for id in &ids {
            store.save(student(*id));
        }

        let target = student(ids[pick.index(ids.len())]);
        prop_assert!(store.remove(&target));
        prop_assert!(!store.remove(&target));
        prop_assert!(store.find_by_id(target.id()).is_none());

        store.save(target.clone());
        let last = store.find_all().last().map(|s| s.id());
        prop_assert_eq!(last, Some(target.id()));
    }

    /// A roster never holds a student twice, whatever the registration order.
    #[test]
    fn roster_stays_unique(ids in prop::collection::vec(0i32..10, 0..30)) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut course = Course::new(1, "Roll", start, 4).unwrap();
        let mut seen = HashSet::new();

        for id in ids {
            let result = course.register(&student(id));
            prop_assert_eq!(result.is_ok(), seen.insert(id));
        }

        let roster: HashSet<StudentId> = course.students().iter().copied().collect();
        prop_assert_eq!(roster.len(), course.students().len());
    }

    /// find_by_date matches exactly the courses saved with that date.
    #[test]
    fn find_by_date_matches_filter(dates in prop::collection::vec(0u32..5, 0..20)) {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut store = CourseStore::new();
        for (i, offset) in dates.iter().enumerate() {
            let start = base + chrono::Days::new(u64::from(*offset));
            store.save(Course::new(i as i32, "C", start, 1).unwrap());
        }

        let found: Vec<i32> = store.find_by_date(base).iter().map(|c| c.id().get()).collect();
        let expected: Vec<i32> = dates
            .iter()
            .enumerate()
            .filter(|(_, offset)| **offset == 0)
            .map(|(i, _)| i as i32)
            .collect();
        prop_assert_eq!(found, expected);
    }
}

//! store
//!
//! Data-access layer for students and courses.
//!
//! # Architecture
//!
//! Stores are reached through the [`StudentDao`] and [`CourseDao`] traits.
//! The only implementations are the in-memory [`StudentStore`] and
//! [`CourseStore`], both backed by an [`OrderedSet`]:
//!
//! - Uniqueness is keyed by entity id
//! - Iteration follows insertion order
//! - Lookups other than by id are linear scans
//!
//! Each store instance owns its data. There is no process-wide state, so
//! every test or application builds the stores it needs.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rollbook::core::course::Course;
//! use rollbook::store::{CourseDao, CourseStore};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
//! let mut courses = CourseStore::new();
//! courses.save(Course::new(10, "Rust 101", start, 8).unwrap());
//! courses.save(Course::new(11, "Rust 102", start, 8).unwrap());
//!
//! assert_eq!(courses.find_by_date(start).len(), 2);
//! ```

mod memory;
mod ordered;
mod roster;
mod traits;

pub use memory::{CourseStore, StudentStore};
pub use ordered::{Keyed, OrderedSet};
pub use roster::{dangling_roster_ids, resolve_roster};
pub use traits::{CourseDao, StudentDao};

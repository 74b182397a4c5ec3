//! Rollbook - an in-memory record store for students and courses
//!
//! Rollbook keeps students and courses in insertion-ordered, key-unique
//! stores and exposes create/find/delete operations through data-access
//! traits. A small CLI loads a fixture file into fresh stores and queries
//! them.
//!
//! # Architecture
//!
//! - [`core`] - Entities, strong types and configuration
//! - [`store`] - Data-access traits and in-memory stores
//! - [`fixture`] - Loading fixture files into stores
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Output formatting
//!
//! # Correctness Invariants
//!
//! 1. Entities are never built or mutated into an invalid state
//! 2. A student or course is identified by its id alone, and ids never change
//! 3. A store holds at most one entity per id, in insertion order
//! 4. A course roster never lists the same student twice
//!
//! # Example
//!
//! ```
//! use rollbook::core::student::Student;
//! use rollbook::core::types::StudentId;
//! use rollbook::store::{StudentDao, StudentStore};
//!
//! let mut students = StudentStore::new();
//! let alice = Student::new(1, "Alice", "alice@example.com", "123 Main St").unwrap();
//!
//! assert!(students.save(alice.clone()).is_some());
//! assert!(students.save(alice).is_none());
//! assert_eq!(students.find_by_id(StudentId::new(1)).unwrap().name(), "Alice");
//! assert!(students.find_by_id(StudentId::new(999)).is_none());
//! ```

pub mod cli;
pub mod core;
pub mod fixture;
pub mod store;
pub mod ui;

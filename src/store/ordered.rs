//! store::ordered
//!
//! Insertion-ordered collection with key uniqueness.
//!
//! # Design
//!
//! [`OrderedSet`] keeps its values in a `Vec` so iteration follows insertion
//! order, and a `HashSet` of keys so uniqueness checks do not need a scan.
//! Lookups by anything other than the key are linear scans over the `Vec`.
//!
//! Removing a value and inserting it again places it at the end.

use std::collections::HashSet;
use std::hash::Hash;

use crate::core::course::Course;
use crate::core::student::Student;
use crate::core::types::{CourseId, StudentId};

/// A value that carries its own identity key.
pub trait Keyed {
    type Key: Copy + Eq + Hash;

    fn key(&self) -> Self::Key;
}

impl Keyed for Student {
    type Key = StudentId;

    fn key(&self) -> StudentId {
        self.id()
    }
}

impl Keyed for Course {
    type Key = CourseId;

    fn key(&self) -> CourseId {
        self.id()
    }
}

/// Insertion-ordered set of keyed values.
#[derive(Debug, Clone)]
pub struct OrderedSet<T: Keyed> {
    values: Vec<T>,
    keys: HashSet<T::Key>,
}

impl<T: Keyed> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            keys: HashSet::new(),
        }
    }
}

impl<T: Keyed> OrderedSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` unless its key is already present.
    ///
    /// Returns the stored value, or `None` if the key was taken. The value
    /// already in the set is never replaced.
    pub fn insert(&mut self, value: T) -> Option<&T> {
        if !self.keys.insert(value.key()) {
            return None;
        }
        self.values.push(value);
        self.values.last()
    }

    pub fn contains_key(&self, key: T::Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn get(&self, key: T::Key) -> Option<&T> {
        if !self.contains_key(key) {
            return None;
        }
        self.values.iter().find(|value| value.key() == key)
    }

    pub fn get_mut(&mut self, key: T::Key) -> Option<&mut T> {
        if !self.contains_key(key) {
            return None;
        }
        self.values.iter_mut().find(|value| value.key() == key)
    }

    /// Remove the value with `key`. Returns whether it was present.
    pub fn remove(&mut self, key: T::Key) -> bool {
        if !self.keys.remove(&key) {
            return false;
        }
        self.values.retain(|value| value.key() != key);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Keyed + Clone> OrderedSet<T> {
    /// Owned copy of the contents in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.values.clone()
    }
}

//! core::student
//!
//! The student entity.
//!
//! # Identity
//!
//! A student is identified by its [`StudentId`] alone. Equality and hashing
//! look only at the id, so two values with the same id are the same student
//! even if their name, email or address differ. The id has no setter; the
//! descriptive fields are mutable through validating setters.
//!
//! # Example
//!
//! ```
//! use rollbook::core::student::Student;
//!
//! let mut alice = Student::new(1, "Alice", "alice@example.com", "123 Main St").unwrap();
//! assert_eq!(alice.name(), "Alice");
//!
//! // A blank value is rejected and the student keeps its old name.
//! assert!(alice.set_name("  ").is_err());
//! assert_eq!(alice.name(), "Alice");
//! ```

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::types::{ModelError, NonBlank, StudentId};

/// A student record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StudentRecord", into = "StudentRecord")]
pub struct Student {
    id: StudentId,
    name: NonBlank,
    email: NonBlank,
    address: NonBlank,
}

impl Student {
    /// Create a new student.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::BlankField` if `name`, `email` or `address`
    /// is blank.
    pub fn new(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            id: id.into(),
            name: NonBlank::new("name", name)?,
            email: NonBlank::new("email", email)?,
            address: NonBlank::new("address", address)?,
        })
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ModelError> {
        self.name = NonBlank::new("name", name)?;
        Ok(())
    }

    /// Emails are not unique across students; no check is made here.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), ModelError> {
        self.email = NonBlank::new("email", email)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ModelError> {
        self.address = NonBlank::new("address", address)?;
        Ok(())
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Wire shape of a student. Deserialization goes through [`Student::new`]
/// so field names show up in validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StudentRecord {
    id: StudentId,
    name: String,
    email: String,
    address: String,
}

impl TryFrom<StudentRecord> for Student {
    type Error = ModelError;

    fn try_from(record: StudentRecord) -> Result<Self, Self::Error> {
        Student::new(record.id, record.name, record.email, record.address)
    }
}

impl From<Student> for StudentRecord {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name.into(),
            email: student.email.into(),
            address: student.address.into(),
        }
    }
}

//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`StudentId`] - Identity key of a student
//! - [`CourseId`] - Identity key of a course
//! - [`NonBlank`] - String that is neither empty nor whitespace-only
//! - [`WeekDuration`] - Positive number of weeks
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so entities built from them never need to
//! re-check their fields.
//!
//! # Examples
//!
//! ```
//! use rollbook::core::types::{NonBlank, WeekDuration};
//!
//! let name = NonBlank::new("name", "Alice").unwrap();
//! assert_eq!(name.as_str(), "Alice");
//!
//! assert!(NonBlank::new("name", "   ").is_err());
//! assert!(WeekDuration::new(0).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when an entity receives an invalid argument.
///
/// Every variant is an invalid-argument condition: the call that produced
/// it left the entity exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{field} may not be blank")]
    BlankField { field: &'static str },

    #[error("weekDuration must be > 0, got {0}")]
    InvalidWeekDuration(i64),

    #[error("student {student} is already registered in course {course}")]
    AlreadyRegistered { student: StudentId, course: CourseId },

    #[error("student {student} appears more than once in the roster of course {course}")]
    DuplicateRosterEntry { student: StudentId, course: CourseId },
}

/// Identity key of a [`Student`](crate::core::student::Student).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i32);

impl StudentId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for StudentId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity key of a [`Course`](crate::core::course::Course).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(i32);

impl CourseId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for CourseId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A string that is not blank.
///
/// Blank means empty or made up only of whitespace. The field name is
/// carried into the error so callers can tell which argument was rejected.
///
/// # Example
///
/// ```
/// use rollbook::core::types::{ModelError, NonBlank};
///
/// let email = NonBlank::new("email", "alice@example.com").unwrap();
/// assert_eq!(email.as_str(), "alice@example.com");
///
/// assert_eq!(
///     NonBlank::new("email", "\t").unwrap_err(),
///     ModelError::BlankField { field: "email" }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonBlank(String);

impl NonBlank {
    /// Create a new validated string for the named field.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::BlankField` if `value` is empty or whitespace.
    pub fn new(field: &'static str, value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ModelError::BlankField { field });
        }
        Ok(Self(value))
    }

    /// Get the string as a slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonBlank {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new("value", value)
    }
}

impl From<NonBlank> for String {
    fn from(value: NonBlank) -> Self {
        value.0
    }
}

impl AsRef<str> for NonBlank {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonBlank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Course length in weeks. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct WeekDuration(u32);

impl WeekDuration {
    /// Create a duration from a week count.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidWeekDuration` for zero.
    pub fn new(weeks: u32) -> Result<Self, ModelError> {
        if weeks == 0 {
            return Err(ModelError::InvalidWeekDuration(0));
        }
        Ok(Self(weeks))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Untyped input (fixture files, CLI arguments) may carry negative or
/// oversized counts; both are rejected.
impl TryFrom<i64> for WeekDuration {
    type Error = ModelError;

    fn try_from(weeks: i64) -> Result<Self, Self::Error> {
        let weeks_u32 = u32::try_from(weeks).map_err(|_| ModelError::InvalidWeekDuration(weeks))?;
        Self::new(weeks_u32)
    }
}

impl From<WeekDuration> for u32 {
    fn from(value: WeekDuration) -> Self {
        value.0
    }
}

impl fmt::Display for WeekDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod non_blank {
        use super::*;

        #[test]
        fn accepts_text() {
            let value = NonBlank::new("name", "Alice").unwrap();
            assert_eq!(value.as_str(), "Alice");
            assert_eq!(value.to_string(), "Alice");
        }

        #[test]
        fn keeps_surrounding_whitespace() {
            let value = NonBlank::new("address", "  123 Main St ").unwrap();
            assert_eq!(value.as_str(), "  123 Main St ");
        }

        #[test]
        fn rejects_empty() {
            assert_eq!(
                NonBlank::new("name", ""),
                Err(ModelError::BlankField { field: "name" })
            );
        }

        #[test]
        fn rejects_whitespace_only() {
            for blank in [" ", "\t", "\n", " \t \r\n "] {
                assert!(NonBlank::new("email", blank).is_err(), "{blank:?}");
            }
        }

        #[test]
        fn serde_rejects_blank() {
            let parsed: Result<NonBlank, _> = serde_json::from_str("\"  \"");
            assert!(parsed.is_err());

            let parsed: NonBlank = serde_json::from_str("\"Bob\"").unwrap();
            assert_eq!(parsed.as_str(), "Bob");
        }
    }

    mod week_duration {
        use super::*;

        #[test]
        fn accepts_positive() {
            assert_eq!(WeekDuration::new(1).unwrap().get(), 1);
            assert_eq!(WeekDuration::new(52).unwrap().get(), 52);
        }

        #[test]
        fn rejects_zero() {
            assert_eq!(
                WeekDuration::new(0),
                Err(ModelError::InvalidWeekDuration(0))
            );
        }

        #[test]
        fn rejects_negative_from_untyped_input() {
            assert_eq!(
                WeekDuration::try_from(-3_i64),
                Err(ModelError::InvalidWeekDuration(-3))
            );
        }

        #[test]
        fn serde_roundtrip_is_plain_integer() {
            let weeks = WeekDuration::new(8).unwrap();
            assert_eq!(serde_json::to_string(&weeks).unwrap(), "8");
            let parsed: WeekDuration = serde_json::from_str("8").unwrap();
            assert_eq!(parsed, weeks);
            assert!(serde_json::from_str::<WeekDuration>("-1").is_err());
            assert!(serde_json::from_str::<WeekDuration>("0").is_err());
        }
    }

    #[test]
    fn ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&StudentId::new(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&CourseId::new(-2)).unwrap(), "-2");
        assert_eq!(StudentId::from(3).get(), 3);
        assert_eq!(CourseId::new(4).to_string(), "4");
    }

    #[test]
    fn error_display_formatting() {
        let err = ModelError::BlankField { field: "courseName" };
        assert_eq!(err.to_string(), "courseName may not be blank");

        let err = ModelError::AlreadyRegistered {
            student: StudentId::new(1),
            course: CourseId::new(10),
        };
        assert!(err.to_string().contains("already registered"));
    }
}

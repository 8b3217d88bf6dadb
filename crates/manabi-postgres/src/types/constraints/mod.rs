//! Typed names for every database constraint, one submodule per table.
//!
//! Constraint names reported by Postgres are parsed into these enums so the
//! HTTP layer can map violations to precise responses.

pub mod learning_logs;
pub mod tasks;
pub mod users;

use std::fmt;

pub use learning_logs::LearningLogConstraints;
use serde::{Deserialize, Serialize};
pub use tasks::TaskConstraints;
pub use users::UserConstraints;

/// Any recognized constraint violation, tagged by table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ConstraintViolation {
    User(UserConstraints),
    Task(TaskConstraints),
    LearningLog(LearningLogConstraints),
}

impl ConstraintViolation {
    /// Parses a constraint name, returning `None` for names this crate does
    /// not know about.
    ///
    /// # Examples
    ///
    /// ```
    /// use manabi_postgres::types::ConstraintViolation;
    ///
    /// let violation = ConstraintViolation::new("learning_logs_title_length");
    /// assert!(violation.is_some());
    ///
    /// let unknown = ConstraintViolation::new("unknown_constraint");
    /// assert!(unknown.is_none());
    /// ```
    pub fn new(constraint: &str) -> Option<Self> {
        // Prefix routing keeps each table's parser from seeing foreign names.
        if constraint.starts_with("users_") {
            if let Some(c) = UserConstraints::new(constraint) {
                return Some(ConstraintViolation::User(c));
            }
        } else if constraint.starts_with("tasks_") {
            if let Some(c) = TaskConstraints::new(constraint) {
                return Some(ConstraintViolation::Task(c));
            }
        } else if constraint.starts_with("learning_logs_")
            && let Some(c) = LearningLogConstraints::new(constraint)
        {
            return Some(ConstraintViolation::LearningLog(c));
        }

        None
    }

    /// Name of the table the constraint lives on.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConstraintViolation::User(_) => "users",
            ConstraintViolation::Task(_) => "tasks",
            ConstraintViolation::LearningLog(_) => "learning_logs",
        }
    }

    /// Returns the underlying constraint name as used in the database.
    #[inline]
    pub fn constraint_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::User(c) => write!(f, "{}", c),
            ConstraintViolation::Task(c) => write!(f, "{}", c),
            ConstraintViolation::LearningLog(c) => write!(f, "{}", c),
        }
    }
}

impl From<ConstraintViolation> for String {
    #[inline]
    fn from(val: ConstraintViolation) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for ConstraintViolation {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| format!("Unknown constraint: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_parsing() {
        assert_eq!(
            ConstraintViolation::new("users_display_name_length"),
            Some(ConstraintViolation::User(
                UserConstraints::DisplayNameLength
            ))
        );

        assert_eq!(
            ConstraintViolation::new("learning_logs_spent_minutes_range"),
            Some(ConstraintViolation::LearningLog(
                LearningLogConstraints::SpentMinutesRange
            ))
        );

        assert_eq!(ConstraintViolation::new("unknown_constraint"), None);
    }

    #[test]
    fn table_name_extraction() {
        let violation = ConstraintViolation::User(UserConstraints::DisplayNameLength);
        assert_eq!(violation.table_name(), "users");

        let violation = ConstraintViolation::Task(TaskConstraints::TitleLength);
        assert_eq!(violation.table_name(), "tasks");

        let violation = ConstraintViolation::LearningLog(LearningLogConstraints::TaskIdFkey);
        assert_eq!(violation.table_name(), "learning_logs");
    }

    #[test]
    fn constraint_name_round_trip() {
        let violation = ConstraintViolation::LearningLog(LearningLogConstraints::ReflectionsLength);
        assert_eq!(
            violation.constraint_name(),
            "learning_logs_reflections_length"
        );
        assert_eq!(
            ConstraintViolation::new(&violation.constraint_name()),
            Some(violation)
        );
    }
}

//! Tasks table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Task table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum TaskConstraints {
    // Task validation constraints
    #[strum(serialize = "tasks_title_length")]
    TitleLength,
    #[strum(serialize = "tasks_description_length")]
    DescriptionLength,

    // Task referential constraints
    #[strum(serialize = "tasks_user_id_fkey")]
    UserIdFkey,

    // Task unique constraints
    #[strum(serialize = "tasks_pkey")]
    IdUnique,
}

impl TaskConstraints {
    /// Creates a new [`TaskConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }
}

impl From<TaskConstraints> for String {
    #[inline]
    fn from(val: TaskConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for TaskConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

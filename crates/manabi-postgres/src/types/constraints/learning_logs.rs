//! Learning logs table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Learning log table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum LearningLogConstraints {
    // Learning log validation constraints
    #[strum(serialize = "learning_logs_title_length")]
    TitleLength,
    #[strum(serialize = "learning_logs_description_length")]
    DescriptionLength,
    #[strum(serialize = "learning_logs_reflections_length")]
    ReflectionsLength,
    #[strum(serialize = "learning_logs_spent_minutes_range")]
    SpentMinutesRange,

    // Learning log referential constraints
    #[strum(serialize = "learning_logs_user_id_fkey")]
    UserIdFkey,
    #[strum(serialize = "learning_logs_task_id_fkey")]
    TaskIdFkey,

    // Learning log unique constraints
    #[strum(serialize = "learning_logs_pkey")]
    IdUnique,
}

impl LearningLogConstraints {
    /// Creates a new [`LearningLogConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }
}

impl From<LearningLogConstraints> for String {
    #[inline]
    fn from(val: LearningLogConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for LearningLogConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

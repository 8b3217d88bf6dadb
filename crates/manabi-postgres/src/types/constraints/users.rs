//! Users table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// User table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum UserConstraints {
    // User validation constraints
    #[strum(serialize = "users_display_name_length")]
    DisplayNameLength,

    // User unique constraints
    #[strum(serialize = "users_pkey")]
    IdUnique,
}

impl UserConstraints {
    /// Creates a new [`UserConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }
}

impl From<UserConstraints> for String {
    #[inline]
    fn from(val: UserConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for UserConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

//! User role enumeration for access control.

use std::cmp;

use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the role and permission level of a user.
///
/// This enumeration corresponds to the `USER_ROLE` PostgreSQL enum and provides
/// hierarchical access control with clearly defined capabilities.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::UserRole"]
pub enum UserRole {
    /// Regular learner who records their own learning logs
    #[db_rename = "student"]
    #[serde(rename = "student")]
    #[default]
    Student,

    /// Can review learning logs of assigned students
    #[db_rename = "teacher"]
    #[serde(rename = "teacher")]
    Teacher,

    /// Administrative access with full management capabilities
    #[db_rename = "admin"]
    #[serde(rename = "admin")]
    Admin,
}

impl UserRole {
    /// Returns whether this role has administrative privileges.
    #[inline]
    pub fn is_administrator(self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Returns the hierarchical level of this role (higher number = more permissions).
    #[inline]
    pub const fn hierarchy_level(self) -> u8 {
        match self {
            UserRole::Student => 1,
            UserRole::Teacher => 2,
            UserRole::Admin => 3,
        }
    }

    /// Returns whether this role has equal or higher permissions than the other role.
    #[inline]
    pub const fn has_permission_level_of(self, other: UserRole) -> bool {
        self.hierarchy_level() >= other.hierarchy_level()
    }
}

impl PartialOrd for UserRole {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserRole {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.hierarchy_level().cmp(&other.hierarchy_level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_hierarchy() {
        assert!(UserRole::Admin > UserRole::Teacher);
        assert!(UserRole::Teacher > UserRole::Student);
        assert!(UserRole::Admin.has_permission_level_of(UserRole::Student));
        assert!(!UserRole::Student.has_permission_level_of(UserRole::Teacher));
    }

    #[test]
    fn role_serde_names() {
        assert_eq!(
            serde_json::to_string(&UserRole::Student).unwrap(),
            "\"student\""
        );
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}

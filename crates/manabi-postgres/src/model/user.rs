//! User profile model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::users;
use crate::types::UserRole;

/// User profile model representing an application user.
///
/// The primary key is not generated by the database: it mirrors the subject
/// identifier of the authentication provider, so a profile row is created
/// lazily on first sign-in.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user identifier (matches the auth subject).
    pub id: Uuid,
    /// Human-readable display name (1-16 characters).
    pub display_name: String,
    /// Role controlling what the user can access.
    pub user_role: UserRole,
    /// Storage key of the avatar image, if one was uploaded.
    pub avatar_key: Option<String>,
    /// Timestamp when the user was created.
    pub created_at: Timestamp,
    /// Timestamp when the user was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new user profile.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUser {
    /// Unique user identifier (matches the auth subject).
    pub id: Uuid,
    /// Display name.
    pub display_name: String,
    /// Role (defaults to student when omitted).
    pub user_role: Option<UserRole>,
    /// Avatar storage key.
    pub avatar_key: Option<String>,
}

/// Data for updating a user profile.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateUser {
    /// Display name.
    pub display_name: Option<String>,
    /// Role.
    pub user_role: Option<UserRole>,
    /// Avatar storage key (double option to allow clearing).
    pub avatar_key: Option<Option<String>>,
}

impl User {
    /// Returns whether the user has an avatar.
    pub fn has_avatar(&self) -> bool {
        self.avatar_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Returns whether the user has administrative privileges.
    pub fn is_administrator(&self) -> bool {
        self.user_role.is_administrator()
    }
}

impl NewUser {
    /// Creates a new user with the given id and display name.
    pub fn new(id: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            user_role: None,
            avatar_key: None,
        }
    }

    /// Sets the role of the new user.
    pub fn with_role(mut self, user_role: UserRole) -> Self {
        self.user_role = Some(user_role);
        self
    }
}

impl UpdateUser {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets or clears the avatar storage key.
    pub fn with_avatar_key(mut self, avatar_key: Option<String>) -> Self {
        self.avatar_key = Some(avatar_key);
        self
    }

    /// Returns whether this update contains no changes.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.user_role.is_none() && self.avatar_key.is_none()
    }
}

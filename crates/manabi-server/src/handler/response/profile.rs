//! Profile response types.

use jiff::Timestamp;
use manabi_postgres::model::User;
use manabi_postgres::types::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response returned when retrieving or updating the current profile.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique identifier of the user.
    pub id: Uuid,
    /// Display name of the user.
    pub display_name: String,
    /// Role of the user.
    pub user_role: UserRole,
    /// Storage key of the avatar image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_key: Option<String>,
    /// Timestamp when the profile was created.
    pub created_at: Timestamp,
    /// Timestamp when the profile was last updated.
    pub updated_at: Timestamp,
}

impl Profile {
    /// Creates a new instance of [`Profile`] from the database model.
    pub fn from_model(user: User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
            user_role: user.user_role,
            avatar_key: user.avatar_key,
            created_at: user.created_at.into(),
            updated_at: user.updated_at.into(),
        }
    }
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Self::from_model(user)
    }
}

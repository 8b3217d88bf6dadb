//! Profile request types.

use manabi_postgres::model::{NewUser, UpdateUser};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request payload to register the current user's profile.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfile {
    /// Display name (1-16 characters).
    #[validate(length(min = 1, max = 16))]
    pub display_name: String,

    /// Storage key of the avatar image.
    #[validate(length(max = 255))]
    pub avatar_key: Option<String>,
}

impl CreateProfile {
    /// Converts the request into an insertable model for the given user.
    pub fn into_model(self, user_id: Uuid) -> NewUser {
        NewUser {
            id: user_id,
            display_name: self.display_name,
            user_role: None,
            avatar_key: self.avatar_key,
        }
    }
}

/// Request payload to update the current user's profile.
///
/// Omitted fields are left unchanged.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    /// New display name (1-16 characters).
    #[validate(length(min = 1, max = 16))]
    pub display_name: Option<String>,

    /// New storage key of the avatar image.
    #[validate(length(max = 255))]
    pub avatar_key: Option<String>,
}

impl UpdateProfile {
    /// Converts the request into a changeset model.
    pub fn into_model(self) -> UpdateUser {
        UpdateUser {
            display_name: self.display_name,
            user_role: None,
            avatar_key: self.avatar_key.map(Some),
        }
    }

    /// Returns whether the request contains no changes.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.avatar_key.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_length_is_validated() {
        let request = CreateProfile {
            display_name: "a".repeat(17),
            avatar_key: None,
        };
        assert!(request.validate().is_err());

        let request = CreateProfile {
            display_name: "Hana".into(),
            avatar_key: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_update_is_detected() {
        let request = UpdateProfile {
            display_name: None,
            avatar_key: None,
        };
        assert!(request.is_empty());
    }
}

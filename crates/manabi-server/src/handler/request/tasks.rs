//! Task request types.

use manabi_postgres::model::{NewTask, UpdateTask};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request payload to create a new task.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    /// Task title (1-64 characters).
    #[validate(length(min = 1, max = 64))]
    pub title: String,

    /// Detailed description of the task (up to 2000 characters).
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl CreateTask {
    /// Converts the request into an insertable model for the given user.
    pub fn into_model(self, user_id: Uuid) -> NewTask {
        NewTask {
            user_id,
            title: self.title,
            description: self.description,
        }
    }
}

/// Request payload to update a task.
///
/// Omitted fields are left unchanged.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// New task title (1-64 characters).
    #[validate(length(min = 1, max = 64))]
    pub title: Option<String>,

    /// New description of the task (up to 2000 characters).
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl UpdateTaskRequest {
    /// Converts the request into a changeset model.
    pub fn into_model(self) -> UpdateTask {
        UpdateTask {
            title: self.title,
            description: self.description.map(Some),
        }
    }

    /// Returns whether the request contains no changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_length_is_validated() {
        let request = CreateTask {
            title: "a".repeat(65),
            description: None,
        };
        assert!(request.validate().is_err());

        let request = CreateTask {
            title: "Read the async book".into(),
            description: Some("Chapters 1 through 4".into()),
        };
        assert!(request.validate().is_ok());
    }
}

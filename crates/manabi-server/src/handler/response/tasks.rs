//! Task response types.

use jiff::Timestamp;
use manabi_postgres::model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task as returned by the API.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier of the task.
    pub id: Uuid,
    /// Owner of the task.
    pub user_id: Uuid,
    /// Short task title.
    pub title: String,
    /// Detailed description of the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Timestamp when the task was created.
    pub created_at: Timestamp,
    /// Timestamp when the task was last updated.
    pub updated_at: Timestamp,
}

impl Task {
    /// Creates a new instance of [`Task`] from the database model.
    pub fn from_model(task: model::Task) -> Self {
        Self {
            id: task.id,
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            created_at: task.created_at.into(),
            updated_at: task.updated_at.into(),
        }
    }
}

impl From<model::Task> for Task {
    fn from(task: model::Task) -> Self {
        Self::from_model(task)
    }
}

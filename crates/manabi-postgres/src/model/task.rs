//! Task model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::tasks;

/// Task model representing a unit of planned study work.
///
/// Learning logs can optionally reference a task to group log entries by the
/// work they belong to.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// User that owns the task.
    pub user_id: Uuid,
    /// Short task title (1-64 characters).
    pub title: String,
    /// Detailed description of the task.
    pub description: Option<String>,
    /// Timestamp when the task was created.
    pub created_at: Timestamp,
    /// Timestamp when the task was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new task.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewTask {
    /// Owning user.
    pub user_id: Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: Option<String>,
}

/// Data for updating a task.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateTask {
    /// Task title.
    pub title: Option<String>,
    /// Task description (double option to allow clearing).
    pub description: Option<Option<String>>,
}

impl Task {
    /// Returns whether the task has a non-empty description.
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|desc| !desc.is_empty())
    }
}

impl NewTask {
    /// Creates a new task for the given user.
    pub fn new(user_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            description: None,
        }
    }

    /// Sets the description of the new task.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl UpdateTask {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether this update contains no changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

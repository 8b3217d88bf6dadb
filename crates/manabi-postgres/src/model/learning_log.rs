//! Learning log model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::learning_logs;

/// Learning log model representing a single study session record.
///
/// `started_at` is optional: a user can record what they studied without
/// recording when, and such entries still participate in listing (they sort
/// ahead of dated entries). `created_at` is an internal tie-breaker and is
/// never exposed through the HTTP layer.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = learning_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LearningLog {
    /// Unique log identifier.
    pub id: Uuid,
    /// User that owns the log entry.
    pub user_id: Uuid,
    /// Task this entry belongs to, if any.
    pub task_id: Option<Uuid>,
    /// Short title of what was studied (1-64 characters).
    pub title: String,
    /// What was done during the session.
    pub description: String,
    /// What was learned or should be improved.
    pub reflections: String,
    /// Minutes spent on the session (0-6000).
    pub spent_minutes: i32,
    /// When the session started, if recorded.
    pub started_at: Option<Timestamp>,
    /// When the session ended, if recorded.
    pub ended_at: Option<Timestamp>,
    /// Timestamp when the log entry was created.
    pub created_at: Timestamp,
}

/// Data for creating a new learning log entry.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = learning_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewLearningLog {
    /// Owning user.
    pub user_id: Uuid,
    /// Optional task reference.
    pub task_id: Option<Uuid>,
    /// Log title.
    pub title: String,
    /// Session description.
    pub description: String,
    /// Session reflections.
    pub reflections: String,
    /// Minutes spent.
    pub spent_minutes: i32,
    /// Session start time.
    pub started_at: Option<Timestamp>,
    /// Session end time.
    pub ended_at: Option<Timestamp>,
}

/// Data for updating a learning log entry.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = learning_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateLearningLog {
    /// Task reference (double option to allow clearing).
    pub task_id: Option<Option<Uuid>>,
    /// Log title.
    pub title: Option<String>,
    /// Session description.
    pub description: Option<String>,
    /// Session reflections.
    pub reflections: Option<String>,
    /// Minutes spent.
    pub spent_minutes: Option<i32>,
    /// Session start time (double option to allow clearing).
    pub started_at: Option<Option<Timestamp>>,
    /// Session end time (double option to allow clearing).
    pub ended_at: Option<Option<Timestamp>>,
}

impl LearningLog {
    /// Returns whether the log entry records when the session started.
    pub fn has_start_time(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns whether the log entry belongs to a task.
    pub fn has_task(&self) -> bool {
        self.task_id.is_some()
    }

    /// Returns whether the given user owns this log entry.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

impl NewLearningLog {
    /// Creates a new log entry for the given user.
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        reflections: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            task_id: None,
            title: title.into(),
            description: description.into(),
            reflections: reflections.into(),
            spent_minutes: 0,
            started_at: None,
            ended_at: None,
        }
    }

    /// Sets the task this entry belongs to.
    pub fn with_task_id(mut self, task_id: Uuid) -> Self {
        self.task_id = Some(task_id);
        self
    }

    /// Sets the minutes spent on the session.
    pub fn with_spent_minutes(mut self, spent_minutes: i32) -> Self {
        self.spent_minutes = spent_minutes;
        self
    }

    /// Sets the session start time.
    pub fn with_started_at(mut self, started_at: Timestamp) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Sets the session end time.
    pub fn with_ended_at(mut self, ended_at: Timestamp) -> Self {
        self.ended_at = Some(ended_at);
        self
    }
}

impl UpdateLearningLog {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether this update contains no changes.
    pub fn is_empty(&self) -> bool {
        self.task_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.reflections.is_none()
            && self.spent_minutes.is_none()
            && self.started_at.is_none()
            && self.ended_at.is_none()
    }
}

//! Database models for all tables.
//!
//! Each model module provides the `Queryable` row struct plus the `Insertable`
//! and `AsChangeset` companions used by the repository traits in [`crate::query`].

mod learning_log;
mod task;
mod user;

pub use learning_log::{LearningLog, NewLearningLog, UpdateLearningLog};
pub use task::{NewTask, Task, UpdateTask};
pub use user::{NewUser, UpdateUser, User};

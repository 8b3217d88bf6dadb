//! Database query repositories for all entities in the system.
//!
//! This module contains repository traits implemented for [`PgConnection`]
//! that provide high-level database operations for all entities,
//! encapsulating common patterns and providing type-safe interfaces.
//!
//! # Pagination
//!
//! All queries that may return large result sets use the
//! [`OffsetPagination`] struct to provide consistent, bounded pagination
//! across the system.
//!
//! [`PgConnection`]: crate::PgConnection
//! [`OffsetPagination`]: crate::types::OffsetPagination

pub mod learning_log;
pub mod task;
pub mod user;

pub use learning_log::{LearningLogBatchQuery, LearningLogRepository};
pub use task::TaskRepository;
pub use user::UserRepository;

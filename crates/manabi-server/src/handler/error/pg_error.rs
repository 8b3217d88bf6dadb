//! Constraint violation to HTTP error conversion handlers.
//!
//! This module converts PostgreSQL errors and constraint violations into
//! appropriate HTTP error responses. All conversions are implemented via the
//! `From` trait for ergonomic usage with `?`.

use manabi_postgres::PgError;
use manabi_postgres::types::{
    ConstraintViolation, LearningLogConstraints, TaskConstraints, UserConstraints,
};

use crate::handler::{Error, ErrorKind};

/// Tracing target for database error conversion.
const TRACING_TARGET: &str = "manabi_server::postgres_errors";

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        match constraint {
            ConstraintViolation::User(c) => c.into(),
            ConstraintViolation::Task(c) => c.into(),
            ConstraintViolation::LearningLog(c) => c.into(),
        }
    }
}

impl From<UserConstraints> for Error<'static> {
    fn from(constraint: UserConstraints) -> Self {
        let error = match constraint {
            UserConstraints::DisplayNameLength => ErrorKind::BadRequest
                .with_message("Display name must be between 1 and 16 characters"),
            UserConstraints::IdUnique => {
                ErrorKind::Conflict.with_message("A profile for this user already exists")
            }
        };

        error.with_resource("user").into_static()
    }
}

impl From<TaskConstraints> for Error<'static> {
    fn from(constraint: TaskConstraints) -> Self {
        let error = match constraint {
            TaskConstraints::TitleLength => {
                ErrorKind::BadRequest.with_message("Title must be between 1 and 64 characters")
            }
            TaskConstraints::DescriptionLength => {
                ErrorKind::BadRequest.with_message("Description must be at most 2000 characters")
            }
            TaskConstraints::UserIdFkey => {
                ErrorKind::BadRequest.with_message("Referenced user does not exist")
            }
            TaskConstraints::IdUnique => {
                ErrorKind::Conflict.with_message("A task with this id already exists")
            }
        };

        error.with_resource("task").into_static()
    }
}

impl From<LearningLogConstraints> for Error<'static> {
    fn from(constraint: LearningLogConstraints) -> Self {
        let error = match constraint {
            LearningLogConstraints::TitleLength => {
                ErrorKind::BadRequest.with_message("Title must be between 1 and 64 characters")
            }
            LearningLogConstraints::DescriptionLength => ErrorKind::BadRequest
                .with_message("Description must be between 1 and 2000 characters"),
            LearningLogConstraints::ReflectionsLength => ErrorKind::BadRequest
                .with_message("Reflections must be between 1 and 2000 characters"),
            LearningLogConstraints::SpentMinutesRange => ErrorKind::BadRequest
                .with_message("Spent minutes must be between 0 and 6000"),
            LearningLogConstraints::UserIdFkey => {
                ErrorKind::BadRequest.with_message("Referenced user does not exist")
            }
            LearningLogConstraints::TaskIdFkey => {
                ErrorKind::BadRequest.with_message("Referenced task does not exist")
            }
            LearningLogConstraints::IdUnique => {
                ErrorKind::Conflict.with_message("A learning log with this id already exists")
            }
        };

        error.with_resource("learning_log").into_static()
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(ref query_error) => {
                // Try to extract a known constraint violation first
                if let Some(constraint) = error.constraint_violation() {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        constraint = %constraint,
                        error = %query_error,
                        "query error (constraint violation)"
                    );
                    return constraint.into();
                }

                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_maps_to_bad_request() {
        let error: Error<'static> = LearningLogConstraints::SpentMinutesRange.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.resource(), Some("learning_log"));
    }

    #[test]
    fn unique_constraint_maps_to_conflict() {
        let error: Error<'static> = UserConstraints::IdUnique.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn unified_violation_dispatch() {
        let violation = ConstraintViolation::Task(TaskConstraints::TitleLength);
        let error: Error<'static> = violation.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.resource(), Some("task"));
    }
}

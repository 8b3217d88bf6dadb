//! Error handling for the data layer.

use std::borrow::Cow;

use deadpool::managed::TimeoutType;
use diesel::result::{ConnectionError, Error as QueryError};
use diesel_async::pooled_connection::PoolError;
use diesel_async::pooled_connection::deadpool::PoolError as PooledError;

use crate::types::ConstraintViolation;

/// Boxed error trait object used for error sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used by every database operation in this crate.
pub type PgResult<T, E = PgError> = Result<T, E>;

/// Failure modes of the data layer.
#[derive(Debug, thiserror::Error)]
#[must_use = "database errors should be handled appropriately"]
pub enum PgError {
    /// Invalid pool or connection settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The pool gave up while creating, acquiring or recycling a connection.
    #[error("Database operation timed out")]
    Timeout(TimeoutType),

    /// The connection could not be established or went away.
    #[error("Database connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Applying embedded migrations failed.
    #[error("Database migration error: {0}")]
    Migration(BoxError),

    /// A statement failed to execute. Constraint violations land here and can
    /// be recovered through [`PgError::constraint_violation`].
    #[error("Database query error: {0}")]
    Query(#[from] QueryError),

    /// Anything the other variants do not cover.
    #[error("Unexpected error: {0}")]
    Unexpected(Cow<'static, str>),
}

impl PgError {
    /// Name of the violated constraint, when this error carries one.
    pub fn constraint(&self) -> Option<&str> {
        match self {
            PgError::Query(QueryError::DatabaseError(_, info)) => info.constraint_name(),
            _ => None,
        }
    }

    /// Parses the violated constraint into a typed [`ConstraintViolation`].
    ///
    /// Returns `None` for errors that are not constraint violations and for
    /// constraint names this crate does not recognize.
    pub fn constraint_violation(&self) -> Option<ConstraintViolation> {
        self.constraint().and_then(ConstraintViolation::new)
    }
}

impl From<PooledError> for PgError {
    fn from(error: PooledError) -> Self {
        match error {
            PooledError::Timeout(timeout) => Self::Timeout(timeout),
            PooledError::Backend(PoolError::QueryError(e)) => Self::Query(e),
            PooledError::Backend(PoolError::ConnectionError(e)) => Self::Connection(e),
            PooledError::Closed => Self::Connection(ConnectionError::InvalidConnectionUrl(
                "Connection pool is closed".into(),
            )),
            // Post-create hooks and a missing runtime are both set up in
            // PgClient::new, so neither should surface here.
            other => Self::Unexpected(other.to_string().into()),
        }
    }
}

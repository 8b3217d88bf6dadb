//! Startup and service-level errors, distinct from per-request handler
//! errors.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Boxed error used for source chaining.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Result alias for service-level operations.
pub type ServiceResult<T, E = ServiceError> = std::result::Result<T, E>;

/// What part of the service failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    /// Invalid or missing configuration.
    Config,
    /// A dependency outside this process misbehaved.
    External,
    /// Credential material could not be set up.
    Auth,
    /// A failure inside the service itself.
    Internal,
}

impl ServiceErrorKind {
    /// Stable string form, used as the Display output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::External => "external_service",
            Self::Auth => "auth",
            Self::Internal => "internal_service",
        }
    }

    /// Builds a [`ServiceError`] of this kind.
    #[inline]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> ServiceError {
        ServiceError::new(self, message)
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized failure with a message and an optional cause.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct ServiceError {
    kind: ServiceErrorKind,
    message: Cow<'static, str>,
    #[source]
    source: Option<BoxedError>,
}

impl ServiceError {
    #[inline]
    fn new(kind: ServiceErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Records the underlying error for the source chain.
    #[inline]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The failure category.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ServiceErrorKind {
        self.kind
    }

    /// The human-readable message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<manabi_postgres::PgError> for ServiceError {
    fn from(error: manabi_postgres::PgError) -> Self {
        ServiceErrorKind::External
            .with_message("database operation failed")
            .with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_display() {
        assert_eq!(ServiceErrorKind::Config.to_string(), "config");
        assert_eq!(ServiceErrorKind::Auth.to_string(), "auth");
    }

    #[test]
    fn error_builder() {
        let error = ServiceErrorKind::Config.with_message("missing database URL");
        assert_eq!(error.kind(), ServiceErrorKind::Config);
        assert_eq!(error.message(), "missing database URL");
    }

    #[test]
    fn error_source_chain() {
        let io_error = std::io::Error::other("boom");
        let error = ServiceErrorKind::Internal
            .with_message("startup failed")
            .with_source(io_error);

        assert!(StdError::source(&error).is_some());
    }
}

//! Handler error type with a builder for per-request detail.

use std::borrow::Cow;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::handler::response::ErrorResponse;

/// A specialized [`Result`] for HTTP handlers.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = Error<'static>> = std::result::Result<T, E>;

/// The failure categories a handler can report.
///
/// Each variant maps to one canned [`ErrorResponse`] with its status code.
/// A bare kind is already an error response; the `with_*` builders attach
/// request-specific detail when the canned message is not enough.
#[must_use = "error kinds do nothing unless used to create errors"]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400, request data failed validation.
    BadRequest,
    /// 401, no Bearer token was supplied.
    MissingAuthToken,
    /// 401, the Bearer token could not be parsed.
    MalformedAuthToken,
    /// 401, the credentials are invalid or expired.
    Unauthorized,
    /// 403, the caller does not own the resource.
    Forbidden,
    /// 404, the resource does not exist.
    NotFound,
    /// 409, the request conflicts with existing state.
    Conflict,
    /// 500, something failed on our side.
    #[default]
    InternalServerError,
}

impl ErrorKind {
    /// Wraps this kind in an [`Error`] without extra detail.
    #[inline]
    pub fn into_error(self) -> Error<'static> {
        Error::new(self)
    }

    /// Shorthand for `into_error().with_context(..)`.
    #[inline]
    pub fn with_context<'a>(self, context: impl Into<Cow<'a, str>>) -> Error<'a> {
        Error::new(self).with_context(context)
    }

    /// Shorthand for `into_error().with_message(..)`.
    #[inline]
    pub fn with_message<'a>(self, message: impl Into<Cow<'a, str>>) -> Error<'a> {
        Error::new(self).with_message(message)
    }

    /// Shorthand for `into_error().with_resource(..)`.
    #[inline]
    pub fn with_resource<'a>(self, resource: impl Into<Cow<'a, str>>) -> Error<'a> {
        Error::new(self).with_resource(resource)
    }

    /// The HTTP status code this kind responds with.
    #[inline]
    pub fn status_code(self) -> StatusCode {
        self.response().status
    }

    /// The canned response body for this kind.
    pub fn response(self) -> ErrorResponse<'static> {
        match self {
            Self::BadRequest => ErrorResponse::BAD_REQUEST,
            Self::MissingAuthToken => ErrorResponse::MISSING_AUTH_TOKEN,
            Self::MalformedAuthToken => ErrorResponse::MALFORMED_AUTH_TOKEN,
            Self::Unauthorized => ErrorResponse::UNAUTHORIZED,
            Self::Forbidden => ErrorResponse::FORBIDDEN,
            Self::NotFound => ErrorResponse::NOT_FOUND,
            Self::Conflict => ErrorResponse::CONFLICT,
            Self::InternalServerError => ErrorResponse::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.response().name.as_ref())
    }
}

impl IntoResponse for ErrorKind {
    #[inline]
    fn into_response(self) -> Response {
        self.response().into_response()
    }
}

/// An [`ErrorKind`] plus optional request-specific detail.
///
/// The lifetime lets handlers borrow detail strings; [`Error::into_static`]
/// takes ownership when the error has to outlive the request data.
#[derive(Debug, Clone)]
#[must_use = "errors do nothing unless serialized"]
pub struct Error<'a> {
    kind: ErrorKind,
    message: Option<Cow<'a, str>>,
    resource: Option<Cow<'a, str>>,
    context: Option<Cow<'a, str>>,
}

impl Error<'static> {
    /// Creates an error of the given kind with no detail attached.
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            resource: None,
            context: None,
        }
    }
}

impl<'a> Error<'a> {
    /// Replaces the canned message with a request-specific one.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Names the resource the error relates to.
    #[inline]
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Attaches debugging context included in the response body.
    #[inline]
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The custom message, if one was set.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The resource name, if one was set.
    #[inline]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// The context, if any was attached.
    #[inline]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Detaches the error from borrowed request data by cloning it.
    pub fn into_static(self) -> Error<'static> {
        Error {
            kind: self.kind,
            message: self.message.map(|m| Cow::Owned(m.into_owned())),
            resource: self.resource.map(|r| Cow::Owned(r.into_owned())),
            context: self.context.map(|c| Cow::Owned(c.into_owned())),
        }
    }
}

impl Default for Error<'static> {
    #[inline]
    fn default() -> Self {
        Self::new(ErrorKind::default())
    }
}

impl From<ErrorKind> for Error<'static> {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.kind.response();
        let message = self.message.as_deref().unwrap_or(response.message.as_ref());
        write!(f, "{} ({}): {}", response.name, response.status, message)?;

        if let Some(ref resource) = self.resource {
            write!(f, " [resource: {resource}]")?;
        }

        if let Some(ref context) = self.context {
            write!(f, " - {context}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error<'_> {}

impl IntoResponse for Error<'_> {
    fn into_response(self) -> Response {
        let mut response = self.kind.response();

        if let Some(message) = self.message {
            response = response.with_message(message);
        }

        if let Some(resource) = self.resource {
            response = response.with_resource(resource);
        }

        if let Some(context) = self.context {
            response = response.with_context(context);
        }

        response.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_internal_server_error() {
        let error = Error::default();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        let _ = error.into_response();
    }

    #[test]
    fn builder_accumulates_detail() {
        let error = ErrorKind::NotFound
            .with_message("Learning log not found")
            .with_resource("learning_log")
            .with_context("ID: 123");

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.message(), Some("Learning log not found"));
        assert_eq!(error.resource(), Some("learning_log"));
        assert_eq!(error.context(), Some("ID: 123"));
    }

    #[test]
    fn display_includes_all_parts() {
        let rendered = ErrorKind::NotFound
            .with_message("Resource not found")
            .with_resource("learning_log")
            .with_context("ID: 123")
            .to_string();

        assert!(rendered.contains("not_found"));
        assert!(rendered.contains("404"));
        assert!(rendered.contains("Resource not found"));
        assert!(rendered.contains("learning_log"));
        assert!(rendered.contains("ID: 123"));
    }

    #[test]
    fn into_static_keeps_detail() {
        let error = ErrorKind::Forbidden
            .with_message("Access denied".to_string())
            .with_resource("task".to_string())
            .into_static();

        assert_eq!(error.message(), Some("Access denied"));
        assert_eq!(error.resource(), Some("task"));
    }

    #[test]
    fn kinds_map_to_expected_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorKind::MissingAuthToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorKind::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorKind::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorKind::InternalServerError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

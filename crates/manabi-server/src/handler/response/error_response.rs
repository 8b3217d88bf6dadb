//! JSON body returned for every failed request.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Serializable error body paired with its HTTP status.
///
/// The canned constants cover every failure the API reports; `message` is
/// always safe to show the caller, while `context` carries extra detail a
/// handler chose to expose. The status code travels alongside the body but
/// is never part of the JSON.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse<'a> {
    /// Machine-readable error name.
    pub name: Cow<'a, str>,
    /// Human-readable description.
    pub message: Cow<'a, str>,
    /// Resource the error relates to, when a handler names one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'a, str>>,
    /// Additional detail attached by the handler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Cow<'a, str>>,
    #[serde(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    pub const CONFLICT: Self = Self::new(
        "conflict",
        "The request conflicts with the current state of the resource",
        StatusCode::CONFLICT,
    );
    pub const FORBIDDEN: Self = Self::new(
        "forbidden",
        "You don't have permission to access this resource",
        StatusCode::FORBIDDEN,
    );
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const MALFORMED_AUTH_TOKEN: Self = Self::new(
        "malformed_auth_token",
        "The authentication token format is invalid",
        StatusCode::UNAUTHORIZED,
    );
    pub const MISSING_AUTH_TOKEN: Self = Self::new(
        "missing_auth_token",
        "Authentication is required to access this resource",
        StatusCode::UNAUTHORIZED,
    );
    pub const NOT_FOUND: Self = Self::new(
        "not_found",
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    pub const UNAUTHORIZED: Self = Self::new(
        "unauthorized",
        "Invalid or expired authentication credentials",
        StatusCode::UNAUTHORIZED,
    );

    /// Creates a response with the given name, message and status.
    #[inline]
    pub const fn new(name: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            resource: None,
            context: None,
            status,
        }
    }

    /// Sets the resource the error relates to.
    #[inline]
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Overrides the canned message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches handler-supplied detail.
    #[inline]
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_replace_fields() {
        let response = ErrorResponse::NOT_FOUND
            .with_resource("task")
            .with_resource("learning_log")
            .with_message("Log not found");

        assert_eq!(response.resource.as_deref(), Some("learning_log"));
        assert_eq!(response.message.as_ref(), "Log not found");
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn status_stays_out_of_the_body() {
        let response = ErrorResponse::BAD_REQUEST
            .with_resource("test_resource")
            .with_message("Test message")
            .with_context("Test context");

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"name\":\"bad_request\""));
        assert!(json.contains("Test message"));
        assert!(json.contains("test_resource"));
        assert!(json.contains("Test context"));
        assert!(!json.contains("400"));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let json = serde_json::to_string(&ErrorResponse::NOT_FOUND).unwrap();
        assert!(!json.contains("resource"));
        assert!(!json.contains("context"));
    }
}

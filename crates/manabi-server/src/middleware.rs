//! Middleware for `axum::`[`Router`] and HTTP request processing.
//!
//! [`Router`]: axum::Router

use std::time::Duration;

use axum::Router;
use axum::http::header;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Header used to correlate requests across log records.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extension trait for `axum::`[`Router`] to apply the standard middleware
/// stack.
pub trait RouterExt<S> {
    /// Layers request tracing middleware.
    ///
    /// Generates unique request IDs, propagates them to responses, adds a
    /// structured logging span per request and redacts sensitive headers
    /// from log output.
    fn with_observability(self) -> Self;

    /// Layers a request timeout returning `408 Request Timeout` when
    /// exceeded.
    fn with_timeout(self, timeout: Duration) -> Self;

    /// Layers a permissive CORS policy.
    fn with_cors(self) -> Self;
}

impl<S> RouterExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_observability(self) -> Self {
        self.layer(PropagateRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ))
        .layer(SetSensitiveRequestHeadersLayer::new([header::AUTHORIZATION]))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
    }

    fn with_timeout(self, timeout: Duration) -> Self {
        self.layer(TimeoutLayer::new(timeout))
    }

    fn with_cors(self) -> Self {
        self.layer(CorsLayer::permissive())
    }
}

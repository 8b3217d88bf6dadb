//! Service health handlers.

use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use manabi_postgres::PgClient;
use serde::Serialize;

use crate::handler::Result;
use crate::service::ServiceState;

/// Health report for the service and its database pool.
#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    pool_size: usize,
    pool_available: usize,
}

/// Reports service health together with connection pool statistics.
async fn health(State(pg_client): State<PgClient>) -> Result<impl IntoResponse> {
    let pool_status = pg_client.pool_status();

    let report = HealthReport {
        status: if pool_status.is_under_pressure() {
            "degraded"
        } else {
            "ok"
        },
        pool_size: pool_status.size,
        pool_available: pool_status.available,
    };

    Ok(axum::Json(report))
}

/// Returns a [`Router`] with all monitor routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health))
}

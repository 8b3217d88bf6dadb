//! Learning log handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use manabi_postgres::PgClient;
use manabi_postgres::query::{LearningLogBatchQuery, LearningLogRepository, TaskRepository};
use uuid::Uuid;

use crate::extract::{AuthState, ValidateJson};
use crate::handler::request::{CreateLearningLog, LogSearchParams, UpdateLearningLogRequest};
use crate::handler::response::{LearningLog, LearningLogBatch};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for learning log handlers.
const TRACING_TARGET: &str = "manabi_server::handler::learning_logs";

/// Verifies that the given user owns the log entry.
///
/// Looks up only the owner column: a missing row is reported as not found,
/// a foreign owner as forbidden.
async fn authorize_log_owner(
    pg_client: &PgClient,
    log_id: Uuid,
    user_id: Uuid,
) -> Result<()> {
    let mut conn = pg_client.get_connection().await?;
    let owner_id = conn
        .find_log_owner(log_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("learning_log"))?;

    if owner_id != user_id {
        return Err(ErrorKind::Forbidden
            .with_message("You can only access your own learning logs")
            .with_resource("learning_log"));
    }

    Ok(())
}

/// Verifies that a referenced task exists and belongs to the given user.
async fn authorize_task_reference(
    pg_client: &PgClient,
    task_id: Uuid,
    user_id: Uuid,
) -> Result<()> {
    let mut conn = pg_client.get_connection().await?;
    let owner_id = conn
        .find_task_owner(task_id)
        .await?
        .ok_or_else(|| {
            ErrorKind::BadRequest
                .with_message("Referenced task does not exist")
                .with_resource("task")
        })?;

    if owner_id != user_id {
        return Err(ErrorKind::Forbidden
            .with_message("You can only reference your own tasks")
            .with_resource("task"));
    }

    Ok(())
}

/// Creates a new learning log entry owned by the authenticated user.
async fn create_log(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<CreateLearningLog>,
) -> Result<impl IntoResponse> {
    if let Some(task_id) = request.task_id {
        authorize_task_reference(&pg_client, task_id, auth_state.user_id).await?;
    }

    let mut conn = pg_client.get_connection().await?;
    let log = conn.create_log(request.into_model(auth_state.user_id)).await?;

    tracing::info!(
        target: TRACING_TARGET,
        log_id = %log.id,
        user_id = %log.user_id,
        "Created learning log"
    );

    Ok((StatusCode::CREATED, Json(LearningLog::from(log))))
}

/// Lists the authenticated user's learning logs, paginated.
///
/// Entries without a start time always come first regardless of the
/// requested direction; ties are broken by creation time and id. The page
/// and the total count are fetched concurrently.
async fn list_logs(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    Query(search): Query<LogSearchParams>,
) -> Result<impl IntoResponse> {
    let order = search.order();
    let pagination = search.pagination();

    let page = pg_client
        .find_log_batch(auth_state.user_id, order, pagination)
        .await?;

    Ok(Json(LearningLogBatch::new(page, pagination, order)))
}

/// Returns a single learning log owned by the authenticated user.
async fn get_log(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    Path(log_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let mut conn = pg_client.get_connection().await?;
    let log = conn
        .find_log_by_id(log_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("learning_log"))?;

    if !log.is_owned_by(auth_state.user_id) {
        return Err(ErrorKind::Forbidden
            .with_message("You can only access your own learning logs")
            .with_resource("learning_log"));
    }

    Ok(Json(LearningLog::from(log)))
}

/// Applies partial changes to a learning log.
async fn update_log(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    Path(log_id): Path<Uuid>,
    ValidateJson(request): ValidateJson<UpdateLearningLogRequest>,
) -> Result<impl IntoResponse> {
    authorize_log_owner(&pg_client, log_id, auth_state.user_id).await?;

    if request.is_empty() {
        return Err(ErrorKind::BadRequest
            .with_message("Request contains no changes")
            .with_resource("learning_log"));
    }

    if let Some(task_id) = request.task_id {
        authorize_task_reference(&pg_client, task_id, auth_state.user_id).await?;
    }

    let mut conn = pg_client.get_connection().await?;
    let log = conn.update_log(log_id, request.into_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        log_id = %log.id,
        user_id = %log.user_id,
        "Updated learning log"
    );

    Ok(Json(LearningLog::from(log)))
}

/// Permanently deletes a learning log.
async fn delete_log(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    Path(log_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    authorize_log_owner(&pg_client, log_id, auth_state.user_id).await?;

    let mut conn = pg_client.get_connection().await?;
    conn.delete_log(log_id).await?;

    tracing::info!(
        target: TRACING_TARGET,
        log_id = %log_id,
        user_id = %auth_state.user_id,
        "Deleted learning log"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all learning log routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/learning-logs", get(list_logs).post(create_log))
        .route(
            "/learning-logs/{log_id}",
            get(get_log).patch(update_log).delete(delete_log),
        )
}

//! Task handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use manabi_postgres::PgClient;
use manabi_postgres::query::TaskRepository;
use manabi_postgres::types::OffsetPagination;
use uuid::Uuid;

use crate::extract::{AuthState, ValidateJson};
use crate::handler::request::{CreateTask, UpdateTaskRequest};
use crate::handler::response::Task;
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for task handlers.
const TRACING_TARGET: &str = "manabi_server::handler::tasks";

/// Upper bound on the number of tasks returned by the listing.
const MAX_LISTED_TASKS: i64 = 100;

/// Verifies that the given user owns the task.
async fn authorize_task_owner(pg_client: &PgClient, task_id: Uuid, user_id: Uuid) -> Result<()> {
    let mut conn = pg_client.get_connection().await?;
    let owner_id = conn
        .find_task_owner(task_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("task"))?;

    if owner_id != user_id {
        return Err(ErrorKind::Forbidden
            .with_message("You can only access your own tasks")
            .with_resource("task"));
    }

    Ok(())
}

/// Creates a new task owned by the authenticated user.
async fn create_task(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<CreateTask>,
) -> Result<impl IntoResponse> {
    let mut conn = pg_client.get_connection().await?;
    let task = conn.create_task(request.into_model(auth_state.user_id)).await?;

    tracing::info!(
        target: TRACING_TARGET,
        task_id = %task.id,
        user_id = %task.user_id,
        "Created task"
    );

    Ok((StatusCode::CREATED, Json(Task::from(task))))
}

/// Lists the authenticated user's tasks, newest first.
async fn list_tasks(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<impl IntoResponse> {
    let pagination = OffsetPagination::new(MAX_LISTED_TASKS, 0);

    let mut conn = pg_client.get_connection().await?;
    let tasks = conn.list_user_tasks(auth_state.user_id, pagination).await?;
    let tasks = tasks.into_iter().map(Task::from).collect::<Vec<_>>();

    Ok(Json(tasks))
}

/// Applies partial changes to a task.
async fn update_task(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    Path(task_id): Path<Uuid>,
    ValidateJson(request): ValidateJson<UpdateTaskRequest>,
) -> Result<impl IntoResponse> {
    authorize_task_owner(&pg_client, task_id, auth_state.user_id).await?;

    if request.is_empty() {
        return Err(ErrorKind::BadRequest
            .with_message("Request contains no changes")
            .with_resource("task"));
    }

    let mut conn = pg_client.get_connection().await?;
    let task = conn.update_task(task_id, request.into_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        task_id = %task.id,
        user_id = %task.user_id,
        "Updated task"
    );

    Ok(Json(Task::from(task)))
}

/// Permanently deletes a task.
///
/// Learning logs referencing the task keep existing with their task
/// reference cleared.
async fn delete_task(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    authorize_task_owner(&pg_client, task_id, auth_state.user_id).await?;

    let mut conn = pg_client.get_connection().await?;
    conn.delete_task(task_id).await?;

    tracing::info!(
        target: TRACING_TARGET,
        task_id = %task_id,
        user_id = %auth_state.user_id,
        "Deleted task"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a single task owned by the authenticated user.
async fn get_task(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let mut conn = pg_client.get_connection().await?;
    let task = conn
        .find_task_by_id(task_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("task"))?;

    if task.user_id != auth_state.user_id {
        return Err(ErrorKind::Forbidden
            .with_message("You can only access your own tasks")
            .with_resource("task"));
    }

    Ok(Json(Task::from(task)))
}

/// Returns a [`Router`] with all task routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{task_id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
}

//! Current user profile handlers.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use manabi_postgres::PgClient;
use manabi_postgres::query::UserRepository;

use crate::extract::{AuthHeader, AuthState, ValidateJson};
use crate::handler::request::{CreateProfile, UpdateProfile};
use crate::handler::response::Profile;
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for profile handlers.
const TRACING_TARGET: &str = "manabi_server::handler::profile";

/// Registers a profile for the authenticated subject.
///
/// Uses [`AuthHeader`] rather than [`AuthState`] because the profile row does
/// not exist yet at registration time. Registering twice for the same subject
/// results in a conflict.
async fn register_profile(
    State(pg_client): State<PgClient>,
    auth_header: AuthHeader,
    ValidateJson(request): ValidateJson<CreateProfile>,
) -> Result<impl IntoResponse> {
    let user_id = auth_header.user_id;
    let mut conn = pg_client.get_connection().await?;
    let user = conn.create_user(request.into_model(user_id)).await?;

    tracing::info!(
        target: TRACING_TARGET,
        user_id = %user.id,
        "Registered user profile"
    );

    Ok((StatusCode::CREATED, axum::Json(Profile::from(user))))
}

/// Returns the profile of the authenticated user.
async fn get_profile(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<impl IntoResponse> {
    let mut conn = pg_client.get_connection().await?;
    let user = conn
        .find_user_by_id(auth_state.user_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("user"))?;

    Ok(axum::Json(Profile::from(user)))
}

/// Applies partial changes to the profile of the authenticated user.
async fn update_profile(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<UpdateProfile>,
) -> Result<impl IntoResponse> {
    if request.is_empty() {
        return Err(ErrorKind::BadRequest
            .with_message("Request contains no changes")
            .with_resource("user"));
    }

    let mut conn = pg_client.get_connection().await?;
    let user = conn
        .update_user(auth_state.user_id, request.into_model())
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        user_id = %user.id,
        "Updated user profile"
    );

    Ok(axum::Json(Profile::from(user)))
}

/// Returns a [`Router`] with all profile routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route(
        "/me",
        get(get_profile).post(register_profile).patch(update_profile),
    )
}

//! Application state and dependency injection.

mod auth_keys;
mod config;

use manabi_postgres::PgClient;

pub use crate::service::auth_keys::AuthKeys;
pub use crate::service::config::ServiceConfig;
pub use crate::{ServiceError, ServiceResult};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,
    auth_keys: AuthKeys,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Connects to the database, applies pending migrations and loads the
    /// authentication keys.
    pub async fn from_config(config: &ServiceConfig) -> ServiceResult<Self> {
        let service_state = Self {
            pg_client: config.connect_postgres().await?,
            auth_keys: config.auth_keys()?,
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
impl_di!(auth_keys: AuthKeys);

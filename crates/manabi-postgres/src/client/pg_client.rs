use std::fmt;
use std::sync::Arc;

use deadpool::managed::Pool;
use derive_more::{Deref, DerefMut};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;

use crate::{
    ConnectionPool, PgConfig, PgError, PgResult, PooledConnection, TRACING_TARGET_CONNECTION,
};

/// Snapshot of the connection pool counters.
#[derive(Debug, Clone)]
pub struct PgPoolStatus {
    /// Upper bound on pooled connections.
    pub max_size: usize,
    /// Connections currently held by the pool, in use or idle.
    pub size: usize,
    /// Idle connections ready to be handed out.
    pub available: usize,
    /// Callers currently waiting for a connection.
    pub waiting: usize,
}

impl PgPoolStatus {
    /// Fraction of the pool currently handed out (0.0 to 1.0).
    #[inline]
    pub fn utilization(&self) -> f64 {
        if self.max_size == 0 {
            return 0.0;
        }
        (self.size - self.available) as f64 / self.max_size as f64
    }

    /// Whether callers are queued up or the pool is close to exhausted.
    #[inline]
    pub fn is_under_pressure(&self) -> bool {
        self.waiting > 0 || self.utilization() > 0.8
    }
}

/// Shared handle to the Postgres connection pool.
///
/// Cloning is cheap; every clone talks to the same pool. Handlers check out
/// connections with [`PgClient::get_connection`] and run repository methods
/// on the returned [`PgConn`].
#[derive(Clone)]
pub struct PgClient {
    inner: Arc<PgClientInner>,
}

struct PgClientInner {
    pool: ConnectionPool,
    config: PgConfig,
}

impl PgClient {
    /// Builds the connection pool for the given configuration.
    ///
    /// Connections are opened lazily, so this does not reach the database.
    ///
    /// # Errors
    ///
    /// Returns [`PgError::Config`] when the configuration is out of bounds
    /// and [`PgError::Unexpected`] when the pool cannot be assembled.
    #[tracing::instrument(
        skip(config),
        target = TRACING_TARGET_CONNECTION,
        fields(database_url = %config.database_url_masked())
    )]
    pub fn new(config: PgConfig) -> PgResult<Self> {
        config.validate()?;

        let manager = AsyncDieselConnectionManager::new(&config.postgres_url);
        let pool = Pool::builder(manager)
            .max_size(config.postgres_max_connections as usize)
            .wait_timeout(config.connection_timeout())
            .create_timeout(config.connection_timeout())
            .recycle_timeout(config.idle_timeout())
            .runtime(deadpool::Runtime::Tokio1)
            .build()
            .map_err(|e| PgError::Unexpected(format!("Failed to build connection pool: {e}").into()))?;

        tracing::info!(
            target: TRACING_TARGET_CONNECTION,
            max_connections = config.postgres_max_connections,
            "Database client initialized"
        );

        Ok(Self {
            inner: Arc::new(PgClientInner { pool, config }),
        })
    }

    /// Checks a connection out of the pool.
    ///
    /// Waits up to the configured connection timeout for one to free up.
    ///
    /// # Errors
    ///
    /// Returns [`PgError::Timeout`] when the wait elapses and a connection
    /// error when the pool cannot produce a healthy connection.
    pub async fn get_connection(&self) -> PgResult<PgConn> {
        let conn = self.inner.pool.get().await.map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET_CONNECTION,
                error = %e,
                "Failed to acquire connection from pool"
            );
            PgError::from(e)
        })?;

        Ok(PgConn::new(conn))
    }

    /// Checks out a raw pooled connection for the migration runner.
    pub(crate) async fn get_pooled_connection(&self) -> PgResult<PooledConnection> {
        let conn = self.inner.pool.get().await.map_err(PgError::from)?;
        Ok(conn)
    }

    /// Reports the current pool counters for health monitoring.
    #[inline]
    pub fn pool_status(&self) -> PgPoolStatus {
        let status = self.inner.pool.status();
        PgPoolStatus {
            max_size: status.max_size,
            size: status.size,
            available: status.available,
            waiting: status.waiting,
        }
    }
}

impl fmt::Debug for PgClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgClient")
            .field("database_url", &self.inner.config.database_url_masked())
            .field("pool_status", &self.pool_status())
            .finish_non_exhaustive()
    }
}

/// A connection checked out of the pool.
///
/// Dereferences to the underlying async connection, so every repository
/// trait is callable on it directly. Dropping it returns the connection to
/// the pool.
#[derive(Deref, DerefMut)]
pub struct PgConn {
    #[deref]
    #[deref_mut]
    conn: PooledConnection,
}

impl PgConn {
    /// Wraps a pooled connection.
    pub fn new(conn: PooledConnection) -> Self {
        Self { conn }
    }
}

impl fmt::Debug for PgConn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgConn").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(size: usize, available: usize, waiting: usize) -> PgPoolStatus {
        PgPoolStatus {
            max_size: 10,
            size,
            available,
            waiting,
        }
    }

    #[test]
    fn utilization_counts_handed_out_connections() {
        assert_eq!(status(8, 2, 0).utilization(), 0.6);
        assert_eq!(status(0, 0, 0).utilization(), 0.0);
    }

    #[test]
    fn pressure_from_waiters_or_high_utilization() {
        assert!(status(10, 1, 0).is_under_pressure());
        assert!(status(5, 5, 3).is_under_pressure());
        assert!(!status(5, 5, 0).is_under_pressure());
    }
}

use sqlx::sqlite::SqlitePool;
use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;

/// Shared, immutable per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub query_timeout: Duration,
}

impl AppState {
    pub fn new(pool: SqlitePool, query_timeout: Duration) -> Self {
        Self { pool, query_timeout }
    }

    /// Runs one data-store call, including a pool acquire, under the
    /// configured timeout.
    pub async fn bounded<T, F>(&self, query: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(Err(sqlx::Error::PoolTimedOut)) | Err(_) => {
                Err(ApiError::Timeout(self.query_timeout))
            }
            Ok(result) => Ok(result?),
        }
    }
}

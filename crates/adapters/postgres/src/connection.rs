//! PostgreSQL 连接管理

use catalog_errors::{AppError, AppResult};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::debug;

use crate::PostgresConfig;

/// 创建 PostgreSQL 连接池
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    debug!(
        pool_min = config.pool_min,
        pool_max = config.pool_max,
        "Creating PostgreSQL pool"
    );

    PgPoolOptions::new()
        .max_connections(config.pool_max)
        .min_connections(config.pool_min)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.connection_url())
        .await
        .map_err(|e| AppError::database(format!("Failed to create pool: {}", e)))
}

/// 检查数据库连接
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Database health check failed: {}", e)))?;
    Ok(())
}

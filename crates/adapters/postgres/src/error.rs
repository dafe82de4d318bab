//! sqlx 错误到 `AppError` 的映射

use catalog_errors::AppError;

/// 唯一约束冲突的 SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";

/// 将 sqlx 错误转换为 `AppError`
///
/// 唯一约束冲突映射为 `Conflict`，其余错误一律为 `Database`
pub fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    let is_unique_violation = err
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION);

    if is_unique_violation {
        AppError::conflict(format!("{}: {}", context, err))
    } else {
        AppError::database(format!("{}: {}", context, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_maps_to_database() {
        let err = map_sqlx_error("查询商品失败", sqlx::Error::RowNotFound);
        assert!(err.is_database());
        assert!(err.to_string().contains("查询商品失败"));
    }

    #[test]
    fn test_pool_timeout_maps_to_database() {
        let err = map_sqlx_error("保存商品失败", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Database(_)));
    }
}

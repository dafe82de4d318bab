//! 服务错误到 `AppError` 的转换

use catalog_errors::AppError;

use crate::domain::ProductError;

impl From<ProductError> for AppError {
    fn from(error: ProductError) -> Self {
        AppError::Validation(error.to_string())
    }
}

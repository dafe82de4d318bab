//! 商品表的存储接口
//!
//! 只处理 `ProductRecord`，领域转换由仓储负责

use async_trait::async_trait;
use catalog_errors::AppResult;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::record::ProductRecord;

/// 商品表存储
///
/// 所有列表查询按 `(created_at, id)` 升序返回
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<ProductRecord>>;

    async fn get_all(&self) -> AppResult<Vec<ProductRecord>>;

    /// 名称包含片段（忽略大小写）
    async fn search_name_ignore_case(&self, fragment: &str) -> AppResult<Vec<ProductRecord>>;

    /// 名称完全相等
    async fn find_by_exact_name(&self, name: &str) -> AppResult<Vec<ProductRecord>>;

    async fn find_in_stock(&self) -> AppResult<Vec<ProductRecord>>;

    async fn find_out_of_stock(&self) -> AppResult<Vec<ProductRecord>>;

    /// 价格在 `[min, max]` 闭区间内，不区分货币
    async fn find_by_price_between(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> AppResult<Vec<ProductRecord>>;

    async fn find_by_currency(&self, currency: &str) -> AppResult<Vec<ProductRecord>>;

    /// 库存严格小于阈值
    async fn find_stock_below(&self, threshold: i32) -> AppResult<Vec<ProductRecord>>;

    async fn count(&self) -> AppResult<u64>;

    async fn count_in_stock(&self) -> AppResult<u64>;

    /// 插入新行，ID 已存在时返回 `AppError::Conflict`
    async fn insert(&self, record: &ProductRecord) -> AppResult<ProductRecord>;

    /// 原子地插入或覆盖：行已存在时保留其 `created_at`
    async fn upsert(&self, record: &ProductRecord) -> AppResult<ProductRecord>;

    /// 覆盖已有行（`created_at` 保持不变），行不存在时返回 `AppError::NotFound`
    async fn update(&self, record: &ProductRecord) -> AppResult<ProductRecord>;

    /// 返回删除的行数
    async fn delete_by_id(&self, id: Uuid) -> AppResult<u64>;

    async fn delete_all(&self) -> AppResult<u64>;

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool>;
}

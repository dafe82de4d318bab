//! 商品仓储接口

use async_trait::async_trait;
use catalog_domain_core::Currency;
use catalog_errors::AppResult;
use catalog_ports::Repository;
use rust_decimal::Decimal;

use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;

/// 商品仓储接口
///
/// 基础 CRUD 来自 `Repository<Product, ProductId>`。
/// 参数校验在访问存储之前完成，校验失败返回 `AppError::Validation`
#[async_trait]
pub trait ProductRepository: Repository<Product, ProductId> {
    /// 按名称片段查找（忽略大小写），空白输入直接返回空列表
    async fn find_by_name_containing(&self, fragment: &str) -> AppResult<Vec<Product>>;

    /// 按名称精确查找，空白输入直接返回空列表
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>>;

    /// 库存大于 0 的商品
    async fn find_in_stock_products(&self) -> AppResult<Vec<Product>>;

    /// 库存为 0 的商品
    async fn find_out_of_stock_products(&self) -> AppResult<Vec<Product>>;

    /// 价格在 `[min, max]` 闭区间内的商品
    ///
    /// `min > max` 或任一端为负数时返回校验错误
    async fn find_by_price_range(&self, min: Decimal, max: Decimal) -> AppResult<Vec<Product>>;

    /// 指定货币计价的商品
    async fn find_by_currency(&self, currency: Currency) -> AppResult<Vec<Product>>;

    /// 库存低于阈值的商品，阈值为负数时返回校验错误
    async fn find_low_stock_products(&self, threshold: i32) -> AppResult<Vec<Product>>;

    /// 库存大于 0 的商品数量
    async fn count_in_stock_products(&self) -> AppResult<u64>;
}

//! 数据库行映射结构

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// `price_amount` 列（`NUMERIC(19,2)`）的小数位数
pub const PRICE_COLUMN_SCALE: u32 = 2;

/// `products` 表的一行
///
/// 不可变：更新时由 mapper 生成新的记录
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_amount: Decimal,
    pub price_currency: String,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

//! 值对象校验错误

use rust_decimal::Decimal;
use thiserror::Error;

/// 值对象构造失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("金额不能为负数: {0}")]
    NegativeAmount(Decimal),

    #[error("未知的货币代码: {0}")]
    UnknownCurrency(String),

    #[error("库存数量不能为负数: {0}")]
    NegativeQuantity(i32),
}

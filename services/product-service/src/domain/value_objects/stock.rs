//! 库存值对象

use catalog_domain_core::ValueError;
use serde::{Deserialize, Serialize};

/// 库存数量
///
/// 数量始终不小于 0。增减只能通过 `Product` 的库存方法完成
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Stock(i32);

impl Stock {
    pub fn new(quantity: i32) -> Result<Self, ValueError> {
        if quantity < 0 {
            return Err(ValueError::NegativeQuantity(quantity));
        }
        Ok(Self(quantity))
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn quantity(&self) -> i32 {
        self.0
    }

    pub fn is_in_stock(&self) -> bool {
        self.0 > 0
    }

    /// 增加库存，溢出时返回 None
    pub(crate) fn increased_by(self, amount: i32) -> Option<Self> {
        self.0.checked_add(amount).and_then(|q| Self::new(q).ok())
    }

    /// 减少库存，结果为负时返回 None
    pub(crate) fn decreased_by(self, amount: i32) -> Option<Self> {
        self.0.checked_sub(amount).and_then(|q| Self::new(q).ok())
    }
}

impl TryFrom<i32> for Stock {
    type Error = ValueError;

    fn try_from(quantity: i32) -> Result<Self, Self::Error> {
        Self::new(quantity)
    }
}

impl From<Stock> for i32 {
    fn from(stock: Stock) -> Self {
        stock.0
    }
}

//! 货币值对象

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ValueError;

/// 货币代码（ISO 4217）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Try,
    Usd,
    Eur,
    Gbp,
    Cny,
}

impl Currency {
    /// 所有支持的货币
    pub const ALL: [Currency; 5] = [
        Currency::Try,
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Cny,
    ];

    /// 从货币代码解析，忽略大小写和首尾空白
    pub fn from_code(code: &str) -> Result<Self, ValueError> {
        let normalized = code.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.code() == normalized)
            .ok_or_else(|| ValueError::UnknownCurrency(code.to_string()))
    }

    /// 三位货币代码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Try => "TRY",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Cny => "CNY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// 价格值对象
///
/// 业务规则: 金额不能为负数，小数位数不限
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PriceParts")]
pub struct Price {
    amount: Decimal,
    currency: Currency,
}

impl Price {
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, ValueError> {
        if amount < Decimal::ZERO {
            return Err(ValueError::NegativeAmount(amount));
        }

        Ok(Self { amount, currency })
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// 反序列化时的中间结构，经 `Price::new` 校验后才生成 `Price`
#[derive(Deserialize)]
struct PriceParts {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<PriceParts> for Price {
    type Error = ValueError;

    fn try_from(parts: PriceParts) -> Result<Self, Self::Error> {
        Self::new(parts.amount, parts.currency)
    }
}

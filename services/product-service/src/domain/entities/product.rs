//! 商品聚合根

use catalog_domain_core::{AggregateRoot, Entity, Price, ValueError};
use thiserror::Error;

use crate::domain::value_objects::{ProductId, Stock};

/// 商品名称最大长度
pub const MAX_NAME_LENGTH: usize = 255;

/// 商品描述最大长度
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// 商品领域错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("商品名称不能为空")]
    EmptyName,

    #[error("商品名称长度不能超过 {max} 个字符", max = MAX_NAME_LENGTH)]
    NameTooLong,

    #[error("商品描述长度不能超过 {max} 个字符", max = MAX_DESCRIPTION_LENGTH)]
    DescriptionTooLong,

    #[error("库存变动数量无效: {0}")]
    InvalidQuantityDelta(i32),

    #[error("库存不足: 需要 {requested}, 现有 {available}")]
    InsufficientStock { requested: i32, available: i32 },

    #[error(transparent)]
    Value(#[from] ValueError),
}

/// 商品聚合根
///
/// 相等性覆盖全部领域字段；时间戳属于持久化层，不在此处
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    stock: Stock,
}

impl Product {
    /// 创建新商品，生成新的 ID
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        stock: Stock,
    ) -> Result<Self, ProductError> {
        let name = validate_name(name.into())?;
        let description = validate_description(description.into())?;

        Ok(Self {
            id: ProductId::new(),
            name,
            description,
            price,
            stock,
        })
    }

    /// 从存储重建商品，沿用已有 ID
    ///
    /// 只在加载持久化数据时使用，ID 唯一性由存储保证
    pub fn reconstruct(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        stock: Stock,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock.is_in_stock()
    }

    /// 更新名称和描述，校验失败时保持原值
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), ProductError> {
        let name = validate_name(name.into())?;
        let description = validate_description(description.into())?;

        self.name = name;
        self.description = description;
        Ok(())
    }

    /// 整体替换价格
    pub fn update_price(&mut self, price: Price) {
        self.price = price;
    }

    /// 增加库存
    pub fn add_stock(&mut self, amount: i32) -> Result<(), ProductError> {
        if amount <= 0 {
            return Err(ProductError::InvalidQuantityDelta(amount));
        }

        self.stock = self
            .stock
            .increased_by(amount)
            .ok_or(ProductError::InvalidQuantityDelta(amount))?;
        Ok(())
    }

    /// 减少库存，数量不足时保持原值
    pub fn reduce_stock(&mut self, amount: i32) -> Result<(), ProductError> {
        if amount <= 0 {
            return Err(ProductError::InvalidQuantityDelta(amount));
        }

        self.stock = self
            .stock
            .decreased_by(amount)
            .ok_or(ProductError::InsufficientStock {
                requested: amount,
                available: self.stock.quantity(),
            })?;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Product {
    fn aggregate_type() -> &'static str {
        "Product"
    }
}

fn validate_name(name: String) -> Result<String, ProductError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ProductError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ProductError::NameTooLong);
    }

    Ok(name.to_string())
}

fn validate_description(description: String) -> Result<String, ProductError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ProductError::DescriptionTooLong);
    }

    Ok(description)
}

//! 基于 `ProductStore` 的商品仓储实现

use async_trait::async_trait;
use catalog_domain_core::{Currency, ValueError};
use catalog_errors::{AppError, AppResult};
use catalog_ports::Repository;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;

use super::mapper::{to_domain, to_domain_list, to_new_record, to_updated_record};
use super::record::{PRICE_COLUMN_SCALE, ProductRecord};
use super::store::ProductStore;

/// 商品仓储
///
/// 负责参数校验和领域转换，数据访问全部委托给 `S`
#[derive(Clone)]
pub struct StoreProductRepository<S> {
    store: S,
}

impl<S: ProductStore> StoreProductRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 删除全部商品，返回删除的行数
    pub async fn delete_all(&self) -> AppResult<u64> {
        let removed = self.store.delete_all().await?;
        debug!(removed, "Deleted all products");
        Ok(removed)
    }
}

fn corrupt(error: ValueError) -> AppError {
    AppError::internal(format!("商品数据损坏: {}", error))
}

/// 金额小数位超出列精度时拒绝，避免数据库静默舍入
fn ensure_storable_price(product: &Product) -> AppResult<()> {
    let amount = product.price().amount();
    if amount.normalize().scale() > PRICE_COLUMN_SCALE {
        return Err(AppError::validation(format!(
            "金额最多保留 {} 位小数: {}",
            PRICE_COLUMN_SCALE, amount
        )));
    }
    Ok(())
}

fn load_one(record: ProductRecord) -> AppResult<Product> {
    to_domain(record).map_err(corrupt)
}

fn load_many(records: Vec<ProductRecord>) -> AppResult<Vec<Product>> {
    to_domain_list(records).map_err(corrupt)
}

#[async_trait]
impl<S: ProductStore> Repository<Product, ProductId> for StoreProductRepository<S> {
    async fn save(&self, product: &Product) -> AppResult<Product> {
        ensure_storable_price(product)?;

        let id = product.id();
        let now = Utc::now();

        let saved = match self.store.get_by_id(id.as_uuid()).await? {
            Some(existing) => {
                debug!(product_id = %id, "Updating product");
                self.store
                    .update(&to_updated_record(&existing, product, now))
                    .await?
            }
            // 并发的首次保存由 upsert 合并为一行
            None => {
                debug!(product_id = %id, "Inserting product");
                self.store.upsert(&to_new_record(product, now)).await?
            }
        };

        load_one(saved)
    }

    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        debug!(product_id = %id, "Finding product by id");
        self.store
            .get_by_id(id.as_uuid())
            .await?
            .map(load_one)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let records = self.store.get_all().await?;
        debug!(count = records.len(), "Loaded all products");
        load_many(records)
    }

    async fn delete_by_id(&self, id: &ProductId) -> AppResult<()> {
        let removed = self.store.delete_by_id(id.as_uuid()).await?;
        debug!(product_id = %id, removed, "Deleted product");
        Ok(())
    }

    async fn exists_by_id(&self, id: &ProductId) -> AppResult<bool> {
        self.store.exists_by_id(id.as_uuid()).await
    }

    async fn count(&self) -> AppResult<u64> {
        self.store.count().await
    }
}

#[async_trait]
impl<S: ProductStore> ProductRepository for StoreProductRepository<S> {
    async fn find_by_name_containing(&self, fragment: &str) -> AppResult<Vec<Product>> {
        if fragment.trim().is_empty() {
            return Ok(Vec::new());
        }

        debug!(fragment, "Searching products by name");
        load_many(self.store.search_name_ignore_case(fragment).await?)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        if name.trim().is_empty() {
            return Ok(Vec::new());
        }

        debug!(name, "Finding products by exact name");
        load_many(self.store.find_by_exact_name(name).await?)
    }

    async fn find_in_stock_products(&self) -> AppResult<Vec<Product>> {
        load_many(self.store.find_in_stock().await?)
    }

    async fn find_out_of_stock_products(&self) -> AppResult<Vec<Product>> {
        load_many(self.store.find_out_of_stock().await?)
    }

    async fn find_by_price_range(&self, min: Decimal, max: Decimal) -> AppResult<Vec<Product>> {
        if min < Decimal::ZERO || max < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "价格区间不能为负数: [{}, {}]",
                min, max
            )));
        }
        if min > max {
            return Err(AppError::validation(format!(
                "最低价格不能高于最高价格: [{}, {}]",
                min, max
            )));
        }

        debug!(%min, %max, "Finding products by price range");
        load_many(self.store.find_by_price_between(min, max).await?)
    }

    async fn find_by_currency(&self, currency: Currency) -> AppResult<Vec<Product>> {
        debug!(%currency, "Finding products by currency");
        load_many(self.store.find_by_currency(currency.code()).await?)
    }

    async fn find_low_stock_products(&self, threshold: i32) -> AppResult<Vec<Product>> {
        if threshold < 0 {
            return Err(AppError::validation(format!(
                "库存阈值不能为负数: {}",
                threshold
            )));
        }

        debug!(threshold, "Finding low stock products");
        load_many(self.store.find_stock_below(threshold).await?)
    }

    async fn count_in_stock_products(&self) -> AppResult<u64> {
        self.store.count_in_stock().await
    }
}

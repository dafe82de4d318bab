//! 内存商品存储
//!
//! 语义与 PostgreSQL 实现保持一致，供测试和本地运行使用

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use catalog_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::record::ProductRecord;
use super::store::ProductStore;

#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    rows: Arc<RwLock<HashMap<Uuid, ProductRecord>>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn select<F>(&self, predicate: F) -> Vec<ProductRecord>
    where
        F: Fn(&ProductRecord) -> bool,
    {
        let rows = self.rows.read().await;
        let mut selected: Vec<_> = rows.values().filter(|r| predicate(r)).cloned().collect();
        selected.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        selected
    }

    async fn count_where<F>(&self, predicate: F) -> u64
    where
        F: Fn(&ProductRecord) -> bool,
    {
        let rows = self.rows.read().await;
        rows.values().filter(|r| predicate(r)).count() as u64
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<ProductRecord>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<ProductRecord>> {
        Ok(self.select(|_| true).await)
    }

    async fn search_name_ignore_case(&self, fragment: &str) -> AppResult<Vec<ProductRecord>> {
        let needle = fragment.to_lowercase();
        Ok(self
            .select(|r| r.name.to_lowercase().contains(&needle))
            .await)
    }

    async fn find_by_exact_name(&self, name: &str) -> AppResult<Vec<ProductRecord>> {
        Ok(self.select(|r| r.name == name).await)
    }

    async fn find_in_stock(&self) -> AppResult<Vec<ProductRecord>> {
        Ok(self.select(|r| r.stock_quantity > 0).await)
    }

    async fn find_out_of_stock(&self) -> AppResult<Vec<ProductRecord>> {
        Ok(self.select(|r| r.stock_quantity == 0).await)
    }

    async fn find_by_price_between(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> AppResult<Vec<ProductRecord>> {
        Ok(self
            .select(|r| r.price_amount >= min && r.price_amount <= max)
            .await)
    }

    async fn find_by_currency(&self, currency: &str) -> AppResult<Vec<ProductRecord>> {
        Ok(self.select(|r| r.price_currency == currency).await)
    }

    async fn find_stock_below(&self, threshold: i32) -> AppResult<Vec<ProductRecord>> {
        Ok(self.select(|r| r.stock_quantity < threshold).await)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.read().await.len() as u64)
    }

    async fn count_in_stock(&self) -> AppResult<u64> {
        Ok(self.count_where(|r| r.stock_quantity > 0).await)
    }

    async fn insert(&self, record: &ProductRecord) -> AppResult<ProductRecord> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&record.id) {
            return Err(AppError::conflict(format!("商品已存在: {}", record.id)));
        }

        rows.insert(record.id, record.clone());
        Ok(record.clone())
    }

    async fn upsert(&self, record: &ProductRecord) -> AppResult<ProductRecord> {
        let mut rows = self.rows.write().await;
        let saved = match rows.get(&record.id) {
            Some(existing) => ProductRecord {
                created_at: existing.created_at,
                ..record.clone()
            },
            None => record.clone(),
        };

        rows.insert(record.id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, record: &ProductRecord) -> AppResult<ProductRecord> {
        let mut rows = self.rows.write().await;
        let existing = rows
            .get_mut(&record.id)
            .ok_or_else(|| AppError::not_found(format!("商品不存在: {}", record.id)))?;

        *existing = ProductRecord {
            created_at: existing.created_at,
            ..record.clone()
        };
        Ok(existing.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<u64> {
        Ok(self.rows.write().await.remove(&id).map_or(0, |_| 1))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut rows = self.rows.write().await;
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.rows.read().await.contains_key(&id))
    }
}

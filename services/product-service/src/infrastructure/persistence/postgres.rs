//! PostgreSQL 商品存储

use async_trait::async_trait;
use catalog_adapter_postgres::map_sqlx_error;
use catalog_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::record::ProductRecord;
use super::store::ProductStore;

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, description, price_amount, price_currency, stock_quantity,
           created_at, updated_at
    FROM products
"#;

const ORDER_BY: &str = "ORDER BY created_at, id";

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn list_sql(filter: &str) -> String {
        format!("{SELECT_COLUMNS} {filter} {ORDER_BY}")
    }

    async fn count_where(&self, filter: &str) -> AppResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM products {filter}");
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("统计商品失败", e))?;

        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询商品失败", e))
    }

    async fn get_all(&self) -> AppResult<Vec<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&Self::list_sql(""))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询商品列表失败", e))
    }

    async fn search_name_ignore_case(&self, fragment: &str) -> AppResult<Vec<ProductRecord>> {
        // strpos 避免 LIKE 通配符转义
        sqlx::query_as::<_, ProductRecord>(&Self::list_sql(
            "WHERE strpos(lower(name), lower($1)) > 0",
        ))
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("按名称搜索商品失败", e))
    }

    async fn find_by_exact_name(&self, name: &str) -> AppResult<Vec<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&Self::list_sql("WHERE name = $1"))
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("按名称查询商品失败", e))
    }

    async fn find_in_stock(&self) -> AppResult<Vec<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&Self::list_sql("WHERE stock_quantity > 0"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询有货商品失败", e))
    }

    async fn find_out_of_stock(&self) -> AppResult<Vec<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&Self::list_sql("WHERE stock_quantity = 0"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询缺货商品失败", e))
    }

    async fn find_by_price_between(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> AppResult<Vec<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&Self::list_sql(
            "WHERE price_amount BETWEEN $1 AND $2",
        ))
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("按价格区间查询商品失败", e))
    }

    async fn find_by_currency(&self, currency: &str) -> AppResult<Vec<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&Self::list_sql("WHERE price_currency = $1"))
            .bind(currency)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("按货币查询商品失败", e))
    }

    async fn find_stock_below(&self, threshold: i32) -> AppResult<Vec<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&Self::list_sql("WHERE stock_quantity < $1"))
            .bind(threshold)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询低库存商品失败", e))
    }

    async fn count(&self) -> AppResult<u64> {
        self.count_where("").await
    }

    async fn count_in_stock(&self) -> AppResult<u64> {
        self.count_where("WHERE stock_quantity > 0").await
    }

    async fn insert(&self, record: &ProductRecord) -> AppResult<ProductRecord> {
        sqlx::query_as::<_, ProductRecord>(
            r#"
            INSERT INTO products (
                id, name, description, price_amount, price_currency, stock_quantity,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, description, price_amount, price_currency, stock_quantity,
                      created_at, updated_at
            "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price_amount)
        .bind(&record.price_currency)
        .bind(record.stock_quantity)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("保存商品失败", e))
    }

    async fn upsert(&self, record: &ProductRecord) -> AppResult<ProductRecord> {
        sqlx::query_as::<_, ProductRecord>(
            r#"
            INSERT INTO products (
                id, name, description, price_amount, price_currency, stock_quantity,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, description = EXCLUDED.description,
                price_amount = EXCLUDED.price_amount, price_currency = EXCLUDED.price_currency,
                stock_quantity = EXCLUDED.stock_quantity, updated_at = EXCLUDED.updated_at
            RETURNING id, name, description, price_amount, price_currency, stock_quantity,
                      created_at, updated_at
            "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price_amount)
        .bind(&record.price_currency)
        .bind(record.stock_quantity)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("保存商品失败", e))
    }

    async fn update(&self, record: &ProductRecord) -> AppResult<ProductRecord> {
        sqlx::query_as::<_, ProductRecord>(
            r#"
            UPDATE products
            SET name = $2, description = $3, price_amount = $4, price_currency = $5,
                stock_quantity = $6, updated_at = $7
            WHERE id = $1
            RETURNING id, name, description, price_amount, price_currency, stock_quantity,
                      created_at, updated_at
            "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price_amount)
        .bind(&record.price_currency)
        .bind(record.stock_quantity)
        .bind(record.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("更新商品失败", e))?
        .ok_or_else(|| AppError::not_found(format!("商品不存在: {}", record.id)))
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("删除商品失败", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("清空商品失败", e))?;

        Ok(result.rows_affected())
    }

    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询商品是否存在失败", e))
    }
}

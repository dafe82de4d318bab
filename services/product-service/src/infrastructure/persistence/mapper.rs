//! 领域对象与数据库行之间的转换
//!
//! 纯函数，时间由调用方传入

use catalog_domain_core::{Currency, Price, ValueError};
use chrono::{DateTime, Utc};

use crate::domain::entities::Product;
use crate::domain::value_objects::{ProductId, Stock};

use super::record::ProductRecord;

/// 首次插入使用的记录，`created_at` 与 `updated_at` 均为 `now`
pub fn to_new_record(product: &Product, now: DateTime<Utc>) -> ProductRecord {
    ProductRecord {
        id: product.id().as_uuid(),
        name: product.name().to_string(),
        description: product.description().to_string(),
        price_amount: product.price().amount(),
        price_currency: product.price().currency().code().to_string(),
        stock_quantity: product.stock().quantity(),
        created_at: now,
        updated_at: Some(now),
    }
}

/// 基于已有记录生成更新后的记录
///
/// ID 与 `created_at` 沿用已有记录，只刷新领域字段和 `updated_at`
pub fn to_updated_record(
    existing: &ProductRecord,
    product: &Product,
    now: DateTime<Utc>,
) -> ProductRecord {
    ProductRecord {
        name: product.name().to_string(),
        description: product.description().to_string(),
        price_amount: product.price().amount(),
        price_currency: product.price().currency().code().to_string(),
        stock_quantity: product.stock().quantity(),
        updated_at: Some(now),
        ..existing.clone()
    }
}

/// 将数据库行还原为商品
///
/// 存储中的值同样经过值对象校验，损坏的数据不会进入领域层
pub fn to_domain(record: ProductRecord) -> Result<Product, ValueError> {
    let currency = Currency::from_code(&record.price_currency)?;
    let price = Price::new(record.price_amount, currency)?;
    let stock = Stock::new(record.stock_quantity)?;

    Ok(Product::reconstruct(
        ProductId::from_uuid(record.id),
        record.name,
        record.description,
        price,
        stock,
    ))
}

/// 批量生成首次插入的记录，保持顺序
pub fn to_new_records(products: &[Product], now: DateTime<Utc>) -> Vec<ProductRecord> {
    products
        .iter()
        .map(|product| to_new_record(product, now))
        .collect()
}

/// 批量还原商品，保持顺序；任一行无效则整体失败
pub fn to_domain_list(records: Vec<ProductRecord>) -> Result<Vec<Product>, ValueError> {
    records.into_iter().map(to_domain).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn product(name: &str, cents: i64, quantity: i32) -> Product {
        Product::create(
            name,
            format!("{name} description"),
            Price::new(Decimal::new(cents, 2), Currency::Try).unwrap(),
            Stock::new(quantity).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_record_copies_fields() {
        let now = Utc::now();
        let laptop = product("Laptop", 1_500_000, 10);
        let record = to_new_record(&laptop, now);

        assert_eq!(record.id, laptop.id().as_uuid());
        assert_eq!(record.name, "Laptop");
        assert_eq!(record.description, "Laptop description");
        assert_eq!(record.price_amount, Decimal::new(1_500_000, 2));
        assert_eq!(record.price_currency, "TRY");
        assert_eq!(record.stock_quantity, 10);
        assert_eq!(record.created_at, now);
        assert_eq!(record.updated_at, Some(now));
    }

    #[test]
    fn test_round_trip_preserves_domain_fields() {
        let laptop = product("Laptop", 1_500_000, 10);
        let restored = to_domain(to_new_record(&laptop, Utc::now())).unwrap();
        assert_eq!(restored, laptop);
    }

    #[test]
    fn test_updated_record_keeps_created_at() {
        let created = Utc::now() - Duration::hours(1);
        let mut laptop = product("Laptop", 1_500_000, 10);
        let existing = to_new_record(&laptop, created);

        laptop.reduce_stock(3).unwrap();
        laptop.update_details("Laptop Pro", "Workstation").unwrap();
        let now = Utc::now();
        let updated = to_updated_record(&existing, &laptop, now);

        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.created_at, created);
        assert_eq!(updated.updated_at, Some(now));
        assert_eq!(updated.name, "Laptop Pro");
        assert_eq!(updated.stock_quantity, 7);
        // 原记录不受影响
        assert_eq!(existing.name, "Laptop");
        assert_eq!(existing.stock_quantity, 10);
    }

    #[test]
    fn test_to_domain_rejects_corrupt_rows() {
        let base = to_new_record(&product("Mouse", 50_000, 5), Utc::now());

        let bad_currency = ProductRecord {
            price_currency: "XXX".to_string(),
            ..base.clone()
        };
        assert!(matches!(
            to_domain(bad_currency),
            Err(ValueError::UnknownCurrency(_))
        ));

        let negative_stock = ProductRecord {
            stock_quantity: -1,
            ..base.clone()
        };
        assert_eq!(
            to_domain(negative_stock),
            Err(ValueError::NegativeQuantity(-1))
        );

        let negative_price = ProductRecord {
            price_amount: Decimal::new(-100, 2),
            ..base
        };
        assert!(matches!(
            to_domain(negative_price),
            Err(ValueError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_list_mapping_preserves_order() {
        let now = Utc::now();
        let products = vec![
            product("Laptop", 1_500_000, 10),
            product("Mouse", 50_000, 50),
            product("Keyboard", 80_000, 0),
        ];

        let records = to_new_records(&products, now);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Laptop", "Mouse", "Keyboard"]);

        let restored = to_domain_list(records).unwrap();
        assert_eq!(restored, products);
    }

    #[test]
    fn test_empty_lists_map_to_empty_lists() {
        assert!(to_new_records(&[], Utc::now()).is_empty());
        assert!(to_domain_list(Vec::new()).unwrap().is_empty());
    }
}

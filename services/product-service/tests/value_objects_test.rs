//! 值对象单元测试

use product_service::domain::{Currency, Price, ProductId, Stock, ValueError};
use rust_decimal::Decimal;

#[test]
fn test_price_accepts_non_negative_amounts() {
    for cents in [0_i64, 1, 99, 50_000, 1_500_000, i32::MAX as i64] {
        for currency in Currency::ALL {
            let price = Price::new(Decimal::new(cents, 2), currency);
            assert!(price.is_ok(), "{} {} should be valid", cents, currency);
        }
    }
}

#[test]
fn test_price_rejects_negative_amounts() {
    for cents in [-1_i64, -100, -1_500_000] {
        let result = Price::new(Decimal::new(cents, 2), Currency::Try);
        assert_eq!(result, Err(ValueError::NegativeAmount(Decimal::new(cents, 2))));
    }
}

#[test]
fn test_price_accepts_any_precision() {
    for (num, scale) in [(5_i64, 3_u32), (10_005, 3), (1, 8)] {
        let amount = Decimal::new(num, scale);
        let price = Price::new(amount, Currency::Try).unwrap();
        assert_eq!(price.amount(), amount);
    }
}

#[test]
fn test_price_display() {
    let price = Price::new(Decimal::new(1_500_000, 2), Currency::Try).unwrap();
    assert_eq!(price.to_string(), "15000.00 TRY");
}

#[test]
fn test_currency_codes() {
    assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
    assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::Eur);
    assert!("XYZ".parse::<Currency>().is_err());
    assert!("".parse::<Currency>().is_err());

    for currency in Currency::ALL {
        assert_eq!(Currency::from_code(currency.code()), Ok(currency));
    }
}

#[test]
fn test_stock() {
    assert_eq!(Stock::new(0).unwrap(), Stock::zero());
    assert_eq!(Stock::new(7).unwrap().quantity(), 7);
    assert!(Stock::new(1).unwrap().is_in_stock());
    assert_eq!(Stock::new(-5), Err(ValueError::NegativeQuantity(-5)));
}

#[test]
fn test_product_id_round_trip_through_string() {
    let id = ProductId::new();
    let parsed: ProductId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
}

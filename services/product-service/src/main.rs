//! product-service 启动入口
//!
//! 连接数据库、执行迁移，然后写入示例商品并逐一演示仓储操作

use std::time::Duration;

use catalog_adapter_postgres::{PostgresConfig, check_connection, create_pool};
use catalog_common::{RetryConfig, is_transient_error, with_conditional_retry};
use catalog_config::AppConfig;
use catalog_ports::Repository;
use catalog_telemetry::LogFormat;
use product_service::domain::{Currency, Price, Product, ProductRepository, Stock};
use product_service::infrastructure::persistence::{PgProductStore, StoreProductRepository};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let config = AppConfig::load(&config_dir)?;

    catalog_telemetry::init(
        LogFormat::for_env(&config.app_env),
        &config.telemetry.log_level,
    );
    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );

    let pg_config = PostgresConfig::new(config.database.url.expose_secret())
        .with_max_connections(config.database.max_connections)
        .with_application_name(config.app_name.clone());
    let retry_config = RetryConfig::new(
        config.database.connect_attempts,
        Duration::from_millis(500),
        Duration::from_secs(10),
    );

    let pool = with_conditional_retry(
        &retry_config,
        "PostgreSQL connection",
        || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        },
        |e| is_transient_error(&e.to_string()),
    )
    .await?;
    check_connection(&pool).await?;
    info!(
        max_connections = config.database.max_connections,
        "PostgreSQL connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Migrations applied");

    let repository = StoreProductRepository::new(PgProductStore::new(pool));
    run_demo(&repository).await?;

    info!("Done");
    Ok(())
}

async fn run_demo<R: ProductRepository>(repository: &R) -> anyhow::Result<()> {
    let samples = [
        ("Laptop", "Gaming Laptop", Decimal::new(1_500_000, 2), 10),
        ("Mouse", "Wireless Mouse", Decimal::new(50_000, 2), 50),
        ("Keyboard", "Mechanical Keyboard", Decimal::new(80_000, 2), 0),
    ];

    let mut saved = Vec::with_capacity(samples.len());
    for (name, description, amount, quantity) in samples {
        let product = Product::create(
            name,
            description,
            Price::new(amount, Currency::Try)?,
            Stock::new(quantity)?,
        )?;
        let product = repository.save(&product).await?;
        info!(product_id = %product.id(), name = product.name(), "Saved product");
        saved.push(product);
    }

    let laptop = &saved[0];
    if let Some(found) = repository.find_by_id(&laptop.id()).await? {
        info!(
            name = found.name(),
            price = %found.price(),
            stock = found.stock().quantity(),
            "Found product by id"
        );
    }

    let all = repository.find_all().await?;
    info!(count = all.len(), "All products");

    let matches = repository.find_by_name_containing("laptop").await?;
    info!(count = matches.len(), "Products matching 'laptop'");

    let in_stock = repository.find_in_stock_products().await?;
    let out_of_stock = repository.find_out_of_stock_products().await?;
    info!(
        in_stock = in_stock.len(),
        out_of_stock = out_of_stock.len(),
        "Stock overview"
    );

    let in_range = repository
        .find_by_price_range(Decimal::new(500, 0), Decimal::new(2000, 0))
        .await?;
    info!(count = in_range.len(), "Products priced between 500 and 2000");

    let low_stock = repository.find_low_stock_products(20).await?;
    info!(count = low_stock.len(), "Products with stock below 20");

    let mut laptop = laptop.clone();
    laptop.reduce_stock(3)?;
    let laptop = repository.save(&laptop).await?;
    info!(stock = laptop.stock().quantity(), "Reduced laptop stock");

    let keyboard_id = saved[2].id();
    repository.delete_by_id(&keyboard_id).await?;
    let exists = repository.exists_by_id(&keyboard_id).await?;
    info!(product_id = %keyboard_id, exists, "Deleted keyboard");

    let total = repository.count().await?;
    let in_stock = repository.count_in_stock_products().await?;
    info!(total, in_stock, "Product counts");

    Ok(())
}

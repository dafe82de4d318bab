//! PostgreSQL 连接池配置

use std::time::Duration;

/// PostgreSQL 配置
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// 数据库 URL
    pub url: String,
    /// 最小连接数
    pub pool_min: u32,
    /// 最大连接数
    pub pool_max: u32,
    /// 获取连接超时
    pub acquire_timeout: Duration,
    /// 空闲超时
    pub idle_timeout: Duration,
    /// 连接最大生命周期
    pub max_lifetime: Option<Duration>,
    /// 应用名称（用于连接标识）
    pub application_name: Option<String>,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            pool_min: 1,
            pool_max: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Some(Duration::from_secs(1800)),
            application_name: None,
        }
    }
}

impl PostgresConfig {
    /// 从 URL 创建配置
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.pool_max = max.max(1);
        self.pool_min = self.pool_min.min(self.pool_max);
        self
    }

    /// 设置连接池大小
    pub fn with_pool(mut self, min: u32, max: u32) -> Self {
        self.pool_max = max.max(1);
        self.pool_min = min.min(self.pool_max);
        self
    }

    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// 获取附带连接参数的 URL
    pub fn connection_url(&self) -> String {
        let Some(ref app_name) = self.application_name else {
            return self.url.clone();
        };

        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}application_name={}",
            self.url,
            separator,
            urlencoding::encode(app_name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PostgresConfig::default();
        assert_eq!(config.pool_min, 1);
        assert_eq!(config.pool_max, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_pool_bounds() {
        let config = PostgresConfig::new("postgres://localhost/db").with_pool(5, 2);
        assert_eq!(config.pool_max, 2);
        assert_eq!(config.pool_min, 2);

        let config = PostgresConfig::new("postgres://localhost/db").with_max_connections(0);
        assert_eq!(config.pool_max, 1);
        assert_eq!(config.pool_min, 1);
    }

    #[test]
    fn test_connection_url() {
        let plain = PostgresConfig::new("postgres://user@localhost:5432/mydb");
        assert_eq!(plain.connection_url(), "postgres://user@localhost:5432/mydb");

        let named = PostgresConfig::new("postgres://user@localhost:5432/mydb")
            .with_application_name("product-service");
        assert_eq!(
            named.connection_url(),
            "postgres://user@localhost:5432/mydb?application_name=product-service"
        );

        let with_query = PostgresConfig::new("postgres://localhost/mydb?sslmode=disable")
            .with_application_name("product-service");
        assert!(with_query.connection_url().ends_with("sslmode=disable&application_name=product-service"));
    }

    #[test]
    fn test_connection_url_encodes_application_name() {
        let config = PostgresConfig::new("postgres://localhost/mydb")
            .with_application_name("product service&sslmode=disable");
        assert_eq!(
            config.connection_url(),
            "postgres://localhost/mydb?application_name=product%20service%26sslmode%3Ddisable"
        );
    }
}

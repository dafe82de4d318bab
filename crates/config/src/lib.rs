//! catalog-config - 配置加载库
//!
//! 加载顺序（后者覆盖前者）:
//! 1. `{config_dir}/default.toml`
//! 2. `{config_dir}/{APP_ENV}.toml`
//! 3. `DATABASE_URL` 环境变量
//! 4. `CATALOG__` 前缀的环境变量，`__` 表示层级，如 `CATALOG__DATABASE__MAX_CONNECTIONS`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// 启动时建立连接的最大尝试次数
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,
}

fn default_max_connections() -> u32 {
    match std::env::var("APP_ENV").as_deref() {
        Ok("production") => 50,
        _ => 10,
    }
}

fn default_connect_attempts() -> u32 {
    5
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// 未在任何配置源出现时使用的基础值
#[derive(Serialize)]
struct Defaults {
    app_name: &'static str,
    app_env: String,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Self::figment(config_dir, &env)
            .extract()
            .map_err(ConfigError::from)
    }

    fn figment(config_dir: &str, env: &str) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Defaults {
                app_name: "product-service",
                app_env: env.to_string(),
            }))
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(
                Env::raw()
                    .only(&["DATABASE_URL"])
                    .map(|_| "database.url".into()),
            )
            .merge(Env::prefixed("CATALOG__").split("__"))
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}

#[cfg(test)]
mod tests;

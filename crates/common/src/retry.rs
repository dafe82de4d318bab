//! 启动期重试机制
//!
//! 带指数退避的重试，只用于建立外部连接等启动步骤，仓储操作本身不重试

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// 重试配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// 最大尝试次数（含第一次）
    pub max_attempts: u32,
    /// 初始延迟
    pub initial_delay: Duration,
    /// 最大延迟
    pub max_delay: Duration,
    /// 退避乘数
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

fn default_multiplier() -> f64 {
    2.0
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    pub fn new(max_attempts: u32, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            max_delay,
            multiplier: 2.0,
        }
    }

    /// 第 n 次重试前的等待时间（n 从 0 开始），不超过 `max_delay`
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay_ms =
            self.initial_delay.as_millis() as f64 * self.multiplier.powi(attempt as i32);
        let capped_delay = (delay_ms as u64).min(self.max_delay.as_millis() as u64);
        Duration::from_millis(capped_delay)
    }
}

/// 连接类瞬时错误的特征片段
pub const TRANSIENT_ERROR_PATTERNS: &[&str] = &[
    "connection refused",
    "connection reset",
    "connection timed out",
    "timed out",
    "timeout",
    "temporarily unavailable",
    "too many connections",
    "the database system is starting up",
    "could not connect",
    "no route to host",
    "broken pipe",
    "server closed the connection",
    "pool timed out",
];

/// 判断错误信息是否属于瞬时错误
pub fn is_transient_error(error: &str) -> bool {
    let error_lower = error.to_lowercase();
    TRANSIENT_ERROR_PATTERNS
        .iter()
        .any(|pattern| error_lower.contains(pattern))
}

/// 带重试执行异步操作，所有错误都视为可重试
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    with_conditional_retry(config, operation_name, operation, |_| true).await
}

/// 带条件重试执行异步操作
///
/// 只有 `should_retry` 返回 true 的错误才会重试，其余错误立即返回
pub async fn with_conditional_retry<F, Fut, T, E, P>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
    should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: Fn(&E) -> bool,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    info!(
                        operation = operation_name,
                        attempt = attempt + 1,
                        "Operation succeeded after retry"
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                let is_last_attempt = attempt + 1 >= max_attempts;

                if is_last_attempt || !should_retry(&e) {
                    warn!(
                        operation = operation_name,
                        attempt = attempt + 1,
                        max_attempts,
                        error = %e,
                        "Operation failed, giving up"
                    );
                    return Err(e);
                }

                let delay = config.delay_for_attempt(attempt);
                warn!(
                    operation = operation_name,
                    attempt = attempt + 1,
                    max_attempts,
                    error = %e,
                    delay_ms = delay.as_millis() as u64,
                    "Operation failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_config(max_attempts: u32) -> RetryConfig {
        RetryConfig::new(max_attempts, Duration::from_millis(1), Duration::from_millis(5))
    }

    #[tokio::test]
    async fn test_retry_success_first_attempt() {
        let result: Result<i32, &str> =
            with_retry(&fast_config(3), "test", || async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_retry_success_after_failures() {
        let counter = AtomicU32::new(0);

        let result: Result<i32, &str> = with_retry(&fast_config(3), "test", || {
            let count = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if count < 2 {
                    Err("connection refused")
                } else {
                    Ok(42)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_max_attempts() {
        let counter = AtomicU32::new(0);

        let result: Result<i32, &str> = with_retry(&fast_config(3), "test", || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err("connection refused") }
        })
        .await;

        assert_eq!(result.unwrap_err(), "connection refused");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_transient_error_is_not_retried() {
        let counter = AtomicU32::new(0);

        let result: Result<i32, &str> = with_conditional_retry(
            &fast_config(5),
            "test",
            || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Err("password authentication failed") }
            },
            |e| is_transient_error(e),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_runs_once() {
        let config = RetryConfig {
            max_attempts: 0,
            ..fast_config(1)
        };
        let counter = AtomicU32::new(0);

        let result: Result<i32, &str> = with_retry(&config, "test", || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err("timeout") }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_delay_calculation() {
        let config = RetryConfig::new(5, Duration::from_millis(100), Duration::from_secs(5));

        assert_eq!(config.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(config.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(config.delay_for_attempt(2), Duration::from_millis(400));
        assert_eq!(config.delay_for_attempt(10), Duration::from_secs(5));
    }

    #[test]
    fn test_is_transient_error() {
        assert!(is_transient_error("Connection refused (os error 111)"));
        assert!(is_transient_error("pool timed out while waiting for an open connection"));
        assert!(is_transient_error("FATAL: the database system is starting up"));
        assert!(!is_transient_error("password authentication failed for user"));
        assert!(!is_transient_error("relation \"products\" does not exist"));
    }
}

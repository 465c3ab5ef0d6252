//! 服务配置 - 数据层的所有配置项
//!
//! # 环境变量
//!
//! 所有配置项都可以通过环境变量覆盖：
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | DATA_DIR | /var/lib/mandi | 数据目录 |
//! | FLAT_SHIPPING_FEE | 50 | 固定运费 (₹) |
//! | FREE_SHIPPING_THRESHOLD | 500 | 免运费起送金额 (₹) |
//! | VERIFICATION_DELAY_MS | 2000 | 模拟审核延迟(毫秒) |
//! | VERIFICATION_POLL_MS | 500 | 审核状态轮询间隔(毫秒) |
//!
//! # 示例
//!
//! ```ignore
//! DATA_DIR=/data/mandi VERIFICATION_DELAY_MS=100 cargo test
//! ```

use std::ops::RangeInclusive;
use std::time::Duration;

/// Service configuration
///
/// Delays are injectable so tests run on millisecond clocks instead of the
/// demo's human-scale waits.
#[derive(Debug, Clone)]
pub struct Config {
    /// 数据目录，存储 redb 数据文件
    pub data_dir: String,
    /// 固定运费
    pub flat_shipping_fee: f64,
    /// 免运费起送金额（严格大于该值免运费）
    pub free_shipping_threshold: f64,
    /// 注册审核自动通过延迟
    pub verification_delay: Duration,
    /// 审核状态轮询间隔
    pub verification_poll_interval: Duration,
    /// 消费者订单配送天数区间
    pub consumer_delivery_days: RangeInclusive<i64>,
    /// 农户直采订单配送天数区间
    pub direct_delivery_days: RangeInclusive<i64>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "/var/lib/mandi".into()),
            flat_shipping_fee: std::env::var("FLAT_SHIPPING_FEE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50.0),
            free_shipping_threshold: std::env::var("FREE_SHIPPING_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500.0),
            verification_delay: Duration::from_millis(
                std::env::var("VERIFICATION_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(2000),
            ),
            verification_poll_interval: Duration::from_millis(
                std::env::var("VERIFICATION_POLL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(500),
            ),
            consumer_delivery_days: 3..=5,
            direct_delivery_days: 5..=7,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(data_dir: impl Into<String>, verification_delay: Duration) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.verification_delay = verification_delay;
        config.verification_poll_interval = verification_delay / 4;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.flat_shipping_fee, 50.0);
        assert_eq!(config.free_shipping_threshold, 500.0);
        assert_eq!(config.consumer_delivery_days, 3..=5);
        assert_eq!(config.direct_delivery_days, 5..=7);
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("/tmp/mandi-test", Duration::from_millis(40));
        assert_eq!(config.data_dir, "/tmp/mandi-test");
        assert_eq!(config.verification_delay, Duration::from_millis(40));
        assert_eq!(config.verification_poll_interval, Duration::from_millis(10));
    }
}

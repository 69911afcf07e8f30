//! 配置数据结构定义
//!
//! 定义应用程序的配置结构体、检测目标推导和验证逻辑

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// 默认后端基础URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// 默认前端基础URL
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// 默认请求超时时间（毫秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// 主配置结构，进程启动时构建一次，之后只读
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// 后端基础URL
    pub backend_url: String,
    /// 前端基础URL
    pub frontend_url: String,
    /// 请求超时时间（毫秒）
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

// 默认值函数
fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// 从环境变量构建配置
    ///
    /// 读取 `BACKEND_URL` 和 `FRONTEND_URL`（需为包含scheme的完整基础URL），
    /// 未设置时使用默认值
    pub fn from_env() -> Self {
        Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// 请求超时时间
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// 推导检测目标列表
    ///
    /// 目标顺序固定：后端健康端点、后端根路径、前端首页
    pub fn targets(&self) -> Vec<CheckTarget> {
        let backend = self.backend_url.trim_end_matches('/');
        let frontend = self.frontend_url.trim_end_matches('/');

        vec![
            CheckTarget::new("Backend Health", format!("{backend}/health")),
            CheckTarget::new("Backend Root", backend),
            CheckTarget::new("Frontend", frontend),
        ]
    }
}

/// 单个检测目标
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckTarget {
    /// 目标名称
    pub name: String,
    /// 目标URL
    pub url: String,
}

impl CheckTarget {
    /// 创建新的检测目标
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// 配置验证函数
///
/// # 参数
/// * `config` - 要验证的配置
///
/// # 返回
/// * `Result<(), ConfigError>` - 验证结果，错误时返回错误信息
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.timeout_ms == 0 {
        return Err(ConfigError::ValidationError(
            "请求超时时间不能为0".to_string(),
        ));
    }

    for (label, url) in [
        ("backend_url", &config.backend_url),
        ("frontend_url", &config.frontend_url),
    ] {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "{label} 的URL格式无效: {url}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.backend_url, "http://localhost:5000");
        assert_eq!(config.frontend_url, "http://localhost:5173");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::remove_var("BACKEND_URL");
        env::remove_var("FRONTEND_URL");

        let config = Config::from_env();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var("BACKEND_URL", "https://api.example.com");
        env::set_var("FRONTEND_URL", "https://app.example.com");

        let config = Config::from_env();
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.frontend_url, "https://app.example.com");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);

        env::remove_var("BACKEND_URL");
        env::remove_var("FRONTEND_URL");
    }

    #[test]
    fn test_targets_derivation() {
        let config = Config::default();
        let targets = config.targets();

        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].name, "Backend Health");
        assert_eq!(targets[0].url, "http://localhost:5000/health");
        assert_eq!(targets[1].name, "Backend Root");
        assert_eq!(targets[1].url, "http://localhost:5000");
        assert_eq!(targets[2].name, "Frontend");
        assert_eq!(targets[2].url, "http://localhost:5173");
    }

    #[test]
    fn test_targets_trailing_slash() {
        let config = Config {
            backend_url: "http://localhost:5000/".to_string(),
            ..Config::default()
        };

        let targets = config.targets();
        assert_eq!(targets[0].url, "http://localhost:5000/health");
        assert_eq!(targets[1].url, "http://localhost:5000");
    }

    #[test]
    fn test_config_validation() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = Config {
            timeout_ms: 0,
            ..Config::default()
        };

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("超时时间不能为0"));
    }

    #[test]
    fn test_config_validation_invalid_url() {
        let config = Config {
            backend_url: "localhost:5000".to_string(),
            ..Config::default()
        };

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("URL格式无效"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).expect("序列化失败");
        let deserialized: Config = serde_json::from_str(&serialized).expect("反序列化失败");
        assert_eq!(config, deserialized);
    }
}

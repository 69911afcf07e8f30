//! 错误处理模块
//!
//! 定义应用程序的统一错误类型

use thiserror::Error;

/// Stack Vitals 应用程序的主要错误类型
#[derive(Error, Debug)]
pub enum StackVitalsError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 健康检测相关错误
    #[error("健康检测错误: {0}")]
    HealthCheck(#[from] HealthCheckError),

    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON序列化/反序列化错误
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 其他错误
    #[error("其他错误: {0}")]
    Other(#[from] anyhow::Error),
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 配置验证错误
    #[error("配置验证失败: {0}")]
    ValidationError(String),
}

/// 健康检测错误类型
#[derive(Error, Debug)]
pub enum HealthCheckError {
    /// HTTP客户端构建失败
    #[error("HTTP客户端构建失败: {0}")]
    ClientError(#[from] reqwest::Error),
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, StackVitalsError>;

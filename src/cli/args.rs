//! 命令行参数定义
//!
//! 使用clap定义应用程序的命令行接口

use crate::config::{self, Config};
use clap::{Parser, ValueEnum};

/// Stack Vitals - 前后端服务健康探测工具
#[derive(Parser, Debug, Clone)]
#[command(
    name = "stack-vitals",
    version = crate::VERSION,
    about = crate::APP_DESCRIPTION,
    long_about = None
)]
pub struct Args {
    /// 后端基础URL
    #[arg(
        long,
        value_name = "URL",
        help = "后端基础URL（包含scheme）",
        env = "BACKEND_URL",
        default_value = config::DEFAULT_BACKEND_URL
    )]
    pub backend_url: String,

    /// 前端基础URL
    #[arg(
        long,
        value_name = "URL",
        help = "前端基础URL（包含scheme）",
        env = "FRONTEND_URL",
        default_value = config::DEFAULT_FRONTEND_URL
    )]
    pub frontend_url: String,

    /// 请求超时时间（毫秒）
    #[arg(
        short,
        long,
        value_name = "MILLISECONDS",
        help = "请求超时时间（毫秒）",
        default_value_t = config::DEFAULT_TIMEOUT_MS
    )]
    pub timeout_ms: u64,

    /// 输出格式
    #[arg(short, long, value_enum, default_value = "text", help = "输出格式")]
    pub format: OutputFormat,

    /// 日志级别
    #[arg(
        short,
        long,
        value_enum,
        default_value = "info",
        help = "日志级别",
        env = "STACK_VITALS_LOG_LEVEL"
    )]
    pub log_level: LogLevel,
}

impl Args {
    /// 从命令行参数构建配置
    pub fn to_config(&self) -> Config {
        Config {
            backend_url: self.backend_url.clone(),
            frontend_url: self.frontend_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

/// 日志级别枚举
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum LogLevel {
    /// 调试级别
    Debug,
    /// 信息级别
    Info,
    /// 警告级别
    Warn,
    /// 错误级别
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// 输出格式枚举
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    /// 文本格式
    Text,
    /// JSON格式
    Json,
}

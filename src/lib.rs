//! Stack Vitals - 前后端服务健康探测工具
//!
//! 这是一个用Rust编写的轻量级HTTP健康探测工具，支持：
//! - HTTP/HTTPS健康检测
//! - 基于环境变量的目标配置
//! - 文本/JSON两种输出格式
//! - 结构化日志记录

pub mod cli;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;

// 重新导出主要类型
pub use config::{CheckTarget, Config};
pub use error::StackVitalsError;
pub use health::{HealthChecker, HealthReport, HealthResult, HealthStatus, HttpHealthChecker};

/// 应用程序版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 应用程序名称
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// 应用程序描述
pub const APP_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

//! 配置管理模块
//!
//! 提供配置构建、验证和检测目标推导功能

pub mod types;

// 重新导出主要类型
pub use types::{
    validate_config, CheckTarget, Config, DEFAULT_BACKEND_URL, DEFAULT_FRONTEND_URL,
    DEFAULT_TIMEOUT_MS,
};

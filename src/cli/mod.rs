//! 命令行接口模块
//!
//! 定义命令行参数解析

pub mod args;

// 重新导出主要类型
pub use args::{Args, LogLevel, OutputFormat};

//! 日志系统模块
//!
//! 提供结构化日志配置和初始化功能

use crate::error::Result;
use anyhow::Context;
use log::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// 日志配置结构
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志级别
    pub level: LevelFilter,
    /// 是否输出到控制台
    pub console: bool,
    /// 是否使用JSON格式
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            console: true,
            json_format: false,
        }
    }
}

/// 初始化日志系统
///
/// 日志全部写入stderr，stdout只保留检测报告输出。
/// 环境变量 `RUST_LOG` 存在时优先于配置的日志级别。
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if !config.console {
        return Ok(());
    }

    // 桥接log宏的输出到tracing
    tracing_log::LogTracer::init().context("初始化log桥接失败")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    if config.json_format {
        registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .context("初始化日志订阅器失败")?;
    } else {
        registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("初始化日志订阅器失败")?;
    }

    Ok(())
}

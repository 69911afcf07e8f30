//! Stack Vitals 主程序入口
//!
//! 前后端服务健康探测工具

use anyhow::{Context, Result};
use clap::Parser;
use stack_vitals::cli::args::{Args, OutputFormat};
use stack_vitals::config::validate_config;
use stack_vitals::health::{run_all, HealthChecker, HealthReport, HttpHealthChecker};
use stack_vitals::logging::{init_logging, LogConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // 解析命令行参数
    let args = Args::parse();

    // 初始化日志系统
    let log_config = LogConfig {
        level: args.log_level.clone().into(),
        ..Default::default()
    };

    if let Err(e) = init_logging(&log_config) {
        eprintln!("初始化日志系统失败: {e}");
        std::process::exit(1);
    }

    match run(&args).await {
        Ok(report) => {
            // 任一目标异常时以非零码退出
            if !report.all_healthy() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            // 编排层故障必须上报，绝不静默吞掉
            error!("健康检测执行失败: {e:#}");
            std::process::exit(1);
        }
    }
}

/// 执行一次完整的健康检测流程
async fn run(args: &Args) -> Result<HealthReport> {
    let config = args.to_config();
    validate_config(&config)?;

    info!(
        "Stack Vitals v{} 启动，超时时间: {}ms",
        stack_vitals::VERSION,
        config.timeout_ms
    );

    let checker = HttpHealthChecker::new(config.timeout()).context("创建HTTP健康检测器失败")?;
    let targets = config.targets();

    let report = match args.format {
        OutputFormat::Json => {
            let results = checker.check_all(&targets).await;
            let report = HealthReport::from_results(results);
            println!("{}", serde_json::to_string_pretty(&report)?);
            report
        }
        OutputFormat::Text => run_all(&checker, &targets).await,
    };

    Ok(report)
}

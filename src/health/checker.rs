//! HTTP健康检测器实现
//!
//! 提供HTTP健康检测功能，支持按请求独立的超时处理和并发批量检测

use crate::config::CheckTarget;
use crate::error::{HealthCheckError, Result};
use crate::health::result::{HealthResult, HealthStatus};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::debug;

/// 健康检测器trait，定义检测接口
#[async_trait]
pub trait HealthChecker: Send + Sync {
    /// 执行单个目标的健康检测
    ///
    /// # 参数
    /// * `target` - 检测目标
    ///
    /// # 返回
    /// * `HealthResult` - 检测结果，单个目标的失败不会上抛为错误
    async fn check(&self, target: &CheckTarget) -> HealthResult;

    /// 带超时的健康检测
    ///
    /// # 参数
    /// * `target` - 检测目标
    /// * `timeout_duration` - 超时时间
    ///
    /// # 返回
    /// * `HealthResult` - 检测结果
    async fn check_with_timeout(
        &self,
        target: &CheckTarget,
        timeout_duration: Duration,
    ) -> HealthResult;

    /// 批量健康检测
    ///
    /// 并发执行所有检测，结果顺序与目标顺序一致
    ///
    /// # 参数
    /// * `targets` - 检测目标列表
    ///
    /// # 返回
    /// * `Vec<HealthResult>` - 检测结果列表
    async fn check_all(&self, targets: &[CheckTarget]) -> Vec<HealthResult>;
}

/// HTTP健康检测器实现
///
/// 重定向处理沿用reqwest对GET请求的默认策略（最多跟随10次）
pub struct HttpHealthChecker {
    /// HTTP客户端
    client: Client,
    /// 默认超时时间
    default_timeout: Duration,
}

impl HttpHealthChecker {
    /// 创建新的HTTP健康检测器
    ///
    /// # 参数
    /// * `timeout` - 默认超时时间
    ///
    /// # 返回
    /// * `Result<Self>` - 检测器实例
    pub fn new(timeout: Duration) -> Result<Self> {
        // 超时由每次请求外层的tokio定时器统一控制，客户端本身不设超时
        let client = Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()
            .map_err(HealthCheckError::ClientError)?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// 执行单次HTTP请求并归类结果
    async fn perform_request(
        &self,
        target: &CheckTarget,
        timeout_duration: Duration,
    ) -> HealthResult {
        // 超时时钟从请求发出前开始计时，各目标互不影响
        let start_time = Instant::now();
        let response_result = timeout(timeout_duration, self.client.get(&target.url).send()).await;
        let response_time = start_time.elapsed();

        match response_result {
            Ok(Ok(response)) => {
                let status_code = response.status().as_u16();

                // [200, 300) 视为健康
                if response.status().is_success() {
                    HealthResult::new(target.name.clone(), target.url.clone(), HealthStatus::Up)
                        .with_status_code(status_code)
                        .with_response_time(response_time)
                } else {
                    HealthResult::new(target.name.clone(), target.url.clone(), HealthStatus::Down)
                        .with_status_code(status_code)
                        .with_response_time(response_time)
                        .with_error(format!("HTTP {status_code}"))
                }
            }
            Ok(Err(e)) => {
                HealthResult::new(target.name.clone(), target.url.clone(), HealthStatus::Down)
                    .with_response_time(response_time)
                    .with_error(format_request_error(&e))
            }
            Err(_) => {
                // 超时后in-flight请求随future一起被丢弃
                HealthResult::new(target.name.clone(), target.url.clone(), HealthStatus::Down)
                    .with_response_time(response_time)
                    .with_error("Request timeout".to_string())
            }
        }
    }
}

#[async_trait]
impl HealthChecker for HttpHealthChecker {
    async fn check(&self, target: &CheckTarget) -> HealthResult {
        self.check_with_timeout(target, self.default_timeout).await
    }

    async fn check_with_timeout(
        &self,
        target: &CheckTarget,
        timeout_duration: Duration,
    ) -> HealthResult {
        let result = self.perform_request(target, timeout_duration).await;

        debug!(
            name = %result.name,
            status = %result.status,
            response_time_ms = result.response_time_ms(),
            "健康检测完成"
        );

        result
    }

    async fn check_all(&self, targets: &[CheckTarget]) -> Vec<HealthResult> {
        // join_all保持结果顺序与输入顺序一致，各请求的超时时钟互相独立
        let futures = targets.iter().map(|target| self.check(target));
        futures::future::join_all(futures).await
    }
}

/// 格式化请求错误信息，使其更加清晰易读
fn format_request_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else if error.is_request() {
        "Invalid request".to_string()
    } else {
        let error_str = error.to_string();
        if error_str.contains("dns") || error_str.contains("DNS") {
            "DNS resolution failed".to_string()
        } else if error_str.contains("certificate")
            || error_str.contains("tls")
            || error_str.contains("ssl")
        {
            "SSL/TLS certificate error".to_string()
        } else {
            format!("Request failed: {error_str}")
        }
    }
}

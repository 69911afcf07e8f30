//! 检测报告聚合与输出
//!
//! 将单次运行的所有检测结果汇总为整体健康报告

use crate::config::CheckTarget;
use crate::health::checker::HealthChecker;
use crate::health::result::HealthResult;
use serde::{Deserialize, Serialize};

/// 单次运行的整体健康报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// 所有检测结果，顺序与目标顺序一致
    pub results: Vec<HealthResult>,
    /// 健康目标数量
    pub healthy_count: usize,
    /// 目标总数
    pub total_count: usize,
}

impl HealthReport {
    /// 从检测结果构建报告
    pub fn from_results(results: Vec<HealthResult>) -> Self {
        let healthy_count = results.iter().filter(|r| r.status.is_healthy()).count();
        let total_count = results.len();

        Self {
            results,
            healthy_count,
            total_count,
        }
    }

    /// 是否所有目标都健康（空目标列表视为全部健康）
    pub fn all_healthy(&self) -> bool {
        self.healthy_count == self.total_count
    }

    /// 生成汇总文本
    pub fn summary(&self) -> String {
        format!(
            "{}/{} services healthy",
            self.healthy_count, self.total_count
        )
    }
}

/// 对所有目标执行一次健康检测并打印文本报告
///
/// 逐行输出各目标的检测结果（顺序与目标顺序一致），最后输出汇总行。
/// 本函数只返回报告，不触发进程退出，退出码由调用方决定。
pub async fn run_all(checker: &dyn HealthChecker, targets: &[CheckTarget]) -> HealthReport {
    println!("🔍 Running health checks...");

    let results = checker.check_all(targets).await;
    for result in &results {
        println!("{}", result.summary_line());
    }

    let report = HealthReport::from_results(results);
    println!("\n📊 Overall Health: {}", report.summary());

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::result::HealthStatus;
    use async_trait::async_trait;
    use std::time::Duration;

    /// 返回预设结果的检测器，用于隔离网络
    struct StaticChecker;

    #[async_trait]
    impl HealthChecker for StaticChecker {
        async fn check(&self, target: &CheckTarget) -> HealthResult {
            if target.url.contains("bad") {
                HealthResult::new(target.name.clone(), target.url.clone(), HealthStatus::Down)
                    .with_status_code(503)
                    .with_error("HTTP 503".to_string())
            } else {
                HealthResult::new(target.name.clone(), target.url.clone(), HealthStatus::Up)
                    .with_status_code(200)
                    .with_response_time(Duration::from_millis(5))
            }
        }

        async fn check_with_timeout(
            &self,
            target: &CheckTarget,
            _timeout_duration: Duration,
        ) -> HealthResult {
            self.check(target).await
        }

        async fn check_all(&self, targets: &[CheckTarget]) -> Vec<HealthResult> {
            let futures = targets.iter().map(|target| self.check(target));
            futures::future::join_all(futures).await
        }
    }

    fn result(name: &str, status: HealthStatus) -> HealthResult {
        HealthResult::new(name.to_string(), format!("http://example.com/{name}"), status)
    }

    #[test]
    fn test_report_counts() {
        let report = HealthReport::from_results(vec![
            result("a", HealthStatus::Up),
            result("b", HealthStatus::Down),
            result("c", HealthStatus::Up),
        ]);

        assert_eq!(report.healthy_count, 2);
        assert_eq!(report.total_count, 3);
        assert!(!report.all_healthy());
        assert_eq!(report.summary(), "2/3 services healthy");
    }

    #[test]
    fn test_report_all_healthy() {
        let report = HealthReport::from_results(vec![
            result("a", HealthStatus::Up),
            result("b", HealthStatus::Up),
            result("c", HealthStatus::Up),
        ]);

        assert!(report.all_healthy());
        assert_eq!(report.summary(), "3/3 services healthy");
    }

    #[test]
    fn test_report_empty_is_vacuously_healthy() {
        let report = HealthReport::from_results(vec![]);

        assert!(report.all_healthy());
        assert_eq!(report.summary(), "0/0 services healthy");
    }

    #[tokio::test]
    async fn test_run_all_returns_ordered_results() {
        let targets = vec![
            CheckTarget::new("Backend Health", "http://example.com/health"),
            CheckTarget::new("Backend Root", "http://example.com/bad"),
            CheckTarget::new("Frontend", "http://example.com/"),
        ];

        let report = run_all(&StaticChecker, &targets).await;

        assert_eq!(report.total_count, 3);
        assert_eq!(report.healthy_count, 2);
        assert!(!report.all_healthy());
        assert_eq!(report.results[0].name, "Backend Health");
        assert_eq!(report.results[1].name, "Backend Root");
        assert_eq!(report.results[1].error_message, Some("HTTP 503".to_string()));
        assert_eq!(report.results[2].name, "Frontend");
    }

    #[test]
    fn test_report_serialization() {
        let report = HealthReport::from_results(vec![result("a", HealthStatus::Up)]);

        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("healthy_count"));

        let deserialized: HealthReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.total_count, 1);
        assert!(deserialized.all_healthy());
    }
}

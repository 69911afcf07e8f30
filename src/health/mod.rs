//! 健康检测模块
//!
//! 提供HTTP健康检测、结果处理和报告聚合功能

pub mod checker;
pub mod report;
pub mod result;

// 重新导出主要类型
pub use checker::{HealthChecker, HttpHealthChecker};
pub use report::{run_all, HealthReport};
pub use result::{HealthResult, HealthStatus};

//! 健康检测结果数据结构
//!
//! 定义健康检测的结果类型和状态枚举

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// 健康状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// 服务正常
    #[serde(rename = "healthy")]
    Up,
    /// 服务异常
    #[serde(rename = "unhealthy")]
    Down,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Up => write!(f, "healthy"),
            HealthStatus::Down => write!(f, "unhealthy"),
        }
    }
}

impl HealthStatus {
    /// 判断状态是否为健康
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Up)
    }
}

/// 健康检测结果
///
/// 每次运行中每个目标恰好产生一条结果，创建后不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResult {
    /// 检测ID
    pub id: Uuid,
    /// 目标名称
    pub name: String,
    /// 目标URL
    pub url: String,
    /// 检测时间戳
    pub checked_at: DateTime<Utc>,
    /// 健康状态
    pub status: HealthStatus,
    /// HTTP状态码（如果适用）
    pub status_code: Option<u16>,
    /// 响应时间
    #[serde(with = "duration_serde")]
    pub response_time: Duration,
    /// 错误信息（如果有）
    pub error_message: Option<String>,
}

impl HealthResult {
    /// 创建新的健康检测结果
    ///
    /// # 参数
    /// * `name` - 目标名称
    /// * `url` - 目标URL
    /// * `status` - 健康状态
    ///
    /// # 返回
    /// * `Self` - 健康检测结果实例
    pub fn new(name: String, url: String, status: HealthStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            url,
            checked_at: Utc::now(),
            status,
            status_code: None,
            response_time: Duration::from_millis(0),
            error_message: None,
        }
    }

    /// 设置HTTP状态码
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// 设置响应时间
    pub fn with_response_time(mut self, response_time: Duration) -> Self {
        self.response_time = response_time;
        self
    }

    /// 设置错误信息
    pub fn with_error(mut self, error_message: String) -> Self {
        self.error_message = Some(error_message);
        self
    }

    /// 获取响应时间（毫秒）
    pub fn response_time_ms(&self) -> u64 {
        self.response_time.as_millis() as u64
    }

    /// 生成单行文本报告
    pub fn summary_line(&self) -> String {
        if self.status.is_healthy() {
            format!(
                "✅ {}: {} ({}ms)",
                self.name,
                self.status,
                self.response_time_ms()
            )
        } else {
            format!(
                "❌ {}: {} - {}",
                self.name,
                self.status,
                self.error_message.as_deref().unwrap_or("unknown error")
            )
        }
    }

    /// 转换为JSON字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从JSON字符串创建
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Duration序列化模块
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

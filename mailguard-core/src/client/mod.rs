//! 管理后台 HTTP 客户端
//!
//! 基于 reqwest 的 [`AdminApi`](crate::traits::AdminApi) 实现。

mod api;
mod endpoints;
mod http;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::{CoreError, CoreResult};

pub use endpoints::Endpoint;

/// 默认 API 根地址
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api/v1/admin";
/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 客户端配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API 根地址（不含末尾 `/`）
    pub base_url: String,
    /// 单次请求超时
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// 管理后台 HTTP 客户端
pub struct HttpAdminClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl HttpAdminClient {
    /// 创建带超时配置的客户端
    pub fn new(config: &ClientConfig) -> CoreResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::NetworkError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 拼接完整 URL
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

//! HTTP 请求方法

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CoreResult;
use crate::http_client::HttpUtils;
use crate::types::Session;

use super::{Endpoint, HttpAdminClient};

impl HttpAdminClient {
    /// 发送请求并返回 2xx 响应文本
    ///
    /// * `session` - 为 `Some` 时附带 `Authorization: Bearer` 头
    /// * `query` - 查询参数
    /// * `body` - JSON 请求体
    pub(crate) async fn send<B: Serialize + Sync>(
        &self,
        endpoint: &Endpoint,
        session: Option<&Session>,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> CoreResult<String> {
        let url = self.url(&endpoint.path);
        let mut request = self.client.request(endpoint.method.clone(), &url);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(session) = session {
            request = request.header(reqwest::header::AUTHORIZATION, session.bearer());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let (status, text) =
            HttpUtils::execute_request(request, endpoint.method.as_str(), &endpoint.path).await?;
        HttpUtils::ensure_success(status, text)
    }

    /// 发送请求并解析 JSON 响应
    pub(crate) async fn send_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        session: Option<&Session>,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> CoreResult<T> {
        let text = self.send(endpoint, session, query, body).await?;
        HttpUtils::parse_json(&text)
    }
}

//! 管理后台 API 抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{ListPage, ListQuery, ResourceKind, ResourceRow, Session, ValidationReport};

/// 管理后台 REST API
///
/// 实现:
/// - `HttpAdminClient` (reqwest)
/// - 测试: `MockAdminApi` (内存)
///
/// 除 `validate_email` 与 `login` 外，所有调用都显式接收 `&Session`，
/// 不存在全局 token 查找。
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// 登录，返回未经守卫检查的会话
    async fn login(&self, email: &str, password: &str) -> CoreResult<Session>;

    /// 分页查询某个资源集合
    ///
    /// # Arguments
    /// * `session` - 当前会话
    /// * `kind` - 资源类型
    /// * `query` - 页码 / 每页条数 / 搜索词
    async fn list(
        &self,
        session: &Session,
        kind: ResourceKind,
        query: &ListQuery,
    ) -> CoreResult<ListPage<ResourceRow>>;

    /// 批量添加（`ValidEmails` 返回 `Unsupported`）
    async fn add(&self, session: &Session, kind: ResourceKind, values: &[String]) -> CoreResult<()>;

    /// 修改单条记录
    async fn update(
        &self,
        session: &Session,
        kind: ResourceKind,
        id: &str,
        value: &str,
    ) -> CoreResult<()>;

    /// 删除单条记录
    async fn delete(&self, session: &Session, kind: ResourceKind, id: &str) -> CoreResult<()>;

    /// 公开的邮箱校验接口（不携带认证头）
    async fn validate_email(&self, email: &str) -> CoreResult<ValidationReport>;
}

//! 规范端点表
//!
//! 每个操作只对应一个路径，大小写与后端路由保持一致
//! （`getBlacklisted*` / `addBlacklisted*` / `*BlackListed*` 混用是后端的真实命名）。

use reqwest::Method;

use crate::error::{CoreError, CoreResult};
use crate::types::ResourceKind;

/// 一个已解析的端点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// 分页列表
    pub fn list(kind: ResourceKind) -> Self {
        let path = match kind {
            ResourceKind::ValidEmails => "/getValidEmails",
            ResourceKind::BlacklistedDomains => "/getBlacklistedDomains",
            ResourceKind::BlacklistedEmails => "/getBlacklistedEmail",
        };
        Self::new(Method::GET, path)
    }

    /// 批量添加
    pub fn add(kind: ResourceKind) -> CoreResult<Self> {
        match kind {
            ResourceKind::BlacklistedDomains => Ok(Self::new(Method::POST, "/addBlacklistedDomain")),
            ResourceKind::BlacklistedEmails => Ok(Self::new(Method::POST, "/addBlacklistedEmail")),
            ResourceKind::ValidEmails => Err(read_only(kind, "add")),
        }
    }

    /// 修改单条
    pub fn update(kind: ResourceKind, id: &str) -> CoreResult<Self> {
        let prefix = match kind {
            ResourceKind::BlacklistedDomains => "/updateBlackListedDomain",
            ResourceKind::BlacklistedEmails => "/updateBlackListedEmail",
            ResourceKind::ValidEmails => return Err(read_only(kind, "update")),
        };
        Ok(Self::new(Method::PUT, with_id(prefix, id)))
    }

    /// 删除单条
    pub fn delete(kind: ResourceKind, id: &str) -> CoreResult<Self> {
        let prefix = match kind {
            ResourceKind::BlacklistedDomains => "/deleteBlackListedDomain",
            ResourceKind::BlacklistedEmails => "/deleteBlackListedEmail",
            ResourceKind::ValidEmails => return Err(read_only(kind, "delete")),
        };
        Ok(Self::new(Method::DELETE, with_id(prefix, id)))
    }

    /// 公开邮箱校验
    pub fn validate() -> Self {
        Self::new(Method::POST, "/emailvalidator")
    }

    /// 登录
    pub fn login() -> Self {
        Self::new(Method::POST, "/login")
    }
}

fn with_id(prefix: &str, id: &str) -> String {
    format!("{prefix}/{}", urlencoding::encode(id))
}

fn read_only(kind: ResourceKind, op: &str) -> CoreError {
    CoreError::Unsupported(format!("{op} is not available for {kind:?}"))
}

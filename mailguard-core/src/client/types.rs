//! 管理后台 API 请求 / 响应结构

use serde::{Deserialize, Serialize};

use crate::types::{PaginationMeta, User};

/// 列表响应 `{status, data, pagination}`
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub pagination: Option<PaginationMeta>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DomainEntry<'a> {
    pub domain: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmailEntry<'a> {
    pub email: &'a str,
}

/// `POST /addBlacklistedDomain` 请求体
#[derive(Debug, Serialize)]
pub(crate) struct AddDomainsBody<'a> {
    pub domains: Vec<DomainEntry<'a>>,
}

/// `POST /addBlacklistedEmail` 请求体
#[derive(Debug, Serialize)]
pub(crate) struct AddEmailsBody<'a> {
    pub emails: Vec<EmailEntry<'a>>,
}

/// `POST /login` 请求体
#[derive(Debug, Serialize)]
pub(crate) struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /login` 响应
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
    pub user: User,
}

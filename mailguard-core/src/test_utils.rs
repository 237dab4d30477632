//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{AdminApi, SessionStore};
use crate::types::{
    ListPage, ListQuery, PaginationMeta, ResourceKind, ResourceRow, Role, Session, User,
    ValidationReport,
};

// ===== MockAdminApi =====

/// 记录下来的 API 调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List { kind: ResourceKind, query: ListQuery },
    Add { kind: ResourceKind, values: Vec<String> },
    Update { kind: ResourceKind, id: String, value: String },
    Delete { kind: ResourceKind, id: String },
    Validate(String),
    Login(String),
}

/// 内存版管理后台：服务端分页 + 子串搜索
pub struct MockAdminApi {
    rows: RwLock<HashMap<ResourceKind, Vec<ResourceRow>>>,
    users: RwLock<HashMap<String, (String, Role)>>,
    reports: RwLock<HashMap<String, ValidationReport>>,
    calls: RwLock<Vec<ApiCall>>,
    /// 如果 Some，对应操作返回此错误
    list_error: RwLock<Option<CoreError>>,
    add_error: RwLock<Option<CoreError>>,
    update_error: RwLock<Option<CoreError>>,
    delete_error: RwLock<Option<CoreError>>,
}

impl MockAdminApi {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            users: RwLock::new(HashMap::new()),
            reports: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
            list_error: RwLock::new(None),
            add_error: RwLock::new(None),
            update_error: RwLock::new(None),
            delete_error: RwLock::new(None),
        }
    }

    /// 追加记录，返回生成的 id
    pub async fn seed(&self, kind: ResourceKind, values: &[&str]) -> Vec<String> {
        let mut rows = self.rows.write().await;
        let list = rows.entry(kind).or_default();
        values
            .iter()
            .map(|value| {
                let id = uuid::Uuid::new_v4().to_string();
                list.push(ResourceRow {
                    id: id.clone(),
                    value: (*value).to_string(),
                    created_at: Utc::now(),
                    detail: None,
                });
                id
            })
            .collect()
    }

    pub async fn rows(&self, kind: ResourceKind) -> Vec<ResourceRow> {
        self.rows.read().await.get(&kind).cloned().unwrap_or_default()
    }

    pub async fn count(&self, kind: ResourceKind) -> usize {
        self.rows.read().await.get(&kind).map_or(0, Vec::len)
    }

    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.read().await.clone()
    }

    pub async fn add_user(&self, email: &str, password: &str, role: Role) {
        self.users
            .write()
            .await
            .insert(email.to_string(), (password.to_string(), role));
    }

    pub async fn set_report(&self, email: &str, report: ValidationReport) {
        self.reports.write().await.insert(email.to_string(), report);
    }

    pub async fn set_list_error(&self, err: Option<CoreError>) {
        *self.list_error.write().await = err;
    }

    pub async fn set_add_error(&self, err: Option<CoreError>) {
        *self.add_error.write().await = err;
    }

    pub async fn set_update_error(&self, err: Option<CoreError>) {
        *self.update_error.write().await = err;
    }

    pub async fn set_delete_error(&self, err: Option<CoreError>) {
        *self.delete_error.write().await = err;
    }

    async fn record(&self, call: ApiCall) {
        self.calls.write().await.push(call);
    }

    async fn injected(slot: &RwLock<Option<CoreError>>) -> CoreResult<()> {
        match slot.read().await.as_ref() {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AdminApi for MockAdminApi {
    async fn login(&self, email: &str, password: &str) -> CoreResult<Session> {
        self.record(ApiCall::Login(email.to_string())).await;
        match self.users.read().await.get(email) {
            Some((expected, role)) if expected == password => Ok(Session {
                user: User {
                    id: format!("user-{email}"),
                    email: email.to_string(),
                    role: *role,
                },
                token: format!("token-{email}"),
            }),
            _ => Err(CoreError::Unauthorized("Invalid email or password".into())),
        }
    }

    async fn list(
        &self,
        _session: &Session,
        kind: ResourceKind,
        query: &ListQuery,
    ) -> CoreResult<ListPage<ResourceRow>> {
        self.record(ApiCall::List {
            kind,
            query: query.clone(),
        })
        .await;
        Self::injected(&self.list_error).await?;

        let matching: Vec<ResourceRow> = self
            .rows(kind)
            .await
            .into_iter()
            .filter(|row| {
                query
                    .search
                    .as_deref()
                    .map_or(true, |term| row.value.contains(term))
            })
            .collect();

        let limit = query.limit.max(1);
        let total_items = u32::try_from(matching.len()).unwrap_or(u32::MAX);
        let skip = ((query.page.max(1) - 1) * limit) as usize;
        let items = matching.into_iter().skip(skip).take(limit as usize).collect();

        Ok(ListPage {
            items,
            pagination: PaginationMeta {
                total_items,
                total_pages: total_items.div_ceil(limit),
                current_page: query.page,
                items_per_page: limit,
            },
        })
    }

    async fn add(&self, _session: &Session, kind: ResourceKind, values: &[String]) -> CoreResult<()> {
        self.record(ApiCall::Add {
            kind,
            values: values.to_vec(),
        })
        .await;
        Self::injected(&self.add_error).await?;
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        self.seed(kind, &refs).await;
        Ok(())
    }

    async fn update(
        &self,
        _session: &Session,
        kind: ResourceKind,
        id: &str,
        value: &str,
    ) -> CoreResult<()> {
        self.record(ApiCall::Update {
            kind,
            id: id.to_string(),
            value: value.to_string(),
        })
        .await;
        Self::injected(&self.update_error).await?;
        let mut rows = self.rows.write().await;
        let row = rows
            .get_mut(&kind)
            .and_then(|list| list.iter_mut().find(|r| r.id == id))
            .ok_or_else(|| CoreError::HttpStatus {
                status: 404,
                body: "Not found".into(),
            })?;
        row.value = value.to_string();
        Ok(())
    }

    async fn delete(&self, _session: &Session, kind: ResourceKind, id: &str) -> CoreResult<()> {
        self.record(ApiCall::Delete {
            kind,
            id: id.to_string(),
        })
        .await;
        Self::injected(&self.delete_error).await?;
        if let Some(list) = self.rows.write().await.get_mut(&kind) {
            list.retain(|r| r.id != id);
        }
        Ok(())
    }

    async fn validate_email(&self, email: &str) -> CoreResult<ValidationReport> {
        self.record(ApiCall::Validate(email.to_string())).await;
        Ok(self
            .reports
            .read()
            .await
            .get(email)
            .cloned()
            .unwrap_or_else(|| ValidationReport {
                result: "unknown".into(),
                email: email.to_string(),
                ..ValidationReport::default()
            }))
    }
}

// ===== MockSessionStore =====

pub struct MockSessionStore {
    session: RwLock<Option<Session>>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn load(&self) -> CoreResult<Option<Session>> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &Session) -> CoreResult<()> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        *self.session.write().await = None;
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 基于给定 mock API 的服务上下文
pub fn create_test_context(api: Arc<MockAdminApi>) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(api, Arc::new(MockSessionStore::new())))
}

/// 已通过守卫检查的管理员会话
pub fn admin_session() -> Session {
    Session {
        user: User {
            id: "admin-1".into(),
            email: "admin@mailguard.dev".into(),
            role: Role::Admin,
        },
        token: "test-token".into(),
    }
}

/// 一条表格行
pub fn row(id: &str, value: &str) -> ResourceRow {
    ResourceRow {
        id: id.into(),
        value: value.into(),
        created_at: Utc::now(),
        detail: None,
    }
}

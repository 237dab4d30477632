//! Dashboard 变更服务

use std::sync::Arc;

use crate::services::ServiceContext;
use crate::types::{Notification, ResourceRow, Session};

use super::dashboard::Mutation;
use super::refresh::RefreshSignal;

/// 执行表单变更并通知资源表刷新
pub struct DashboardService {
    ctx: Arc<ServiceContext>,
    refresh: RefreshSignal,
}

impl DashboardService {
    /// 创建服务实例
    ///
    /// `refresh` 应为 Dashboard 持有的同一个信号。
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, refresh: RefreshSignal) -> Self {
        Self { ctx, refresh }
    }

    /// 执行变更；成功后触发对应资源表刷新
    ///
    /// 失败只返回错误提示，列表保持不变。
    pub async fn apply(&self, session: &Session, mutation: &Mutation) -> Notification {
        match mutation.execute(self.ctx.api.as_ref(), session).await {
            Ok(()) => {
                log::info!("{mutation:?} applied");
                self.refresh.trigger(mutation.kind());
                Notification::success(mutation.success_message())
            }
            Err(e) => {
                e.log(&format!("{mutation:?}"));
                Notification::error(mutation.failure_message())
            }
        }
    }

    /// 把一个已校验的邮箱加入黑名单
    pub async fn blacklist(&self, session: &Session, row: &ResourceRow) -> Notification {
        self.apply(session, &Mutation::AddEmails(vec![row.value.clone()]))
            .await
    }
}

//! 核心服务入口
//!
//! 封装 mailguard-core 的服务，负责组装 `ServiceContext`。

use std::sync::Arc;

use mailguard_core::services::{
    AuthService, DashboardService, RefreshSignal, TableService, ValidatorService,
};
use mailguard_core::{AdminApi, CoreResult, HttpAdminClient, ServiceContext, SessionStore};

use super::config_service::{AppConfig, SessionStorage};
use super::keyring_store::KeyringSessionStore;
use super::session_repository::JsonSessionStore;

/// 核心服务
pub struct CoreService {
    ctx: Arc<ServiceContext>,
}

impl CoreService {
    /// 按配置创建 HTTP 客户端与会话存储
    pub fn new(config: &AppConfig) -> CoreResult<Self> {
        let api: Arc<dyn AdminApi> = Arc::new(HttpAdminClient::new(&config.client_config())?);

        let session_store: Arc<dyn SessionStore> = match config.session_storage {
            SessionStorage::Keyring => Arc::new(KeyringSessionStore),
            SessionStorage::File => Arc::new(JsonSessionStore::new()),
        };

        log::info!(
            "Admin API at {}, session storage: {:?}",
            config.api_base_url,
            config.session_storage
        );

        Ok(Self::with_context(Arc::new(ServiceContext::new(
            api,
            session_store,
        ))))
    }

    /// 使用现成的上下文（测试中注入替身）
    pub fn with_context(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(Arc::clone(&self.ctx))
    }

    pub fn tables(&self) -> TableService {
        TableService::new(Arc::clone(&self.ctx))
    }

    /// `refresh` 必须是 Dashboard 持有的信号
    pub fn dashboard(&self, refresh: RefreshSignal) -> DashboardService {
        DashboardService::new(Arc::clone(&self.ctx), refresh)
    }

    pub fn validator(&self) -> ValidatorService {
        ValidatorService::new(Arc::clone(&self.ctx))
    }
}

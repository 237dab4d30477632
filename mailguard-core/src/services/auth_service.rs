//! 登录 / 会话服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{AuthContext, Session};

/// 认证服务
///
/// token 的生命周期只与登录 / 登出绑定。
pub struct AuthService {
    ctx: Arc<ServiceContext>,
}

impl AuthService {
    /// 创建认证服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 登录并持久化会话；非管理员账号被拒绝且不保存
    pub async fn login(&self, email: &str, password: &str) -> CoreResult<Session> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(CoreError::ValidationError(
                "email and password are required".into(),
            ));
        }

        let session = self.ctx.api.login(email.trim(), password).await?;
        let session = AuthContext::from_session(session)
            .guard()
            .map_err(|rejection| CoreError::AccessDenied(rejection.to_string()))?;

        self.ctx.session_store.save(&session).await?;
        log::info!("Logged in as {}", session.user.email);
        Ok(session)
    }

    /// 恢复上次保存的会话；未通过守卫检查的会话会被清除
    pub async fn restore(&self) -> CoreResult<Option<Session>> {
        let Some(stored) = self.ctx.session_store.load().await? else {
            return Ok(None);
        };

        match AuthContext::from_session(stored).guard() {
            Ok(session) => Ok(Some(session)),
            Err(rejection) => {
                log::warn!("Discarding stored session: {rejection}");
                self.ctx.session_store.clear().await?;
                Ok(None)
            }
        }
    }

    /// 登出并清除持久化的会话
    pub async fn logout(&self) -> CoreResult<()> {
        self.ctx.session_store.clear().await?;
        log::info!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{admin_session, MockAdminApi, MockSessionStore};
    use crate::traits::SessionStore;
    use crate::types::{Role, User};

    fn setup() -> (Arc<MockAdminApi>, Arc<MockSessionStore>, AuthService) {
        let api = Arc::new(MockAdminApi::new());
        let store = Arc::new(MockSessionStore::new());
        let ctx = Arc::new(ServiceContext::new(api.clone(), store.clone()));
        (api, store, AuthService::new(ctx))
    }

    #[tokio::test]
    async fn admin_login_is_persisted() {
        let (api, store, service) = setup();
        api.add_user("root@mailguard.dev", "hunter2", Role::Admin).await;

        let session = service.login("root@mailguard.dev", "hunter2").await.unwrap();

        assert_eq!(session.user.role, Role::Admin);
        assert_eq!(store.load().await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn non_admin_login_is_denied() {
        let (api, store, service) = setup();
        api.add_user("viewer@mailguard.dev", "pw", Role::User).await;

        let result = service.login("viewer@mailguard.dev", "pw").await;

        assert!(matches!(result, Err(CoreError::AccessDenied(_))));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let (api, _store, service) = setup();
        api.add_user("root@mailguard.dev", "hunter2", Role::Admin).await;

        let result = service.login("root@mailguard.dev", "nope").await;
        assert!(matches!(result, Err(CoreError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn empty_credentials_are_rejected_locally() {
        let (_api, _store, service) = setup();
        assert!(matches!(
            service.login("  ", "x").await,
            Err(CoreError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn restore_returns_valid_session() {
        let (_api, store, service) = setup();
        store.save(&admin_session()).await.unwrap();
        assert_eq!(service.restore().await.unwrap(), Some(admin_session()));
    }

    #[tokio::test]
    async fn restore_discards_non_admin_session() {
        let (_api, store, service) = setup();
        store
            .save(&Session {
                user: User {
                    id: "u".into(),
                    email: "u@x.io".into(),
                    role: Role::User,
                },
                token: "t".into(),
            })
            .await
            .unwrap();

        assert_eq!(service.restore().await.unwrap(), None);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn logout_clears_store() {
        let (_api, store, service) = setup();
        store.save(&admin_session()).await.unwrap();
        service.logout().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}

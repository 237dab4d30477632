//! 公开邮箱校验服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::ValidationReport;

/// 提交前的基本格式检查：恰好一个 `@`，两侧均非空
pub fn check_email_shape(email: &str) -> CoreResult<&str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CoreError::ValidationError("email is required".into()));
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(CoreError::ValidationError(format!(
            "'{email}' is not an email address"
        ))),
    }
}

/// 邮箱校验服务（无需登录）
pub struct ValidatorService {
    ctx: Arc<ServiceContext>,
}

impl ValidatorService {
    /// 创建服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 校验一个邮箱地址
    pub async fn validate(&self, email: &str) -> CoreResult<ValidationReport> {
        let email = check_email_shape(email)?;
        let report = self.ctx.api.validate_email(email).await?;
        log::debug!("{email} -> {} ({})", report.result, report.reason);
        Ok(report)
    }
}

//! Dashboard 外壳状态
//!
//! 持有当前视图、表单与唯一的编辑目标。提交表单时根据
//! (视图 × 编辑目标) 路由到四种变更之一：
//!
//! | 视图 \ 编辑目标      | None         | Domain / Email |
//! |---------------------|--------------|----------------|
//! | Blacklisted Domains | `AddDomains` | `UpdateDomain` |
//! | Blacklisted Emails  | `AddEmails`  | `UpdateEmail`  |
//!
//! Dashboard 不保存任何列表数据，变更成功后通过 [`RefreshSignal`] 通知资源表。

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::traits::AdminApi;
use crate::types::{capitalize, ResourceKind, ResourceRow, Session};

use super::bulk_modal::{split_bulk_input, BulkModal};
use super::refresh::RefreshSignal;

/// 当前视图
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    ValidEmails,
    BlacklistedDomains,
    BlacklistedEmails,
}

impl View {
    pub const ALL: [Self; 3] = [
        Self::ValidEmails,
        Self::BlacklistedDomains,
        Self::BlacklistedEmails,
    ];

    pub fn kind(self) -> ResourceKind {
        match self {
            Self::ValidEmails => ResourceKind::ValidEmails,
            Self::BlacklistedDomains => ResourceKind::BlacklistedDomains,
            Self::BlacklistedEmails => ResourceKind::BlacklistedEmails,
        }
    }
}

/// 当前编辑目标（互斥由类型保证）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditTarget {
    #[default]
    None,
    Domain(ResourceRow),
    Email(ResourceRow),
}

impl EditTarget {
    pub fn row(&self) -> Option<&ResourceRow> {
        match self {
            Self::None => None,
            Self::Domain(row) | Self::Email(row) => Some(row),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// 表单提交产生的后端变更
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AddDomains(Vec<String>),
    UpdateDomain { id: String, domain: String },
    AddEmails(Vec<String>),
    UpdateEmail { id: String, email: String },
}

impl Mutation {
    /// 受影响的资源类型
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::AddDomains(_) | Self::UpdateDomain { .. } => ResourceKind::BlacklistedDomains,
            Self::AddEmails(_) | Self::UpdateEmail { .. } => ResourceKind::BlacklistedEmails,
        }
    }

    fn is_add(&self) -> bool {
        matches!(self, Self::AddDomains(_) | Self::AddEmails(_))
    }

    pub fn success_message(&self) -> String {
        let kind = self.kind();
        if self.is_add() {
            format!("{} added successfully", capitalize(kind.plural()))
        } else {
            format!("{} updated successfully", capitalize(kind.singular()))
        }
    }

    pub fn failure_message(&self) -> String {
        let kind = self.kind();
        if self.is_add() {
            format!("Failed to add {}", kind.plural())
        } else {
            format!("Failed to update {}", kind.singular())
        }
    }

    /// 调用对应的后端接口
    pub async fn execute(&self, api: &dyn AdminApi, session: &Session) -> CoreResult<()> {
        match self {
            Self::AddDomains(values) | Self::AddEmails(values) => {
                api.add(session, self.kind(), values).await
            }
            Self::UpdateDomain { id, domain: value } | Self::UpdateEmail { id, email: value } => {
                api.update(session, self.kind(), id, value).await
            }
        }
    }
}

/// Dashboard 外壳
#[derive(Debug)]
pub struct Dashboard {
    view: View,
    modal: Option<BulkModal>,
    edit_target: EditTarget,
    refresh: RefreshSignal,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            view: View::default(),
            modal: None,
            edit_target: EditTarget::None,
            refresh: RefreshSignal::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn modal(&self) -> Option<&BulkModal> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut BulkModal> {
        self.modal.as_mut()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn edit_target(&self) -> &EditTarget {
        &self.edit_target
    }

    /// 刷新信号（资源表订阅，变更服务触发）
    pub fn refresh_signal(&self) -> &RefreshSignal {
        &self.refresh
    }

    /// 切换视图，不重置表单与编辑目标
    pub fn select_view(&mut self, view: View) {
        self.view = view;
    }

    /// 打开批量添加表单；只读视图返回 `false`
    pub fn open_add(&mut self) -> bool {
        let kind = self.view.kind();
        if !kind.is_mutable() {
            return false;
        }
        self.edit_target = EditTarget::None;
        self.modal = Some(BulkModal::bulk_add(kind));
        true
    }

    /// 以 `row` 为目标打开编辑表单；只读视图返回 `false`
    pub fn open_edit(&mut self, row: &ResourceRow) -> bool {
        let kind = self.view.kind();
        self.edit_target = match self.view {
            View::ValidEmails => return false,
            View::BlacklistedDomains => EditTarget::Domain(row.clone()),
            View::BlacklistedEmails => EditTarget::Email(row.clone()),
        };
        match &mut self.modal {
            Some(modal) if modal.is_edit() && modal.kind() == kind => modal.sync_edit_data(row),
            _ => self.modal = Some(BulkModal::edit(kind, row)),
        }
        true
    }

    /// 关闭表单并清除编辑目标
    pub fn close_modal(&mut self) {
        self.modal = None;
        self.edit_target = EditTarget::None;
    }

    /// 提交表单：立即关闭，并把文本路由为一个 [`Mutation`]
    ///
    /// 没有可添加的条目或编辑值为空白时返回 `ValidationError`，不发起请求。
    pub fn submit_modal(&mut self) -> CoreResult<Mutation> {
        let modal = self
            .modal
            .take()
            .ok_or_else(|| CoreError::ValidationError("no form is open".into()))?;
        let target = std::mem::take(&mut self.edit_target);
        let text = modal.into_text();

        let mutation = match (self.view, target) {
            (View::ValidEmails, _) => {
                return Err(CoreError::Unsupported("valid emails are read-only".into()))
            }
            (View::BlacklistedDomains, EditTarget::None) => Mutation::AddDomains(split_bulk_input(&text)),
            (View::BlacklistedEmails, EditTarget::None) => Mutation::AddEmails(split_bulk_input(&text)),
            (View::BlacklistedDomains, EditTarget::Domain(row)) => Mutation::UpdateDomain {
                id: row.id,
                domain: text,
            },
            (View::BlacklistedEmails, EditTarget::Email(row)) => Mutation::UpdateEmail {
                id: row.id,
                email: text,
            },
            (view, _) => {
                return Err(CoreError::ValidationError(format!(
                    "edit target does not belong to {view:?}"
                )))
            }
        };

        match &mutation {
            Mutation::AddDomains(values) | Mutation::AddEmails(values) if values.is_empty() => Err(
                CoreError::ValidationError(format!("no {} to add", mutation.kind().plural())),
            ),
            Mutation::UpdateDomain { domain: value, .. } | Mutation::UpdateEmail { email: value, .. }
                if value.trim().is_empty() =>
            {
                Err(CoreError::ValidationError(format!(
                    "{} cannot be empty",
                    mutation.kind().singular()
                )))
            }
            _ => Ok(mutation),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

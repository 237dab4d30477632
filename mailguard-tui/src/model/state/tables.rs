//! 三个资源表

use mailguard_core::services::{FetchTicket, RefreshSignal, ResourceTable};
use mailguard_core::types::ResourceKind;

pub struct TablesState {
    valid_emails: ResourceTable,
    domains: ResourceTable,
    emails: ResourceTable,
    /// 搜索框处于编辑状态
    pub editing_search: bool,
}

impl TablesState {
    /// 创建表格并订阅 Dashboard 的刷新信号
    pub fn new(page_size: u32, signal: &RefreshSignal) -> Self {
        let mut tables = Self {
            valid_emails: ResourceTable::new(ResourceKind::ValidEmails, page_size),
            domains: ResourceTable::new(ResourceKind::BlacklistedDomains, page_size),
            emails: ResourceTable::new(ResourceKind::BlacklistedEmails, page_size),
            editing_search: false,
        };
        for kind in ResourceKind::ALL {
            tables.get_mut(kind).subscribe(signal);
        }
        tables
    }

    pub fn get(&self, kind: ResourceKind) -> &ResourceTable {
        match kind {
            ResourceKind::ValidEmails => &self.valid_emails,
            ResourceKind::BlacklistedDomains => &self.domains,
            ResourceKind::BlacklistedEmails => &self.emails,
        }
    }

    pub fn get_mut(&mut self, kind: ResourceKind) -> &mut ResourceTable {
        match kind {
            ResourceKind::ValidEmails => &mut self.valid_emails,
            ResourceKind::BlacklistedDomains => &mut self.domains,
            ResourceKind::BlacklistedEmails => &mut self.emails,
        }
    }

    /// 收集所有表的待刷新请求
    pub fn poll_refresh(&mut self) -> Vec<FetchTicket> {
        ResourceKind::ALL
            .into_iter()
            .filter_map(|kind| self.get_mut(kind).poll_refresh())
            .collect()
    }

    /// 清空所有表的待刷新请求，不发起拉取
    pub fn discard_refresh(&mut self) {
        for kind in ResourceKind::ALL {
            if self.get_mut(kind).discard_refresh() {
                log::debug!("dropped refresh for {kind:?}: no session");
            }
        }
    }
}

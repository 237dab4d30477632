//! 资源表状态机
//!
//! ```text
//! idle ──fetch──▶ loading ──ok──▶ loaded
//!                    ▲    └─err─▶ errored
//!                    └── page change / search / refresh / delete
//! ```
//!
//! 状态机本身不做 I/O：每个转换返回一个 [`FetchTicket`]，由调用方执行
//! `AdminApi::list` 后通过 [`ResourceTable::finish_fetch`] 回填结果。
//! 并发请求不做隔离，后到的响应覆盖先到的。

use crate::error::CoreResult;
use crate::types::{
    capitalize, ListPage, ListQuery, Notification, PaginationMeta, ResourceKind, ResourceRow,
};

use super::refresh::{RefreshSignal, RefreshSubscription};

/// 表格生命周期阶段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TablePhase {
    /// 尚未拉取
    Idle,
    Loading,
    Loaded,
    /// 拉取失败，错误面板替换整张表
    Errored(String),
}

/// 待执行的列表请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub kind: ResourceKind,
    pub query: ListQuery,
}

/// 待执行的删除请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTicket {
    pub kind: ResourceKind,
    pub id: String,
}

/// 删除完成后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub notification: Notification,
    /// 成功时需要重新拉取的页
    pub follow_up: Option<FetchTicket>,
}

/// 单个资源集合的表格状态
#[derive(Debug)]
pub struct ResourceTable {
    kind: ResourceKind,
    page_size: u32,
    items: Vec<ResourceRow>,
    pagination: Option<PaginationMeta>,
    current_page: u32,
    /// 搜索框内容（翻页 / 刷新时沿用）
    search_term: String,
    phase: TablePhase,
    /// 光标所在行
    selected: usize,
    refresh: Option<RefreshSubscription>,
}

impl ResourceTable {
    pub fn new(kind: ResourceKind, page_size: u32) -> Self {
        Self {
            kind,
            page_size: page_size.max(1),
            items: Vec::new(),
            pagination: None,
            current_page: 1,
            search_term: String::new(),
            phase: TablePhase::Idle,
            selected: 0,
            refresh: None,
        }
    }

    // ========== 访问器 ==========

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn items(&self) -> &[ResourceRow] {
        &self.items
    }

    pub fn pagination(&self) -> Option<&PaginationMeta> {
        self.pagination.as_ref()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.map_or(1, |p| p.page_count())
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn phase(&self) -> &TablePhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == TablePhase::Loading
    }

    /// 错误面板文字
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            TablePhase::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&ResourceRow> {
        self.items.get(self.selected)
    }

    /// 页脚 "Showing {start}-{end} of {total} results"
    pub fn footer_range(&self) -> Option<(u32, u32, u32)> {
        self.pagination.map(|p| {
            let meta = PaginationMeta {
                current_page: self.current_page,
                ..p
            };
            let (start, end) = meta.showing_range();
            (start, end, p.total_items)
        })
    }

    // ========== 光标 ==========

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    // ========== 状态转换 ==========

    /// 更新搜索框内容，不触发请求
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// 进入 loading 并生成请求
    pub fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        self.phase = TablePhase::Loading;
        FetchTicket {
            kind: self.kind,
            query: ListQuery::new(page.max(1), self.page_size, &self.search_term),
        }
    }

    /// 提交搜索：回到第一页
    pub fn search(&mut self, term: impl Into<String>) -> FetchTicket {
        self.search_term = term.into();
        self.current_page = 1;
        self.begin_fetch(1)
    }

    /// 跳转到第 `page` 页（夹在 `[1, totalPages]` 内），沿用搜索词
    pub fn change_page(&mut self, page: u32) -> FetchTicket {
        let page = page.clamp(1, self.total_pages());
        self.begin_fetch(page)
    }

    /// 上一页；已在首页时返回 `None`
    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        (self.current_page > 1).then(|| self.change_page(self.current_page - 1))
    }

    /// 下一页；已在末页时返回 `None`
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        (self.current_page < self.total_pages()).then(|| self.change_page(self.current_page + 1))
    }

    pub fn first_page(&mut self) -> Option<FetchTicket> {
        (self.current_page > 1).then(|| self.change_page(1))
    }

    pub fn last_page(&mut self) -> Option<FetchTicket> {
        let last = self.total_pages();
        (self.current_page < last).then(|| self.change_page(last))
    }

    /// 重新拉取当前页
    pub fn refresh(&mut self) -> FetchTicket {
        self.begin_fetch(self.current_page)
    }

    /// 回填列表请求结果，失败时返回错误提示
    ///
    /// 无论成功失败都会离开 loading。
    pub fn finish_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: CoreResult<ListPage<ResourceRow>>,
    ) -> Option<Notification> {
        match result {
            Ok(page) => {
                self.items = page.items;
                self.pagination = Some(page.pagination);
                self.current_page = ticket.query.page;
                self.selected = self.selected.min(self.items.len().saturating_sub(1));
                self.phase = TablePhase::Loaded;
                None
            }
            Err(e) => {
                e.log(&format!("fetch {:?} page {}", self.kind, ticket.query.page));
                let message = format!("Failed to fetch {}", self.kind.plural());
                self.phase = TablePhase::Errored(message.clone());
                Some(Notification::error(message))
            }
        }
    }

    /// 为光标所在行生成删除请求
    pub fn delete_selected(&self) -> Option<DeleteTicket> {
        if !self.kind.is_mutable() {
            return None;
        }
        self.selected_row().map(|row| DeleteTicket {
            kind: self.kind,
            id: row.id.clone(),
        })
    }

    /// 回填删除结果
    ///
    /// 成功：立即从本地移除该行；若它是非首页上的唯一一行则退回上一页，
    /// 否则重新拉取当前页以校正计数。失败：状态不变。
    pub fn finish_delete(&mut self, id: &str, result: CoreResult<()>) -> DeleteOutcome {
        let singular = self.kind.singular();
        if let Err(e) = result {
            e.log(&format!("delete {:?} {id}", self.kind));
            return DeleteOutcome {
                notification: Notification::error(format!("Failed to delete {singular}")),
                follow_up: None,
            };
        }

        let before = self.items.len();
        self.items.retain(|row| row.id != id);
        self.selected = self.selected.min(self.items.len().saturating_sub(1));

        let follow_up = if before == 1 && self.items.is_empty() && self.current_page > 1 {
            self.current_page -= 1;
            self.begin_fetch(self.current_page)
        } else {
            self.begin_fetch(self.current_page)
        };

        DeleteOutcome {
            notification: Notification::success(format!(
                "{} deleted successfully",
                capitalize(singular)
            )),
            follow_up: Some(follow_up),
        }
    }

    // ========== 刷新订阅 ==========

    pub fn subscribe(&mut self, signal: &RefreshSignal) {
        self.refresh = Some(signal.subscribe());
    }

    /// 有针对本表的刷新请求时重新拉取当前页
    pub fn poll_refresh(&mut self) -> Option<FetchTicket> {
        let requested = self
            .refresh
            .as_mut()
            .is_some_and(|sub| sub.take_pending(self.kind));
        requested.then(|| self.refresh())
    }

    /// 丢弃待处理的刷新请求，状态不变
    ///
    /// 没有可用会话时由前端调用，返回是否丢弃了针对本表的请求。
    pub fn discard_refresh(&mut self) -> bool {
        self.refresh
            .as_mut()
            .is_some_and(|sub| sub.take_pending(self.kind))
    }
}

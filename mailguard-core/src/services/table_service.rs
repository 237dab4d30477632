//! 资源表异步驱动
//!
//! 把 [`ResourceTable`] 产生的请求交给 [`AdminApi`](crate::traits::AdminApi)
//! 执行并回填结果。前端也可以自行执行 ticket（例如放到后台任务里）。

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{ListPage, Notification, ResourceRow, Session};

use super::resource_table::{DeleteTicket, FetchTicket, ResourceTable};

/// 资源表服务
pub struct TableService {
    ctx: Arc<ServiceContext>,
}

impl TableService {
    /// 创建服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 执行列表请求
    pub async fn execute(
        &self,
        session: &Session,
        ticket: &FetchTicket,
    ) -> CoreResult<ListPage<ResourceRow>> {
        self.ctx.api.list(session, ticket.kind, &ticket.query).await
    }

    /// 执行删除请求
    pub async fn execute_delete(&self, session: &Session, ticket: &DeleteTicket) -> CoreResult<()> {
        self.ctx.api.delete(session, ticket.kind, &ticket.id).await
    }

    /// 执行 ticket 并回填表格
    pub async fn fetch(
        &self,
        session: &Session,
        table: &mut ResourceTable,
        ticket: FetchTicket,
    ) -> Option<Notification> {
        let result = self.execute(session, &ticket).await;
        table.finish_fetch(&ticket, result)
    }

    /// 加载指定页
    pub async fn load_page(
        &self,
        session: &Session,
        table: &mut ResourceTable,
        page: u32,
    ) -> Option<Notification> {
        let ticket = table.change_page(page);
        self.fetch(session, table, ticket).await
    }

    /// 提交搜索
    pub async fn search(
        &self,
        session: &Session,
        table: &mut ResourceTable,
        term: &str,
    ) -> Option<Notification> {
        let ticket = table.search(term);
        self.fetch(session, table, ticket).await
    }

    /// 删除一行并完成后续的重新拉取
    ///
    /// 返回删除提示，以及后续拉取失败时的错误提示。
    pub async fn delete(
        &self,
        session: &Session,
        table: &mut ResourceTable,
        id: &str,
    ) -> Vec<Notification> {
        let ticket = DeleteTicket {
            kind: table.kind(),
            id: id.to_string(),
        };
        let result = self.execute_delete(session, &ticket).await;
        let outcome = table.finish_delete(id, result);

        let mut notifications = vec![outcome.notification];
        if let Some(follow_up) = outcome.follow_up {
            notifications.extend(self.fetch(session, table, follow_up).await);
        }
        notifications
    }

    /// 处理待刷新的请求；返回是否发生了拉取
    pub async fn refresh_if_requested(
        &self,
        session: &Session,
        table: &mut ResourceTable,
    ) -> Option<Option<Notification>> {
        let ticket = table.poll_refresh()?;
        Some(self.fetch(session, table, ticket).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::services::TablePhase;
    use crate::test_utils::{admin_session, create_test_context, ApiCall, MockAdminApi};
    use crate::types::{ListQuery, ResourceKind};

    async fn setup(values: &[&str]) -> (Arc<MockAdminApi>, TableService, ResourceTable) {
        let api = Arc::new(MockAdminApi::new());
        api.seed(ResourceKind::BlacklistedDomains, values).await;
        let service = TableService::new(create_test_context(api.clone()));
        let table = ResourceTable::new(ResourceKind::BlacklistedDomains, 5);
        (api, service, table)
    }

    fn domains(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("d{i:02}.com")).collect()
    }

    #[tokio::test]
    async fn load_first_page() {
        let names = domains(12);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (_api, service, mut table) = setup(&refs).await;

        let note = service.load_page(&admin_session(), &mut table, 1).await;
        assert!(note.is_none());
        assert_eq!(table.items().len(), 5);
        assert_eq!(table.total_pages(), 3);
        assert_eq!(table.footer_range(), Some((1, 5, 12)));
    }

    #[tokio::test]
    async fn search_sends_term_and_resets_page() {
        let (api, service, mut table) = setup(&["spam.io", "ham.io", "spammer.net"]).await;
        let session = admin_session();
        service.load_page(&session, &mut table, 1).await;

        service.search(&session, &mut table, "spam").await;

        assert_eq!(table.items().len(), 2);
        assert_eq!(
            api.calls().await.last(),
            Some(&ApiCall::List {
                kind: ResourceKind::BlacklistedDomains,
                query: ListQuery::new(1, 5, "spam"),
            })
        );
    }

    #[tokio::test]
    async fn fetch_failure_sets_error_panel() {
        let (api, service, mut table) = setup(&["a.com"]).await;
        api.set_list_error(Some(CoreError::NetworkError("refused".into()))).await;

        let note = service.load_page(&admin_session(), &mut table, 1).await;

        assert_eq!(note.map(|n| n.message), Some("Failed to fetch domains".to_string()));
        assert_eq!(table.phase(), &TablePhase::Errored("Failed to fetch domains".into()));
    }

    #[tokio::test]
    async fn deleting_last_row_of_page_three_loads_page_two() {
        let names = domains(11);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (api, service, mut table) = setup(&refs).await;
        let session = admin_session();
        service.load_page(&session, &mut table, 3).await;
        assert_eq!(table.items().len(), 1);
        let id = table.items()[0].id.clone();

        let notes = service.delete(&session, &mut table, &id).await;

        assert_eq!(notes, vec![Notification::success("Domain deleted successfully")]);
        assert_eq!(table.current_page(), 2);
        assert_eq!(table.items().len(), 5);
        assert!(matches!(
            api.calls().await.last(),
            Some(ApiCall::List { query, .. }) if query.page == 2
        ));
    }

    #[tokio::test]
    async fn deleting_non_last_row_refetches_same_page() {
        let names = domains(7);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (api, service, mut table) = setup(&refs).await;
        let session = admin_session();
        service.load_page(&session, &mut table, 2).await;
        let id = table.items()[0].id.clone();

        service.delete(&session, &mut table, &id).await;

        assert_eq!(table.current_page(), 2);
        assert_eq!(table.items().len(), 1);
        assert!(matches!(
            api.calls().await.last(),
            Some(ApiCall::List { query, .. }) if query.page == 2
        ));
    }

    #[tokio::test]
    async fn failed_delete_keeps_rows() {
        let (api, service, mut table) = setup(&["a.com", "b.com"]).await;
        let session = admin_session();
        service.load_page(&session, &mut table, 1).await;
        api.set_delete_error(Some(CoreError::Timeout("slow".into()))).await;
        let id = table.items()[0].id.clone();

        let notes = service.delete(&session, &mut table, &id).await;

        assert_eq!(notes, vec![Notification::error("Failed to delete domain")]);
        assert_eq!(table.items().len(), 2);
        assert_eq!(api.count(ResourceKind::BlacklistedDomains).await, 2);
    }

    #[tokio::test]
    async fn refresh_request_refetches() {
        let (api, service, mut table) = setup(&["a.com"]).await;
        let session = admin_session();
        let signal = crate::services::RefreshSignal::new();
        table.subscribe(&signal);
        service.load_page(&session, &mut table, 1).await;
        assert!(service.refresh_if_requested(&session, &mut table).await.is_none());

        api.seed(ResourceKind::BlacklistedDomains, &["b.com"]).await;
        signal.trigger(ResourceKind::BlacklistedDomains);

        assert_eq!(
            service.refresh_if_requested(&session, &mut table).await,
            Some(None)
        );
        assert_eq!(table.items().len(), 2);
    }
}

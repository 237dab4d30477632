//! 命令分发
//!
//! 每条 [`Command`] 派生一个 tokio 任务执行，结果作为 [`BackendMessage`]
//! 经无界 mpsc 通道送回主循环。请求之间没有取消或排序保证：
//! 较慢的旧响应可能晚于新响应到达并覆盖它。

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use mailguard_core::services::{export_to_dir, RefreshSignal};
use mailguard_core::CoreError;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::BackendMessage;
use crate::model::Command;

use super::CoreService;

pub struct Dispatcher {
    core: Arc<CoreService>,
    refresh: RefreshSignal,
    export_dir: PathBuf,
    tx: UnboundedSender<BackendMessage>,
}

impl Dispatcher {
    pub fn new(
        core: Arc<CoreService>,
        refresh: RefreshSignal,
        export_dir: PathBuf,
        tx: UnboundedSender<BackendMessage>,
    ) -> Self {
        Self {
            core,
            refresh,
            export_dir,
            tx,
        }
    }

    /// 在后台执行命令
    pub fn dispatch(&self, command: Command) {
        log::debug!("dispatch {command:?}");
        let core = Arc::clone(&self.core);
        let refresh = self.refresh.clone();
        let export_dir = self.export_dir.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let message = execute(&core, &refresh, export_dir, command).await;
            if tx.send(message).is_err() {
                log::debug!("UI loop gone, dropping backend result");
            }
        });
    }
}

/// 执行一条命令并返回结果消息
pub async fn execute(
    core: &CoreService,
    refresh: &RefreshSignal,
    export_dir: PathBuf,
    command: Command,
) -> BackendMessage {
    match command {
        Command::Fetch { session, ticket } => {
            let result = core.tables().execute(&session, &ticket).await;
            BackendMessage::Fetched { ticket, result }
        }
        Command::Delete { session, ticket } => {
            let result = core.tables().execute_delete(&session, &ticket).await;
            BackendMessage::Deleted { ticket, result }
        }
        Command::Mutate { session, mutation } => {
            let note = core.dashboard(refresh.clone()).apply(&session, &mutation).await;
            BackendMessage::Mutated(note)
        }
        Command::Blacklist { session, row } => {
            let note = core.dashboard(refresh.clone()).blacklist(&session, &row).await;
            BackendMessage::Mutated(note)
        }
        Command::Export(rows) => {
            let result = tokio::task::spawn_blocking(move || {
                export_to_dir(&rows, &export_dir, Utc::now())
            })
            .await
            .unwrap_or_else(|e| Err(CoreError::StorageError(format!("export task failed: {e}"))));
            BackendMessage::Exported(result)
        }
        Command::Validate(email) => BackendMessage::Validated(core.validator().validate(&email).await),
        Command::Login { email, password } => {
            BackendMessage::LoggedIn(core.auth().login(&email, &password).await)
        }
        Command::RestoreSession => BackendMessage::SessionRestored(core.auth().restore().await),
        Command::Logout => BackendMessage::LoggedOut(core.auth().logout().await),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::TimeZone;
    use mailguard_core::services::{FetchTicket, Mutation};
    use mailguard_core::types::{
        ListPage, ListQuery, PaginationMeta, ResourceKind, ResourceRow, Role, Session, User,
        ValidationReport,
    };
    use mailguard_core::{AdminApi, CoreResult, ServiceContext, SessionStore};
    use tokio::sync::Mutex;

    use super::*;

    /// 固定返回一页数据的后端
    #[derive(Default)]
    struct StaticApi {
        added: Mutex<Vec<(ResourceKind, Vec<String>)>>,
    }

    fn row(id: &str, value: &str) -> ResourceRow {
        ResourceRow {
            id: id.into(),
            value: value.into(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
            detail: None,
        }
    }

    #[async_trait]
    impl AdminApi for StaticApi {
        async fn login(&self, email: &str, _password: &str) -> CoreResult<Session> {
            Ok(Session {
                user: User {
                    id: "u1".into(),
                    email: email.into(),
                    role: Role::User,
                },
                token: "tok".into(),
            })
        }

        async fn list(
            &self,
            _session: &Session,
            _kind: ResourceKind,
            query: &ListQuery,
        ) -> CoreResult<ListPage<ResourceRow>> {
            Ok(ListPage {
                items: vec![row("1", "spam.io")],
                pagination: PaginationMeta {
                    total_items: 1,
                    total_pages: 1,
                    current_page: query.page,
                    items_per_page: query.limit,
                },
            })
        }

        async fn add(&self, _session: &Session, kind: ResourceKind, values: &[String]) -> CoreResult<()> {
            self.added.lock().await.push((kind, values.to_vec()));
            Ok(())
        }

        async fn update(
            &self,
            _session: &Session,
            _kind: ResourceKind,
            _id: &str,
            _value: &str,
        ) -> CoreResult<()> {
            Ok(())
        }

        async fn delete(&self, _session: &Session, _kind: ResourceKind, _id: &str) -> CoreResult<()> {
            Err(CoreError::HttpStatus {
                status: 500,
                body: "boom".into(),
            })
        }

        async fn validate_email(&self, email: &str) -> CoreResult<ValidationReport> {
            Ok(ValidationReport {
                result: "valid".into(),
                email: email.into(),
                ..ValidationReport::default()
            })
        }
    }

    #[derive(Default)]
    struct MemoryStore(Mutex<HashMap<&'static str, Session>>);

    #[async_trait]
    impl SessionStore for MemoryStore {
        async fn load(&self) -> CoreResult<Option<Session>> {
            Ok(self.0.lock().await.get("token").cloned())
        }
        async fn save(&self, session: &Session) -> CoreResult<()> {
            self.0.lock().await.insert("token", session.clone());
            Ok(())
        }
        async fn clear(&self) -> CoreResult<()> {
            self.0.lock().await.clear();
            Ok(())
        }
    }

    fn core(api: Arc<StaticApi>) -> CoreService {
        CoreService::with_context(Arc::new(ServiceContext::new(
            api,
            Arc::new(MemoryStore::default()),
        )))
    }

    fn admin() -> Session {
        Session {
            user: User {
                id: "u1".into(),
                email: "admin@example.com".into(),
                role: Role::Admin,
            },
            token: "tok".into(),
        }
    }

    // ---- execute ----

    #[tokio::test]
    async fn fetch_returns_ticket_with_result() {
        let core = core(Arc::new(StaticApi::default()));
        let ticket = FetchTicket {
            kind: ResourceKind::BlacklistedDomains,
            query: ListQuery::new(1, 5, ""),
        };
        let message = execute(
            &core,
            &RefreshSignal::new(),
            PathBuf::from("."),
            Command::Fetch {
                session: admin(),
                ticket: ticket.clone(),
            },
        )
        .await;

        match message {
            BackendMessage::Fetched { ticket: t, result } => {
                assert_eq!(t, ticket);
                assert_eq!(result.unwrap().items[0].value, "spam.io");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn mutation_triggers_refresh_signal() {
        let api = Arc::new(StaticApi::default());
        let core = core(api.clone());
        let signal = RefreshSignal::new();
        let mut sub = signal.subscribe();

        let message = execute(
            &core,
            &signal,
            PathBuf::from("."),
            Command::Mutate {
                session: admin(),
                mutation: Mutation::AddDomains(vec!["a.com".into(), "b.com".into()]),
            },
        )
        .await;

        assert!(matches!(message, BackendMessage::Mutated(ref n) if !n.is_error()));
        assert!(sub.take_pending(ResourceKind::BlacklistedDomains));
        assert_eq!(api.added.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn non_admin_login_is_denied() {
        let core = core(Arc::new(StaticApi::default()));
        let message = execute(
            &core,
            &RefreshSignal::new(),
            PathBuf::from("."),
            Command::Login {
                email: "user@example.com".into(),
                password: "secret".into(),
            },
        )
        .await;

        assert!(matches!(
            message,
            BackendMessage::LoggedIn(Err(CoreError::AccessDenied(_)))
        ));
    }

    #[tokio::test]
    async fn export_writes_csv_file() {
        let dir = std::env::temp_dir().join(format!("mailguard-tui-export-{}", std::process::id()));
        let core = core(Arc::new(StaticApi::default()));
        let message = execute(
            &core,
            &RefreshSignal::new(),
            dir.clone(),
            Command::Export(vec![row("v1", "jane@gmail.com")]),
        )
        .await;

        let path = match message {
            BackendMessage::Exported(Ok(path)) => path,
            other => panic!("export failed: {other:?}"),
        };
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("email,validation_date,status"));
        assert!(content.contains("jane@gmail.com,2025-03-01,valid"));
        let _ = std::fs::remove_dir_all(dir);
    }
}

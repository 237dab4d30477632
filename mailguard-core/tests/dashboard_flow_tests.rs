#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end console flow: login, table loading, modal mutations and refresh.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mailguard_core::error::{CoreError, CoreResult};
use mailguard_core::services::{
    AuthService, Dashboard, DashboardService, Mutation, ResourceTable, TablePhase, TableService,
    View,
};
use mailguard_core::traits::{AdminApi, SessionStore};
use mailguard_core::types::{
    ListPage, ListQuery, PaginationMeta, ResourceKind, ResourceRow, Role, Session, User,
    ValidationReport,
};
use mailguard_core::ServiceContext;
use tokio::sync::RwLock;

// ===== Mock Implementations =====

/// In-memory backend holding one admin account.
struct InMemoryBackend {
    rows: RwLock<HashMap<ResourceKind, Vec<ResourceRow>>>,
    next_id: RwLock<u32>,
    fail_lists: RwLock<bool>,
}

impl InMemoryBackend {
    fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: RwLock::new(1),
            fail_lists: RwLock::new(false),
        }
    }

    async fn insert(&self, kind: ResourceKind, value: &str) {
        let mut next = self.next_id.write().await;
        self.rows
            .write()
            .await
            .entry(kind)
            .or_default()
            .push(ResourceRow {
                id: format!("id-{next}"),
                value: value.to_string(),
                created_at: Utc::now(),
                detail: None,
            });
        *next += 1;
    }
}

#[async_trait]
impl AdminApi for InMemoryBackend {
    async fn login(&self, email: &str, password: &str) -> CoreResult<Session> {
        if email == "root@mailguard.dev" && password == "s3cret" {
            Ok(Session {
                user: User {
                    id: "u1".into(),
                    email: email.into(),
                    role: Role::Admin,
                },
                token: "jwt".into(),
            })
        } else {
            Err(CoreError::Unauthorized("bad credentials".into()))
        }
    }

    async fn list(
        &self,
        session: &Session,
        kind: ResourceKind,
        query: &ListQuery,
    ) -> CoreResult<ListPage<ResourceRow>> {
        assert_eq!(session.token, "jwt");
        if *self.fail_lists.read().await {
            return Err(CoreError::NetworkError("connection refused".into()));
        }
        let all = self.rows.read().await.get(&kind).cloned().unwrap_or_default();
        let total = u32::try_from(all.len()).unwrap();
        let skip = ((query.page - 1) * query.limit) as usize;
        Ok(ListPage {
            items: all.into_iter().skip(skip).take(query.limit as usize).collect(),
            pagination: PaginationMeta {
                total_items: total,
                total_pages: total.div_ceil(query.limit),
                current_page: query.page,
                items_per_page: query.limit,
            },
        })
    }

    async fn add(&self, _session: &Session, kind: ResourceKind, values: &[String]) -> CoreResult<()> {
        for value in values {
            self.insert(kind, value).await;
        }
        Ok(())
    }

    async fn update(
        &self,
        _session: &Session,
        kind: ResourceKind,
        id: &str,
        value: &str,
    ) -> CoreResult<()> {
        let mut rows = self.rows.write().await;
        let row = rows
            .get_mut(&kind)
            .and_then(|l| l.iter_mut().find(|r| r.id == id))
            .ok_or(CoreError::HttpStatus {
                status: 404,
                body: "not found".into(),
            })?;
        row.value = value.to_string();
        Ok(())
    }

    async fn delete(&self, _session: &Session, kind: ResourceKind, id: &str) -> CoreResult<()> {
        if let Some(list) = self.rows.write().await.get_mut(&kind) {
            list.retain(|r| r.id != id);
        }
        Ok(())
    }

    async fn validate_email(&self, _email: &str) -> CoreResult<ValidationReport> {
        Ok(ValidationReport::default())
    }
}

struct MemorySessionStore(RwLock<Option<Session>>);

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> CoreResult<Option<Session>> {
        Ok(self.0.read().await.clone())
    }

    async fn save(&self, session: &Session) -> CoreResult<()> {
        *self.0.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        *self.0.write().await = None;
        Ok(())
    }
}

struct Console {
    backend: Arc<InMemoryBackend>,
    session: Session,
    dashboard: Dashboard,
    tables: TableService,
    mutations: DashboardService,
    domains: ResourceTable,
    emails: ResourceTable,
}

async fn console() -> Console {
    let backend = Arc::new(InMemoryBackend::new());
    let ctx = Arc::new(ServiceContext::new(
        backend.clone(),
        Arc::new(MemorySessionStore(RwLock::new(None))),
    ));
    let session = AuthService::new(ctx.clone())
        .login("root@mailguard.dev", "s3cret")
        .await
        .unwrap();

    let dashboard = Dashboard::new();
    let mut domains = ResourceTable::new(ResourceKind::BlacklistedDomains, 5);
    let mut emails = ResourceTable::new(ResourceKind::BlacklistedEmails, 5);
    domains.subscribe(dashboard.refresh_signal());
    emails.subscribe(dashboard.refresh_signal());

    Console {
        backend,
        session,
        mutations: DashboardService::new(ctx.clone(), dashboard.refresh_signal().clone()),
        tables: TableService::new(ctx),
        dashboard,
        domains,
        emails,
    }
}

fn values(table: &ResourceTable) -> Vec<&str> {
    table.items().iter().map(|r| r.value.as_str()).collect()
}

// ===== Tests =====

#[tokio::test]
async fn bulk_add_then_refresh_shows_new_domains() {
    let mut c = console().await;
    c.dashboard.select_view(View::BlacklistedDomains);
    c.tables.load_page(&c.session, &mut c.domains, 1).await;
    assert!(c.domains.items().is_empty());

    assert!(c.dashboard.open_add());
    for ch in "a.com, b.com".chars() {
        c.dashboard.modal_mut().unwrap().insert_char(ch);
    }
    let mutation = c.dashboard.submit_modal().unwrap();
    assert_eq!(
        mutation,
        Mutation::AddDomains(vec!["a.com".into(), "b.com".into()])
    );
    assert!(!c.mutations.apply(&c.session, &mutation).await.is_error());

    // only the domains table reacts
    assert!(c.tables.refresh_if_requested(&c.session, &mut c.emails).await.is_none());
    let refreshed = c.tables.refresh_if_requested(&c.session, &mut c.domains).await;
    assert_eq!(refreshed, Some(None));
    assert_eq!(values(&c.domains), vec!["a.com", "b.com"]);
}

#[tokio::test]
async fn edit_domain_updates_row() {
    let mut c = console().await;
    c.backend.insert(ResourceKind::BlacklistedDomains, "old.com").await;
    c.dashboard.select_view(View::BlacklistedDomains);
    c.tables.load_page(&c.session, &mut c.domains, 1).await;

    let target = c.domains.selected_row().cloned().unwrap();
    assert!(c.dashboard.open_edit(&target));
    let modal = c.dashboard.modal_mut().unwrap();
    modal.clear();
    "example.com".chars().for_each(|ch| modal.insert_char(ch));

    let mutation = c.dashboard.submit_modal().unwrap();
    c.mutations.apply(&c.session, &mutation).await;
    c.tables.refresh_if_requested(&c.session, &mut c.domains).await;

    assert_eq!(values(&c.domains), vec!["example.com"]);
    assert!(c.dashboard.edit_target().is_none());
}

#[tokio::test]
async fn delete_walks_back_from_emptied_page() {
    let mut c = console().await;
    for i in 0..6 {
        c.backend
            .insert(ResourceKind::BlacklistedEmails, &format!("u{i}@spam.io"))
            .await;
    }
    c.dashboard.select_view(View::BlacklistedEmails);
    c.tables.load_page(&c.session, &mut c.emails, 2).await;
    assert_eq!(values(&c.emails), vec!["u5@spam.io"]);

    let id = c.emails.items()[0].id.clone();
    let notes = c.tables.delete(&c.session, &mut c.emails, &id).await;

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].message, "Email deleted successfully");
    assert_eq!(c.emails.current_page(), 1);
    assert_eq!(c.emails.items().len(), 5);
    assert_eq!(c.emails.footer_range(), Some((1, 5, 5)));
}

#[tokio::test]
async fn failed_fetch_shows_error_panel_then_recovers() {
    let mut c = console().await;
    c.backend.insert(ResourceKind::BlacklistedDomains, "a.com").await;
    c.tables.load_page(&c.session, &mut c.domains, 1).await;

    *c.backend.fail_lists.write().await = true;
    let note = c.tables.load_page(&c.session, &mut c.domains, 1).await;
    assert!(note.unwrap().is_error());
    assert_eq!(c.domains.phase(), &TablePhase::Errored("Failed to fetch domains".into()));

    *c.backend.fail_lists.write().await = false;
    let ticket = c.domains.refresh();
    assert!(c.tables.fetch(&c.session, &mut c.domains, ticket).await.is_none());
    assert_eq!(c.domains.phase(), &TablePhase::Loaded);
}

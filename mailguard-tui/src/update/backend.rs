//! 后台结果更新逻辑

use mailguard_core::types::{AuthContext, Notification};
use mailguard_core::CoreError;

use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::{App, ValidatorStatus};

use super::{after_login, notify_error, push_fetch};

/// 处理后台任务结果
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::Fetched { ticket, result } => {
            if let Some(notification) = app.tables.get_mut(ticket.kind).finish_fetch(&ticket, result) {
                app.notify(notification);
            }
        }

        BackendMessage::Deleted { ticket, result } => {
            let outcome = app.tables.get_mut(ticket.kind).finish_delete(&ticket.id, result);
            app.notify(outcome.notification);
            if let Some(follow_up) = outcome.follow_up {
                push_fetch(app, follow_up);
            }
        }

        // 刷新由 RefreshSignal 在下一次 Tick 处理
        BackendMessage::Mutated(notification) => app.notify(notification),

        BackendMessage::Exported(result) => match result {
            Ok(path) => app.notify(Notification::success(format!(
                "Exported to {}",
                path.display()
            ))),
            Err(e) => {
                e.log("export valid emails");
                notify_error(app, "Failed to export valid emails");
            }
        },

        BackendMessage::Validated(result) => {
            app.validator.status = match result {
                Ok(report) => ValidatorStatus::Done(Box::new(report)),
                Err(e) => {
                    e.log("validate email");
                    ValidatorStatus::Failed
                }
            };
        }

        BackendMessage::LoggedIn(result) => match result {
            Ok(session) => {
                log::info!("signed in as {}", session.user.email);
                app.auth = AuthContext::from_session(session);
                after_login(app);
            }
            Err(e) => {
                e.log("login");
                let texts = &t().login;
                app.login.pending = false;
                app.login.error = Some(
                    match e {
                        CoreError::AccessDenied(_) => texts.admin_only,
                        _ => texts.failed,
                    }
                    .to_string(),
                );
            }
        },

        BackendMessage::SessionRestored(result) => match result {
            Ok(Some(session)) => {
                log::info!("restored session for {}", session.user.email);
                app.auth = AuthContext::from_session(session);
            }
            Ok(None) => log::debug!("no stored session"),
            Err(e) => e.log("restore session"),
        },

        BackendMessage::LoggedOut(result) => match result {
            Ok(()) => app.notify(Notification::success(t().login.logged_out)),
            Err(e) => {
                e.log("clear session");
                notify_error(app, e.to_string());
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Command, Page};
    use crate::update::open_page;
    use crate::update::tests::{admin_app, session};
    use chrono::Utc;
    use mailguard_core::services::{DeleteTicket, FetchTicket, TablePhase, View};
    use mailguard_core::types::{
        ListPage, ListQuery, PaginationMeta, ResourceKind, ResourceRow, Role,
    };
    use std::path::PathBuf;

    fn row(id: &str) -> ResourceRow {
        ResourceRow {
            id: id.into(),
            value: format!("{id}.com"),
            created_at: Utc::now(),
            detail: None,
        }
    }

    fn domains_ticket(page: u32) -> FetchTicket {
        FetchTicket {
            kind: ResourceKind::BlacklistedDomains,
            query: ListQuery::new(page, 5, ""),
        }
    }

    fn page_of(ids: &[&str], total_items: u32, current_page: u32) -> ListPage<ResourceRow> {
        ListPage {
            items: ids.iter().map(|id| row(id)).collect(),
            pagination: PaginationMeta {
                total_items,
                total_pages: total_items.div_ceil(5),
                current_page,
                items_per_page: 5,
            },
        }
    }

    // ---- fetch ----

    #[test]
    fn fetch_failure_errors_table_and_toasts() {
        let mut app = admin_app();
        update(
            &mut app,
            BackendMessage::Fetched {
                ticket: domains_ticket(1),
                result: Err(CoreError::NetworkError("refused".into())),
            },
        );
        let table = app.tables.get(ResourceKind::BlacklistedDomains);
        assert_eq!(
            table.phase(),
            &TablePhase::Errored("Failed to fetch domains".into())
        );
        assert_eq!(
            app.toasts.latest().map(|t| t.notification.message.as_str()),
            Some("Failed to fetch domains")
        );
    }

    // ---- delete ----

    #[test]
    fn deleting_sole_row_on_page_two_steps_back() {
        let mut app = admin_app();
        update(
            &mut app,
            BackendMessage::Fetched {
                ticket: domains_ticket(2),
                result: Ok(page_of(&["d6"], 6, 2)),
            },
        );

        update(
            &mut app,
            BackendMessage::Deleted {
                ticket: DeleteTicket {
                    kind: ResourceKind::BlacklistedDomains,
                    id: "d6".into(),
                },
                result: Ok(()),
            },
        );

        assert_eq!(
            app.toasts.latest().map(|t| t.notification.message.as_str()),
            Some("Domain deleted successfully")
        );
        assert!(matches!(
            app.take_commands().as_slice(),
            [Command::Fetch { ticket, .. }] if ticket.query.page == 1
        ));
    }

    // ---- export / validate ----

    #[test]
    fn export_result_toasts_path() {
        let mut app = admin_app();
        update(
            &mut app,
            BackendMessage::Exported(Ok(PathBuf::from("valid-emails.csv"))),
        );
        assert_eq!(
            app.toasts.latest().map(|t| t.notification.message.as_str()),
            Some("Exported to valid-emails.csv")
        );
    }

    #[test]
    fn validation_failure_marks_failed() {
        let mut app = admin_app();
        app.validator.status = ValidatorStatus::Pending;
        update(
            &mut app,
            BackendMessage::Validated(Err(CoreError::Timeout("slow".into()))),
        );
        assert_eq!(app.validator.status, ValidatorStatus::Failed);
    }

    // ---- login ----

    #[test]
    fn login_success_follows_redirect() {
        let mut app = crate::model::App::new(5);
        app.take_commands();
        open_page(&mut app, Page::Dashboard(View::BlacklistedEmails));
        assert_eq!(app.current_page, Page::Login);

        update(&mut app, BackendMessage::LoggedIn(Ok(session(Role::Admin))));
        assert_eq!(app.current_page, Page::Dashboard(View::BlacklistedEmails));
        assert!(app.login.redirect.is_none());
        assert!(matches!(
            app.take_commands().as_slice(),
            [Command::Fetch { ticket, .. }] if ticket.kind == ResourceKind::BlacklistedEmails
        ));
    }

    #[test]
    fn login_without_redirect_lands_on_valid_emails() {
        let mut app = crate::model::App::new(5);
        app.take_commands();
        app.current_page = Page::Login;
        update(&mut app, BackendMessage::LoggedIn(Ok(session(Role::Admin))));
        assert_eq!(app.current_page, Page::Dashboard(View::ValidEmails));
    }

    #[test]
    fn access_denied_shows_admin_only_message() {
        let mut app = crate::model::App::new(5);
        app.take_commands();
        app.current_page = Page::Login;
        app.login.pending = true;

        update(
            &mut app,
            BackendMessage::LoggedIn(Err(CoreError::AccessDenied("not admin".into()))),
        );
        assert!(!app.login.pending);
        assert_eq!(app.login.error.as_deref(), Some(t().login.admin_only));
        assert_eq!(app.current_page, Page::Login);
    }

    #[test]
    fn restored_session_unlocks_dashboard() {
        let mut app = crate::model::App::new(5);
        app.take_commands();
        update(
            &mut app,
            BackendMessage::SessionRestored(Ok(Some(session(Role::Admin)))),
        );
        assert!(app.auth.is_authenticated());
    }
}

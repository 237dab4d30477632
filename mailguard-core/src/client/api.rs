//! `AdminApi` trait 实现

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::traits::AdminApi;
use crate::types::{
    BlacklistedDomain, BlacklistedEmail, ListPage, ListQuery, PaginationMeta, ResourceKind,
    ResourceRow, Session, ValidEmail, ValidationReport,
};

use super::types::{
    AddDomainsBody, AddEmailsBody, DomainEntry, EmailEntry, ListEnvelope, LoginBody,
    LoginResponse,
};
use super::{Endpoint, HttpAdminClient};

/// 无请求体占位
const NO_BODY: Option<&()> = None;

impl HttpAdminClient {
    /// 拉取一页并转换为统一的表格行
    async fn list_as<T>(
        &self,
        session: &Session,
        kind: ResourceKind,
        query: &ListQuery,
    ) -> CoreResult<ListPage<ResourceRow>>
    where
        T: DeserializeOwned + Into<ResourceRow> + Send,
    {
        let query = query.validated();
        let envelope: ListEnvelope<T> = self
            .send_json(&Endpoint::list(kind), Some(session), &query.to_pairs(), NO_BODY)
            .await?;

        let items: Vec<ResourceRow> = envelope.data.into_iter().map(Into::into).collect();
        let pagination = envelope.pagination.unwrap_or_else(|| {
            log::warn!("[admin-api] {kind:?} list response carried no pagination block");
            let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
            PaginationMeta {
                total_items: total,
                total_pages: u32::from(total > 0),
                current_page: query.page,
                items_per_page: query.limit,
            }
        });

        Ok(ListPage { items, pagination })
    }
}

#[async_trait]
impl AdminApi for HttpAdminClient {
    async fn login(&self, email: &str, password: &str) -> CoreResult<Session> {
        let body = LoginBody { email, password };
        let response: LoginResponse = self
            .send_json(&Endpoint::login(), None, &[], Some(&body))
            .await?;
        Ok(Session {
            user: response.user,
            token: response.token,
        })
    }

    async fn list(
        &self,
        session: &Session,
        kind: ResourceKind,
        query: &ListQuery,
    ) -> CoreResult<ListPage<ResourceRow>> {
        match kind {
            ResourceKind::ValidEmails => self.list_as::<ValidEmail>(session, kind, query).await,
            ResourceKind::BlacklistedDomains => {
                self.list_as::<BlacklistedDomain>(session, kind, query).await
            }
            ResourceKind::BlacklistedEmails => {
                self.list_as::<BlacklistedEmail>(session, kind, query).await
            }
        }
    }

    async fn add(&self, session: &Session, kind: ResourceKind, values: &[String]) -> CoreResult<()> {
        let endpoint = Endpoint::add(kind)?;
        if values.is_empty() {
            return Err(CoreError::ValidationError(format!(
                "no {} to add",
                kind.plural()
            )));
        }

        match kind {
            ResourceKind::BlacklistedDomains => {
                let body = AddDomainsBody {
                    domains: values.iter().map(|d| DomainEntry { domain: d }).collect(),
                };
                self.send(&endpoint, Some(session), &[], Some(&body)).await?;
            }
            _ => {
                let body = AddEmailsBody {
                    emails: values.iter().map(|e| EmailEntry { email: e }).collect(),
                };
                self.send(&endpoint, Some(session), &[], Some(&body)).await?;
            }
        }
        Ok(())
    }

    async fn update(
        &self,
        session: &Session,
        kind: ResourceKind,
        id: &str,
        value: &str,
    ) -> CoreResult<()> {
        let endpoint = Endpoint::update(kind, id)?;
        match kind {
            ResourceKind::BlacklistedDomains => {
                let body = DomainEntry { domain: value };
                self.send(&endpoint, Some(session), &[], Some(&body)).await?;
            }
            _ => {
                let body = EmailEntry { email: value };
                self.send(&endpoint, Some(session), &[], Some(&body)).await?;
            }
        }
        Ok(())
    }

    async fn delete(&self, session: &Session, kind: ResourceKind, id: &str) -> CoreResult<()> {
        let endpoint = Endpoint::delete(kind, id)?;
        self.send(&endpoint, Some(session), &[], NO_BODY).await?;
        Ok(())
    }

    async fn validate_email(&self, email: &str) -> CoreResult<ValidationReport> {
        let body = EmailEntry { email };
        self.send_json(&Endpoint::validate(), None, &[], Some(&body))
            .await
    }
}

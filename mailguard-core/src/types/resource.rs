use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::datetime;

// ============ Resource kinds ============

/// The three collections managed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    /// Addresses that passed validation (read-only)
    ValidEmails,
    /// Domains rejected by the validator
    BlacklistedDomains,
    /// Addresses rejected by the validator
    BlacklistedEmails,
}

impl ResourceKind {
    pub const ALL: [Self; 3] = [
        Self::ValidEmails,
        Self::BlacklistedDomains,
        Self::BlacklistedEmails,
    ];

    /// Noun for a single row, e.g. "domain".
    pub fn singular(self) -> &'static str {
        match self {
            Self::BlacklistedDomains => "domain",
            Self::ValidEmails | Self::BlacklistedEmails => "email",
        }
    }

    /// Noun for several rows, e.g. "domains".
    pub fn plural(self) -> &'static str {
        match self {
            Self::BlacklistedDomains => "domains",
            Self::ValidEmails | Self::BlacklistedEmails => "emails",
        }
    }

    /// Whether rows can be added, edited and deleted.
    pub fn is_mutable(self) -> bool {
        !matches!(self, Self::ValidEmails)
    }
}

// ============ Wire records ============

/// `{_id, domain, createdAt}` from `/getBlacklistedDomains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistedDomain {
    #[serde(rename = "_id")]
    pub id: String,
    pub domain: String,
    #[serde(rename = "createdAt", with = "datetime")]
    pub created_at: DateTime<Utc>,
}

/// `{_id, email, createdAt, reason?}` from `/getBlacklistedEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistedEmail {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "createdAt", with = "datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// `{_id, email, createdAt|validationDate, status}` from `/getValidEmails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidEmail {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "createdAt", alias = "validationDate", with = "datetime")]
    pub validated_at: DateTime<Utc>,
    #[serde(default = "default_valid_status")]
    pub status: String,
}

fn default_valid_status() -> String {
    "valid".to_string()
}

// ============ Display row ============

/// One table row, independent of the collection it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRow {
    pub id: String,
    /// Domain or email address
    pub value: String,
    pub created_at: DateTime<Utc>,
    /// Reason (blacklisted emails) or status (valid emails)
    pub detail: Option<String>,
}

impl From<BlacklistedDomain> for ResourceRow {
    fn from(d: BlacklistedDomain) -> Self {
        Self {
            id: d.id,
            value: d.domain,
            created_at: d.created_at,
            detail: None,
        }
    }
}

impl From<BlacklistedEmail> for ResourceRow {
    fn from(e: BlacklistedEmail) -> Self {
        Self {
            id: e.id,
            value: e.email,
            created_at: e.created_at,
            detail: e.reason,
        }
    }
}

impl From<ValidEmail> for ResourceRow {
    fn from(e: ValidEmail) -> Self {
        Self {
            id: e.id,
            value: e.email,
            created_at: e.validated_at,
            detail: Some(e.status),
        }
    }
}

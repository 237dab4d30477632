use serde::{Deserialize, Serialize};
use std::fmt;

/// Role attached to a console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Any non-administrative role
    #[serde(other)]
    User,
}

/// Logged-in user as returned by `/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// An authenticated admin session.
///
/// Only [`AuthContext::guard`] hands these out, so holding one means the
/// guard has passed. Every authenticated request takes it explicitly.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &crate::utils::log_sanitizer::redact_token(&self.token))
            .finish()
    }
}

impl Session {
    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Why the guard refused access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRejection {
    NoUser,
    NoToken,
    NotAdmin,
}

impl fmt::Display for GuardRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoUser => write!(f, "not logged in"),
            Self::NoToken => write!(f, "missing session token"),
            Self::NotAdmin => write!(f, "administrator role required"),
        }
    }
}

/// Current `{user, token}` pair held by the front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthContext {
    pub fn from_session(session: Session) -> Self {
        Self {
            user: Some(session.user),
            token: Some(session.token),
        }
    }

    /// Grants access only with a user, a non-empty token and the admin role.
    pub fn guard(&self) -> Result<Session, GuardRejection> {
        let user = self.user.as_ref().ok_or(GuardRejection::NoUser)?;
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(GuardRejection::NoToken)?;
        if user.role != Role::Admin {
            return Err(GuardRejection::NotAdmin);
        }
        Ok(Session {
            user: user.clone(),
            token: token.to_string(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.guard().is_ok()
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}

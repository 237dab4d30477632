use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// Overall verdict shown on the validator page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    Valid,
    Invalid,
    /// Any other `result` (e.g. "unknown", "risky")
    Unknown,
}

/// Response of `POST /emailvalidator`.
///
/// Every field is carried as a string; flags are set only when the value is `"true"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(default, deserialize_with = "lenient::string")]
    pub result: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub reason: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub disposable: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub accept_all: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub free: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub user: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub domain: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mx_record: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mx_domain: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub safe_to_send: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub did_you_mean: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub success: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: String,
}

/// `"true"` is the only truthy flag value.
fn flag(value: &str) -> bool {
    value == "true"
}

impl ValidationReport {
    pub fn status(&self) -> ValidationStatus {
        match self.result.as_str() {
            "valid" => ValidationStatus::Valid,
            "invalid" => ValidationStatus::Invalid,
            _ => ValidationStatus::Unknown,
        }
    }

    pub fn is_free(&self) -> bool {
        flag(&self.free)
    }

    pub fn is_role(&self) -> bool {
        flag(&self.role)
    }

    pub fn is_disposable(&self) -> bool {
        flag(&self.disposable)
    }

    pub fn is_accept_all(&self) -> bool {
        flag(&self.accept_all)
    }

    pub fn is_safe_to_send(&self) -> bool {
        flag(&self.safe_to_send)
    }

    /// Spelling suggestion, when the validator offered one.
    pub fn suggestion(&self) -> Option<&str> {
        let s = self.did_you_mean.trim();
        (!s.is_empty()).then_some(s)
    }

    /// Server message, when non-empty.
    pub fn note(&self) -> Option<&str> {
        let s = self.message.trim();
        (!s.is_empty()).then_some(s)
    }
}

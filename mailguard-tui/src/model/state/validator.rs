//! 公开校验页状态

use mailguard_core::types::ValidationReport;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidatorStatus {
    #[default]
    Idle,
    /// "Validating..."
    Pending,
    Failed,
    Done(Box<ValidationReport>),
}

#[derive(Debug, Default)]
pub struct ValidatorState {
    pub input: String,
    pub status: ValidatorStatus,
}

impl ValidatorState {
    pub fn is_pending(&self) -> bool {
        self.status == ValidatorStatus::Pending
    }
}

//! 状态栏提示

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use mailguard_core::types::Notification;

/// 提示显示时长
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// 同时保留的提示上限
const MAX_TOASTS: usize = 8;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub created: Instant,
}

#[derive(Debug, Default)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
}

impl ToastState {
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        if notification.is_error() {
            log::warn!("toast: {}", notification.message);
        } else {
            log::info!("toast: {}", notification.message);
        }
        self.toasts.push_back(Toast {
            notification,
            created: now,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// 移除超过 [`TOAST_TTL`] 的提示
    pub fn prune(&mut self, now: Instant) {
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created) < TOAST_TTL);
    }

    /// 最新的一条
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }
}

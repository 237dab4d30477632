//! 列表刷新信号
//!
//! Dashboard 持有发送端，在变更成功后广播 `RefreshRequest`；
//! 每个 `ResourceTable` 持有一个订阅，只响应与自己类型相同的请求。

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use crate::types::ResourceKind;

/// 广播通道容量
const CHANNEL_CAPACITY: usize = 16;

/// 请求某类资源表重新拉取当前页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshRequest {
    pub kind: ResourceKind,
}

/// 刷新信号（可克隆，跨线程触发）
#[derive(Debug, Clone)]
pub struct RefreshSignal {
    tx: broadcast::Sender<RefreshRequest>,
}

impl RefreshSignal {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// 触发刷新，没有订阅者时静默忽略
    pub fn trigger(&self, kind: ResourceKind) {
        if self.tx.send(RefreshRequest { kind }).is_err() {
            log::debug!("refresh for {kind:?} dropped: no subscribers");
        }
    }

    pub fn subscribe(&self) -> RefreshSubscription {
        RefreshSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// 刷新订阅
#[derive(Debug)]
pub struct RefreshSubscription {
    rx: broadcast::Receiver<RefreshRequest>,
}

impl RefreshSubscription {
    /// 取走所有待处理请求，返回其中是否有针对 `kind` 的
    ///
    /// 订阅落后（`Lagged`）时无法得知丢失的内容，按需要刷新处理。
    pub fn take_pending(&mut self, kind: ResourceKind) -> bool {
        let mut requested = false;
        loop {
            match self.rx.try_recv() {
                Ok(request) => requested |= request.kind == kind,
                Err(TryRecvError::Lagged(skipped)) => {
                    log::warn!("refresh subscription for {kind:?} lagged by {skipped}");
                    requested = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_matching_kind_is_reported() {
        let signal = RefreshSignal::new();
        let mut domains = signal.subscribe();
        let mut emails = signal.subscribe();

        signal.trigger(ResourceKind::BlacklistedDomains);

        assert!(domains.take_pending(ResourceKind::BlacklistedDomains));
        assert!(!emails.take_pending(ResourceKind::BlacklistedEmails));
        // drained
        assert!(!domains.take_pending(ResourceKind::BlacklistedDomains));
    }

    #[test]
    fn repeated_triggers_collapse_into_one() {
        let signal = RefreshSignal::new();
        let mut sub = signal.subscribe();
        signal.trigger(ResourceKind::BlacklistedEmails);
        signal.trigger(ResourceKind::BlacklistedEmails);
        assert!(sub.take_pending(ResourceKind::BlacklistedEmails));
        assert!(!sub.take_pending(ResourceKind::BlacklistedEmails));
    }

    #[test]
    fn lagged_subscription_requests_refresh() {
        let signal = RefreshSignal::new();
        let mut sub = signal.subscribe();
        for _ in 0..(CHANNEL_CAPACITY + 4) {
            signal.trigger(ResourceKind::ValidEmails);
        }
        assert!(sub.take_pending(ResourceKind::BlacklistedDomains));
    }

    #[test]
    fn trigger_without_subscribers_is_harmless() {
        RefreshSignal::new().trigger(ResourceKind::BlacklistedDomains);
    }

    #[test]
    fn signal_is_shared_across_threads() {
        let signal = RefreshSignal::new();
        let mut sub = signal.subscribe();
        let remote = signal.clone();
        std::thread::spawn(move || remote.trigger(ResourceKind::BlacklistedDomains))
            .join()
            .unwrap();
        assert!(sub.take_pending(ResourceKind::BlacklistedDomains));
    }
}

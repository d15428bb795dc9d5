use crate::domain::model::{Severity, Toast};
use crate::domain::ports::NotificationSink;
use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone)]
struct Pending {
    toast: Toast,
    shown_at: Instant,
}

/// In-memory toast sink. Toasts stay pending until their duration elapses.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    default_duration_ms: u64,
    pending: Vec<Pending>,
}

impl ToastQueue {
    pub fn new(default_duration_ms: u64) -> Self {
        Self {
            default_duration_ms,
            pending: Vec::new(),
        }
    }

    pub fn default_duration_ms(&self) -> u64 {
        self.default_duration_ms
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        self.notify(&message, severity, self.default_duration_ms);
    }

    pub fn push_at(&mut self, toast: Toast, shown_at: Instant) {
        match toast.severity {
            Severity::Error => tracing::error!("🔔 {}", toast.message),
            Severity::Warning => tracing::warn!("🔔 {}", toast.message),
            Severity::Success | Severity::Info => tracing::info!("🔔 {}", toast.message),
        }
        self.pending.push(Pending { toast, shown_at });
    }

    /// Drop toasts whose display time has run out at `now`.
    pub fn expire(&mut self, now: Instant) {
        self.pending.retain(|p| {
            now.saturating_duration_since(p.shown_at) < Duration::from_millis(p.toast.duration_ms)
        });
    }

    pub fn pending(&self) -> impl Iterator<Item = &Toast> {
        self.pending.iter().map(|p| &p.toast)
    }

    pub fn last(&self) -> Option<&Toast> {
        self.pending.last().map(|p| &p.toast)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION_MS)
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&mut self, message: &str, severity: Severity, duration_ms: u64) {
        let toast = Toast {
            message: message.to_string(),
            severity,
            duration_ms,
        };
        self.push_at(toast, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_after_their_duration() {
        let mut queue = ToastQueue::new(1000);
        let start = Instant::now();
        queue.push_at(
            Toast {
                message: "short".to_string(),
                severity: Severity::Info,
                duration_ms: 100,
            },
            start,
        );
        queue.push_at(
            Toast {
                message: "long".to_string(),
                severity: Severity::Error,
                duration_ms: 5000,
            },
            start,
        );

        queue.expire(start + Duration::from_millis(99));
        assert_eq!(queue.len(), 2);

        queue.expire(start + Duration::from_millis(100));
        let left: Vec<_> = queue.pending().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["long"]);
    }

    #[test]
    fn test_push_uses_default_duration() {
        let mut queue = ToastQueue::default();
        queue.push("Copied: SKU1", Severity::Success);
        let toast = queue.last().unwrap();
        assert_eq!(toast.duration_ms, DEFAULT_TOAST_DURATION_MS);
        assert_eq!(toast.severity, Severity::Success);
    }
}

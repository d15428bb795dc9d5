use crate::domain::model::Severity;
use crate::domain::ports::{NotificationSink, SessionApi};
use std::time::Duration;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Active,
    Expired { redirect_to: String },
}

/// Periodically asks the server whether the session is still valid and
/// yields the login redirect once it is not.
pub struct SessionWatcher<A: SessionApi> {
    api: A,
    login_path: String,
}

impl<A: SessionApi> SessionWatcher<A> {
    pub fn new(api: A, login_path: impl Into<String>) -> Self {
        Self {
            api,
            login_path: login_path.into(),
        }
    }

    /// One check. A failed request is reported and counted as still active.
    pub async fn check<N: NotificationSink>(&self, sink: &mut N, toast_ms: u64) -> SessionOutcome {
        match self.api.check_session().await {
            Ok(status) if status.authenticated => SessionOutcome::Active,
            Ok(_) => {
                tracing::info!("Session expired, redirecting to {}", self.login_path);
                SessionOutcome::Expired {
                    redirect_to: self.login_path.clone(),
                }
            }
            Err(e) => {
                tracing::warn!("Session check failed: {}", e);
                sink.notify(
                    &format!("Session check failed: {}", e.user_friendly_message()),
                    Severity::Warning,
                    toast_ms,
                );
                SessionOutcome::Active
            }
        }
    }

    /// Poll every `interval` until the session expires; returns the redirect target.
    pub async fn run<N: NotificationSink>(
        &self,
        sink: &mut N,
        interval: Duration,
        toast_ms: u64,
    ) -> String {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if let SessionOutcome::Expired { redirect_to } = self.check(sink, toast_ms).await {
                return redirect_to;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::toast::ToastQueue;
    use crate::domain::model::SessionStatus;
    use crate::utils::error::{PanelError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Scripted {
        answers: Vec<Option<bool>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SessionApi for Scripted {
        async fn check_session(&self) -> Result<SessionStatus> {
            let i = self.calls.fetch_add(1, Ordering::SeqCst);
            match self.answers.get(i).copied().flatten() {
                Some(authenticated) => Ok(SessionStatus { authenticated }),
                None => Err(PanelError::UnexpectedResponse {
                    endpoint: "/check-session".to_string(),
                    status: 502,
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_failure_is_reported_and_treated_as_active() {
        let watcher = SessionWatcher::new(
            Scripted {
                answers: vec![None],
                calls: AtomicUsize::new(0),
            },
            DEFAULT_LOGIN_PATH,
        );
        let mut toasts = ToastQueue::default();

        assert_eq!(watcher.check(&mut toasts, 3000).await, SessionOutcome::Active);
        assert_eq!(toasts.last().unwrap().severity, Severity::Warning);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_at_first_expiry() {
        let watcher = SessionWatcher::new(
            Scripted {
                answers: vec![Some(true), None, Some(true), Some(false)],
                calls: AtomicUsize::new(0),
            },
            "/login",
        );
        let mut toasts = ToastQueue::default();

        let redirect = watcher
            .run(&mut toasts, Duration::from_secs(60), 3000)
            .await;
        assert_eq!(redirect, "/login");
        assert_eq!(watcher.api.calls.load(Ordering::SeqCst), 4);
        assert_eq!(toasts.len(), 1);
    }
}

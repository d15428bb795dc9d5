use crate::domain::model::{DeleteFileResponse, SessionStatus, Severity};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SessionApi: Send + Sync {
    async fn check_session(&self) -> Result<SessionStatus>;
}

#[async_trait]
pub trait FileApi: Send + Sync {
    async fn delete_file(&self, file_id: &str) -> Result<DeleteFileResponse>;
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

pub trait NotificationSink {
    fn notify(&mut self, message: &str, severity: Severity, duration_ms: u64);
}

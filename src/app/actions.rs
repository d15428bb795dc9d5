//! One-shot user actions that talk to a collaborator and report the result
//! as a toast. Failures are terminal for the action; nothing is retried.

use crate::domain::model::Severity;
use crate::domain::ports::{Clipboard, FileApi, NotificationSink};
use crate::utils::error::{PanelError, Result};

pub fn copy_text<C: Clipboard, N: NotificationSink>(
    clipboard: &mut C,
    sink: &mut N,
    text: &str,
    toast_ms: u64,
) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => {
            sink.notify(&format!("Copied: {}", text), Severity::Success, toast_ms);
            true
        }
        Err(e) => {
            tracing::warn!("Clipboard write failed: {}", e);
            sink.notify("Failed to copy", Severity::Error, toast_ms);
            false
        }
    }
}

/// Delete a stock file. The outcome is always toasted; a rejected or failed
/// delete is also returned as an error so callers can stop there.
pub async fn delete_file<A: FileApi, N: NotificationSink>(
    api: &A,
    sink: &mut N,
    file_id: &str,
    toast_ms: u64,
) -> Result<String> {
    match api.delete_file(file_id).await {
        Ok(resp) if resp.success => {
            let message = resp.message.unwrap_or_else(|| "File deleted".to_string());
            tracing::info!(file_id, "🗑️ {}", message);
            sink.notify(&message, Severity::Success, toast_ms);
            Ok(message)
        }
        Ok(resp) => {
            let error = resp.error.unwrap_or_else(|| "Delete failed".to_string());
            tracing::warn!(file_id, "Delete rejected: {}", error);
            sink.notify(&error, Severity::Error, toast_ms);
            Err(PanelError::ProcessingError { message: error })
        }
        Err(e) => {
            tracing::error!(file_id, "Delete request failed: {}", e);
            sink.notify(
                &format!("Network error: {}", e.user_friendly_message()),
                Severity::Error,
                toast_ms,
            );
            Err(e)
        }
    }
}

/// Clipboard that keeps the last written text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

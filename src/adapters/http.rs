use crate::domain::model::{DeleteFileResponse, SessionStatus};
use crate::domain::ports::{FileApi, SessionApi};
use crate::utils::error::{PanelError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the stock-checker server endpoints.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    base_url: Url,
    client: Client,
}

impl DashboardClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| PanelError::InvalidConfigValueError {
            field: "server.base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;
        // Url::join drops the last segment unless the base ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| PanelError::ConfigError {
                message: format!("Cannot build URL for '{}': {}", path, e),
            })
    }
}

#[async_trait]
impl SessionApi for DashboardClient {
    async fn check_session(&self) -> Result<SessionStatus> {
        let url = self.endpoint("/check-session")?;
        tracing::debug!("Checking session at {}", url);

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(PanelError::UnexpectedResponse {
                endpoint: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<SessionStatus>().await?)
    }
}

#[async_trait]
impl FileApi for DashboardClient {
    async fn delete_file(&self, file_id: &str) -> Result<DeleteFileResponse> {
        let mut url = self.endpoint("/delete-file/")?;
        url.path_segments_mut()
            .map_err(|_| PanelError::ConfigError {
                message: "server.base_url cannot be a base URL".to_string(),
            })?
            .pop_if_empty()
            .push(file_id);
        tracing::debug!("Deleting file via {}", url);

        let response = self.client.post(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // The server answers 404/500 with the same JSON shape.
        match serde_json::from_str::<DeleteFileResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) if status.is_success() => Err(PanelError::SerializationError(e)),
            Err(_) => Err(PanelError::UnexpectedResponse {
                endpoint: url.to_string(),
                status: status.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_respect_base_path() {
        let client = DashboardClient::new("http://localhost:5000/stock", None).unwrap();
        assert_eq!(
            client.endpoint("/check-session").unwrap().as_str(),
            "http://localhost:5000/stock/check-session"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(DashboardClient::new("not a url", None).is_err());
    }
}

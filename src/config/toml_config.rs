use crate::app::debounce::DEFAULT_DEBOUNCE_MS;
use crate::app::pagination::DEFAULT_PER_PAGE;
use crate::app::session::{DEFAULT_CHECK_INTERVAL_SECS, DEFAULT_LOGIN_PATH};
use crate::app::toast::DEFAULT_TOAST_DURATION_MS;
use crate::app::upload::{UploadRules, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_UPLOAD_BYTES};
use crate::utils::error::{PanelError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub server: ServerConfig,
    pub http: HttpConfig,
    pub session: SessionConfig,
    pub search: SearchConfig,
    pub pagination: PaginationConfig,
    pub toast: ToastConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub login_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// No timeout unless set.
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub check_interval_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            check_interval_seconds: DEFAULT_CHECK_INTERVAL_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub per_page: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl PanelConfig {
    /// Load the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PanelError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PanelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expand `${VAR}` references (e.g. `${STOCKCHECK_URL}`). Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http.timeout_seconds.map(Duration::from_secs)
    }

    pub fn session_interval(&self) -> Duration {
        Duration::from_secs(self.session.check_interval_seconds)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn upload_rules(&self) -> UploadRules {
        UploadRules {
            max_bytes: self.upload.max_bytes,
            allowed_extensions: self.upload.allowed_extensions.clone(),
        }
    }
}

impl Validate for PanelConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("server.base_url", &self.server.base_url)?;
        validation::validate_route_path("server.login_path", &self.server.login_path)?;

        if let Some(timeout) = self.http.timeout_seconds {
            validation::validate_positive_number("http.timeout_seconds", timeout, 1)?;
        }
        validation::validate_range(
            "session.check_interval_seconds",
            self.session.check_interval_seconds,
            1,
            86_400,
        )?;
        validation::validate_range("search.debounce_ms", self.search.debounce_ms, 0, 10_000)?;
        validation::validate_positive_number("pagination.per_page", self.pagination.per_page, 1)?;
        validation::validate_positive_number("toast.duration_ms", self.toast.duration_ms, 1)?;
        validation::validate_positive_number("upload.max_bytes", self.upload.max_bytes, 1)?;
        validation::validate_extension_list(
            "upload.allowed_extensions",
            &self.upload.allowed_extensions,
        )?;

        Ok(())
    }
}

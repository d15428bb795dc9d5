use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unexpected response from {endpoint}: HTTP {status}")]
    UnexpectedResponse { endpoint: String, status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, PanelError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Data,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PanelError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::UnexpectedResponse { .. } => ErrorCategory::Network,
            Self::IoError(_) => ErrorCategory::Storage,
            Self::CsvError(_) | Self::SerializationError(_) | Self::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Short message suitable for a toast or stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_connect() => "Could not reach the server".to_string(),
            Self::ApiError(_) | Self::UnexpectedResponse { .. } => {
                "The server returned an unexpected response".to_string()
            }
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Could not format the output".to_string()
            }
            Self::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the dashboard server is running and reachable",
            ErrorCategory::Storage => "Check the file path and its permissions",
            ErrorCategory::Data => "Check the data the server returned or try another output format",
            ErrorCategory::Configuration => "Review the configuration file and environment variables",
            ErrorCategory::Validation => "Fix the input and try again",
        }
    }
}

//! Client-side checks run before a stock file is posted to `/upload`.

use crate::utils::error::{PanelError, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

static STOCK_FILE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"CheckStockTempFile_(\d{2}-\d{2}-\d{2})").expect("stock file pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadCandidate {
    pub file_name: String,
    pub file_date: NaiveDate,
    pub size_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct UploadRules {
    pub max_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadRules {
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

impl UploadRules {
    pub fn check_extension(&self, file_name: &str) -> Result<()> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| PanelError::validation("File has no extension"))?;

        if self.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(&extension)) {
            Ok(())
        } else {
            Err(PanelError::validation(format!(
                "Invalid file type. Please upload {} files.",
                self.allowed_extensions
                    .iter()
                    .map(|e| format!(".{}", e))
                    .collect::<Vec<_>>()
                    .join(" or ")
            )))
        }
    }

    pub fn check_size(&self, size_bytes: u64) -> Result<()> {
        if size_bytes == 0 {
            return Err(PanelError::validation("File is empty"));
        }
        if size_bytes > self.max_bytes {
            return Err(PanelError::validation(format!(
                "File is too large ({} bytes, limit {} bytes)",
                size_bytes, self.max_bytes
            )));
        }
        Ok(())
    }

    /// Validate name and size and pull the stock date out of the file name.
    pub fn validate(&self, file_name: &str, size_bytes: u64) -> Result<UploadCandidate> {
        if file_name.trim().is_empty() {
            return Err(PanelError::validation("No file selected"));
        }
        self.check_extension(file_name)?;
        self.check_size(size_bytes)?;
        let file_date = stock_file_date(file_name)?;

        Ok(UploadCandidate {
            file_name: file_name.to_string(),
            file_date,
            size_bytes,
        })
    }

    pub fn validate_path(&self, path: &Path) -> Result<UploadCandidate> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PanelError::validation("No file selected"))?;
        let size = std::fs::metadata(path)?.len();
        self.validate(file_name, size)
    }
}

/// Date encoded in a `CheckStockTempFile_MM-DD-YY` file name.
pub fn stock_file_date(file_name: &str) -> Result<NaiveDate> {
    let caps = STOCK_FILE_DATE.captures(file_name).ok_or_else(|| {
        PanelError::validation(
            "Invalid filename format. Expected: CheckStockTempFile_MM-DD-YY.xlsx",
        )
    })?;

    NaiveDate::parse_from_str(&caps[1], "%m-%d-%y")
        .map_err(|e| PanelError::validation(format!("Invalid date in filename '{}': {}", &caps[1], e)))
}

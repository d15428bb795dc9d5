use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "stockcheck-ui")]
#[command(about = "Container details, uploads and session checks for the stock checker dashboard")]
pub struct CliConfig {
    /// Path to TOML configuration file (optional; defaults apply without it)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override server.base_url from the config
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse a container details string into shipment entries
    Parse { details: String },

    /// Build the container details modal for one SKU
    Present {
        #[arg(long)]
        sku: String,
        #[arg(long, default_value = "")]
        details: String,
        #[arg(long, default_value = "0")]
        qty: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Ask the server whether the current session is authenticated
    CheckSession {
        /// Keep polling until the session expires
        #[arg(long)]
        watch: bool,
    },

    /// Delete an uploaded stock file and its inventory rows
    DeleteFile { file_id: String },

    /// Check a stock file before uploading it
    ValidateUpload { path: PathBuf },

    /// Show pagination links for a result set
    Paginate {
        #[arg(long)]
        total: u64,
        #[arg(long, default_value = "1")]
        page: u64,
        #[arg(long)]
        per_page: Option<u64>,
        #[arg(long, default_value = "2")]
        radius: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
    Csv,
}

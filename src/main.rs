use clap::Parser;
use stockcheck_ui::app::actions;
use stockcheck_ui::app::pagination::Pagination;
use stockcheck_ui::app::session::{SessionOutcome, SessionWatcher};
use stockcheck_ui::app::toast::ToastQueue;
use stockcheck_ui::config::cli::{Command, OutputFormat};
use stockcheck_ui::utils::error::ErrorSeverity;
use stockcheck_ui::utils::{logger, validation::Validate};
use stockcheck_ui::{CliConfig, DashboardClient, PanelConfig, Result};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // Logging
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // Exit code follows error severity
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn load_config(cli: &CliConfig) -> Result<PanelConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            PanelConfig::from_file(path)?
        }
        None => PanelConfig::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config.server.base_url = base_url.clone();
        tracing::info!("🔧 Base URL overridden to: {}", base_url);
    }

    config.validate()?;
    Ok(config)
}

async fn run(cli: CliConfig) -> Result<()> {
    let config = load_config(&cli)?;
    let mut toasts = ToastQueue::new(config.toast.duration_ms);
    let toast_ms = config.toast.duration_ms;

    match cli.command {
        Command::Parse { details } => {
            let entries = stockcheck_ui::parse(&details);
            tracing::info!("Parsed {} shipment entries", entries.len());
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Command::Present {
            sku,
            details,
            qty,
            format,
        } => {
            let view = stockcheck_ui::present(&sku, &details, &qty);
            if let Some(raw) = &view.fallback_text {
                tracing::warn!("Container details for {} could not be parsed: {}", sku, raw);
            }
            match format {
                OutputFormat::Text => print!("{}", view.render_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputFormat::Html => print!("{}", view.render_html()),
                OutputFormat::Csv => print!("{}", view.to_csv()?),
            }
        }
        Command::CheckSession { watch } => {
            let client = DashboardClient::new(&config.server.base_url, config.http_timeout())?;
            let watcher = SessionWatcher::new(client, config.server.login_path.clone());
            let outcome = if watch {
                tracing::info!(
                    "🔍 Watching session every {:?}",
                    config.session_interval()
                );
                let redirect_to = watcher
                    .run(&mut toasts, config.session_interval(), toast_ms)
                    .await;
                SessionOutcome::Expired { redirect_to }
            } else {
                watcher.check(&mut toasts, toast_ms).await
            };
            match outcome {
                SessionOutcome::Active => println!("authenticated"),
                SessionOutcome::Expired { redirect_to } => {
                    println!("expired, redirect to {}", redirect_to)
                }
            }
        }
        Command::DeleteFile { file_id } => {
            let client = DashboardClient::new(&config.server.base_url, config.http_timeout())?;
            actions::delete_file(&client, &mut toasts, &file_id, toast_ms).await?;
        }
        Command::ValidateUpload { path } => {
            let candidate = config.upload_rules().validate_path(&path)?;
            tracing::info!(
                "✅ {} is a valid stock file for {}",
                candidate.file_name,
                candidate.file_date
            );
            println!("{}", serde_json::to_string_pretty(&candidate)?);
        }
        Command::Paginate {
            total,
            page,
            per_page,
            radius,
        } => {
            let pagination = Pagination::new(
                total,
                page,
                per_page.unwrap_or(config.pagination.per_page),
            )?;
            let output = serde_json::json!({
                "pagination": pagination,
                "links": pagination.window(radius),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    for toast in toasts.pending() {
        println!("[{:?}] {}", toast.severity, toast.message);
    }

    Ok(())
}

//! Berry Catalog - Library Catalog Management Console
//!
//! An interactive console for tracking a small library's books,
//! patrons and checkouts.

use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use berry_catalog::{
    audit,
    catalog::Catalog,
    config::AppConfig,
    shell::Shell,
    snapshot::JsonFileStore,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing. Stdout belongs to the interactive session,
    // so diagnostics go to a file when one is configured and to
    // stderr otherwise.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("berry_catalog={}", config.logging.level).into());

    let _guard = match &config.logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
    };

    tracing::info!("Starting Berry Catalog v{}", env!("CARGO_PKG_VERSION"));

    println!("{:*^56}", "");
    println!("{:*^56}", " Welcome to the Berry Catalog ");
    println!("{:*^56}", "");

    let mut catalog = Catalog::new();
    let store = JsonFileStore::new(&config.files.load_path, &config.files.save_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), &mut catalog, &store);

    let operator = shell.sign_in()?;
    if let Err(e) = audit::record_session(&config.session.log_path, &operator) {
        tracing::warn!("Could not write the session log: {}", e);
    }
    tracing::info!("Operator {} signed in", operator.full_name());

    shell.load_if_present(&config.files.load_path)?;
    shell.run()?;

    tracing::info!("Session ended");
    Ok(())
}

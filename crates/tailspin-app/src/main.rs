//! # Tailspin Toys - Crowdfunding campaign pages
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads: AppConfig (file + flags)                         │
//! │    ├── Creates: InMemoryCampaignRepository (adapter)           │
//! │    ├── Seeds: bootstrap_store() before any request is served   │
//! │    └── Serves: axum router over the frozen store               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod cli;

use anyhow::Context;
use clap::Parser;
use tailspin_adapter::{router, AppState, InMemoryCampaignRepository};
use tailspin_domain::SeedOutcome;
use tailspin_shared::{AppConfig, SeedDataset};
use tailspin_usecase::{bootstrap_store, CampaignCatalog};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.clone() {
        Some(path) => AppConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    let config = cli.apply(config);

    // Initialize logging; RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🪁 Tailspin Toys - campaign pages");

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    let dataset = SeedDataset::load(&config.seed).context("Failed to load seed dataset")?;
    let boot = bootstrap_store(InMemoryCampaignRepository::new(), dataset.into_campaigns());

    match &boot.outcome {
        SeedOutcome::Seeded { .. } => {
            info!(
                count = boot.outcome.inserted_count(),
                source = ?config.seed,
                "Seeded campaign store"
            );
        }
        SeedOutcome::Skipped { existing } => {
            info!(existing, "Campaign store already populated, skipping seed");
        }
    }

    let catalog = CampaignCatalog::new(boot.repository);
    let app = router(AppState::new(catalog), &config.static_dir);

    if !config.static_dir.is_dir() {
        warn!(
            dir = %config.static_dir.display(),
            "Static directory not found, /static will return 404"
        );
    }

    // ========================================
    // Serve
    // ========================================

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

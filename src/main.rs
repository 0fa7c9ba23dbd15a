//! Funds Transfer Service - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Seed the account store
//! 3. Build HTTP router
//! 4. Start server on configured address

use std::sync::Arc;

use funds_transfer_service::{
    config::Config,
    models::account::Account,
    routes::{self, AppState},
    services::transfer_service::TransferService,
    store::{AccountStore, TransactionLog},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let accounts = AccountStore::new(Account::seed())?;
    tracing::info!(accounts = accounts.len(), "Account store seeded");

    let service = TransferService::new(Arc::new(accounts), Arc::new(TransactionLog::new()));
    let app = routes::router(AppState::new(service));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

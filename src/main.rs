//! Seatbook Server — Library Seat Management Backend
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use seatbook_core::config::AppConfig;
use seatbook_core::error::AppError;
use seatbook_database::connection::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `SEATBOOK_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SEATBOOK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Connect to the database, run migrations, and start the HTTP server.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Seatbook v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;

    seatbook_database::migration::run_migrations(db.pool()).await?;

    seatbook_api::run_server(config, db.into_pool()).await?;

    tracing::info!("Seatbook server shut down gracefully");
    Ok(())
}

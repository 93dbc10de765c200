use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use zonefine::core::ledger::FineLedger;
use zonefine::errors::Result;
use zonefine::{api, config};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {e}"))?;
    info!("Successfully processed application configuration.");

    // 4. Build and seed the fine ledger
    let ledger = FineLedger::new();
    ledger.seed(&app_config.fines).await;

    // 5. Serve the API
    let app = api::router(ledger);
    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {e}", app_config.bind_addr))?;
    info!("Fine administration API listening on {}", app_config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

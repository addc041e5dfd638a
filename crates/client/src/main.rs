//! Lobby client binary.
//!
//! Composition root that assembles:
//! 1. Configuration store via `SetupBuilder`
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Examples
//!
//! ```bash
//! LOBBY_DATA_DIR=data RUST_LOG=debug cargo run -p lobby-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{SetupBuilder, SetupConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use lobby_client::{Client, PanelRequest, format_summary};

    // 1. Load configuration from environment
    let setup_config = SetupConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting lobby client");
    tracing::info!("Data directory: {}", setup_config.data_dir.display());
    tracing::info!("Game mode: {}", setup_config.game_mode);

    // 3. Build store (independent layer)
    let session = SetupBuilder::new(setup_config).build()?;

    // 4. Build frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build client (composition layer) and run
    let client = Client::builder()
        .store(session.store_handle())
        .frontend(frontend)
        .build()?;

    match client.run().await? {
        PanelRequest::StartGame(summary) => print!("{}", format_summary(&summary)),
        PanelRequest::Back => tracing::debug!("No game started"),
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}

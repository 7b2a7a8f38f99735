use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use traffic_server::config::{ConfigError, ServerConfig};
use traffic_server::model::RouteScorer;
use traffic_server::table::{RouteTable, TableError};
use traffic_server::web::{AppState, create_router};

/// Reasons the server can fail to start.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load route table: {0}")]
    Table(#[from] TableError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Refuse to serve without a usable table
    let table = RouteTable::load(&config.data_path)?;

    let state = AppState::new(table, RouteScorer::default());
    let app = create_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Traffic Prediction System listening");
    info!("API Endpoints:");
    info!("  GET  /                 - Welcome message");
    info!("  GET  /health           - Health check");
    info!("  POST /predict_routes/  - Predict routes between two places");

    axum::serve(listener, app).await?;
    Ok(())
}

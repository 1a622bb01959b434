//! libapi demo server
//!
//! Loads configuration, initialises logging and serves the example routes.

use tracing_subscriber::{EnvFilter, fmt};

use libapi_core::config::AppConfig;
use libapi_core::config::logging::LogFormat;
use libapi_core::error::AppError;

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

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("LIBAPI_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = fmt().with_env_filter(filter).with_target(true);
    match config.logging.format {
        LogFormat::Json => builder.json().with_current_span(false).init(),
        LogFormat::Pretty => builder.compact().init(),
    }
}

/// Bind the listener and serve until the process is stopped
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting libapi demo v{}", env!("CARGO_PKG_VERSION"));

    let app = libapi_demo::build_router(&config)?;

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::io(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

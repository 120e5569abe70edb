use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};
use idea_check_api::api::create_application;
use idea_check_api::config::ApiConfig;

/// The main entry point for the IdeaCheck API server
///
/// This function:
/// 1. Initializes environment variables from .env file
/// 2. Sets up tracing for logging
/// 3. Loads the server configuration
/// 4. Creates and starts the Axum web application
/// 5. Handles graceful shutdown
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .with_ansi(true)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stdout))
        .with(env_filter)
        .init();

    info!("🚀 Starting IdeaCheck API server");

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    if config.huggingface.api_key.is_some() {
        info!("AI analysis enabled via {}", config.huggingface.model_url);
    } else {
        warn!("HUGGINGFACE_API_KEY is not set, evaluations will use heuristic analysis only");
    }

    // Create the Axum application with all routes and middleware
    let app = create_application(&config).context("Failed to build application")?;

    let addr = config.bind_addr();
    info!("Listening on {}", addr);
    info!("API docs available at http://{}/docs and http://{}/redoc", addr, addr);

    // Create a TCP listener and bind to the address
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    // Serve the application with graceful shutdown support
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Sets up a signal handler for graceful shutdown
///
/// Waits for either CTRL+C or SIGTERM (on Unix systems).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server...");
}

use anyhow::Context;
use idea_check_web::config::WebConfig;
use idea_check_web::routes::create_app;
use idea_check_web::shutdown::shutdown_signal;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stdout))
        .with(env_filter)
        .init();

    let config = WebConfig::from_env().context("Failed to load configuration")?;
    let app = create_app(&config);

    let addr = config.bind_addr();
    info!("Starting web client on {} (API at {})", addr, config.api_base_url);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web client shutdown complete");
    Ok(())
}

use anyhow::Result;
use jobintel::{start_web_server, ServiceConfig};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobintel=info,rocket=warn")),
        )
        .init();

    let port = std::env::var("ROCKET_PORT").unwrap_or_else(|_| "8000".to_string());
    port.parse::<u16>()
        .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;

    let config = ServiceConfig::load()?;
    config.ensure_directories().await?;

    tracing::info!("Starting JobIntel job-search assistant");
    tracing::info!("Server: http://0.0.0.0:{}", port);
    tracing::info!("Adzuna country: {}", config.adzuna_country);
    tracing::info!("Exports: {}", config.export_path.display());

    start_web_server(config).await
}

use datin_discovery::config::{DiscoveryConfig, SERVICE_NAME};
use datin_discovery::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DiscoveryConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;
    init_metrics()?;

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("{} stopped", SERVICE_NAME);
    Ok(())
}

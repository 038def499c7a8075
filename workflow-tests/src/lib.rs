//! Cross-service workflow integration tests library.
//!
//! Runs both datin services inside the test process on ephemeral ports and
//! exposes their base URLs, so tests exercise the real HTTP stack without any
//! external setup.

use anyhow::{anyhow, Result};
use datin_api::config::ApiConfig;
use datin_discovery::config::DiscoveryConfig;
use service_core::config::Config;
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Base URLs of the running services.
#[derive(Debug, Clone)]
pub struct ServiceEndpoints {
    pub api: String,
    pub discovery: String,
}

impl ServiceEndpoints {
    /// Health check URLs for all services.
    pub fn health_urls(&self) -> Vec<(&'static str, String)> {
        vec![
            ("datin-api", format!("{}/health", self.api)),
            ("datin-discovery", format!("{}/health", self.discovery)),
        ]
    }
}

fn loopback_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        log_level: "info".to_string(),
        otlp_endpoint: None,
    }
}

/// Bind both services on random loopback ports and run them in the background.
pub async fn spawn_services() -> Result<ServiceEndpoints> {
    init_tracing();

    let api = datin_api::Application::build(ApiConfig {
        common: loopback_config(),
    })
    .await
    .map_err(|e| anyhow!("Failed to build datin-api: {}", e))?;

    let discovery = datin_discovery::Application::build(DiscoveryConfig {
        common: loopback_config(),
    })
    .await
    .map_err(|e| anyhow!("Failed to build datin-discovery: {}", e))?;

    let endpoints = ServiceEndpoints {
        api: format!("http://127.0.0.1:{}", api.port()),
        discovery: format!("http://127.0.0.1:{}", discovery.port()),
    };

    tokio::spawn(async move {
        if let Err(e) = api.run_until_stopped().await {
            tracing::error!("datin-api stopped with error: {}", e);
        }
    });
    tokio::spawn(async move {
        if let Err(e) = discovery.run_until_stopped().await {
            tracing::error!("datin-discovery stopped with error: {}", e);
        }
    });

    Ok(endpoints)
}

/// Wait for all services to be healthy.
///
/// Polls health endpoints until all services respond with 200 OK.
/// Times out after the specified duration.
pub async fn wait_for_services(endpoints: &ServiceEndpoints, timeout: Duration) -> Result<()> {
    let health_urls = endpoints.health_urls();
    let client = reqwest::Client::new();
    let start = std::time::Instant::now();

    tracing::info!("Waiting for {} services to be healthy...", health_urls.len());

    loop {
        let mut unhealthy_services = Vec::new();

        for (name, url) in &health_urls {
            match client.get(url).timeout(Duration::from_secs(2)).send().await {
                Ok(resp) if resp.status().is_success() => {}
                Ok(resp) => {
                    unhealthy_services.push(format!("{} (status: {})", name, resp.status()));
                }
                Err(e) => {
                    unhealthy_services.push(format!("{} (error: {})", name, e));
                }
            }
        }

        if unhealthy_services.is_empty() {
            tracing::info!("All services are healthy");
            return Ok(());
        }

        if start.elapsed() > timeout {
            return Err(anyhow!(
                "Timeout waiting for services. Unhealthy: {}",
                unhealthy_services.join(", ")
            ));
        }

        tracing::debug!("Waiting for services: {}", unhealthy_services.join(", "));
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}

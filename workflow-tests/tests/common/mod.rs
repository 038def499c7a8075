//! Common test utilities for workflow integration tests.

use std::time::Duration;
use workflow_tests::{spawn_services, wait_for_services, ServiceEndpoints};

/// Default timeout for waiting on services.
pub const SERVICE_TIMEOUT: Duration = Duration::from_secs(10);

/// Start both services and wait until they report healthy.
pub async fn setup() -> ServiceEndpoints {
    let endpoints = spawn_services()
        .await
        .expect("Failed to start services");

    wait_for_services(&endpoints, SERVICE_TIMEOUT)
        .await
        .expect("Services not healthy");

    endpoints
}

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::error::AppError;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static INSTALL_LOCK: Mutex<()> = Mutex::new(());

/// Install the Prometheus recorder behind the `metrics` facade.
///
/// Safe to call more than once and from several threads; only the first call
/// installs a recorder.
pub fn init_metrics() -> Result<(), AppError> {
    let _guard = INSTALL_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    if PROMETHEUS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("Failed to install metrics recorder: {}", e))
    })?;

    let _ = PROMETHEUS_HANDLE.set(handle);
    Ok(())
}

/// Prometheus exposition text. Empty until `init_metrics` has run.
pub fn render_metrics() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

pub async fn metrics_handler() -> String {
    render_metrics()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrent_init_succeeds_everywhere() {
        let handles: Vec<_> = (0..8).map(|_| std::thread::spawn(init_metrics)).collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
        assert!(PROMETHEUS_HANDLE.get().is_some());
    }

    #[test]
    fn init_is_idempotent() {
        init_metrics().unwrap();
        init_metrics().unwrap();
    }
}

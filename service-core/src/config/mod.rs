use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Listener and logging settings shared by every service.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint. Span export is disabled when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration, falling back to `default_port` when neither the
    /// configuration file nor `APP__PORT` sets one.
    pub fn load(default_port: u16) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .set_default("port", i64::from(default_port))?
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn load_uses_service_default_port() {
        std::env::remove_var("APP__PORT");
        std::env::remove_var("APP__HOST");

        let config = Config::load(8001).expect("config loads");
        assert_eq!(config.port, 8001);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
        assert!(config.otlp_endpoint.is_none());
        assert_eq!(config.address(), "0.0.0.0:8001");
    }

    #[test]
    #[serial]
    fn environment_overrides_defaults() {
        std::env::set_var("APP__PORT", "0");
        std::env::set_var("APP__HOST", "127.0.0.1");

        let config = Config::load(8000);

        std::env::remove_var("APP__PORT");
        std::env::remove_var("APP__HOST");

        let config = config.expect("config loads");
        assert_eq!(config.port, 0);
        assert_eq!(config.address(), "127.0.0.1:0");
    }
}

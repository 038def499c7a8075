use service_core::config as core_config;
use service_core::error::AppError;

pub const SERVICE_NAME: &str = "datin-api";
pub const SERVICE_TITLE: &str = "Datin API";
pub const SERVICE_DESCRIPTION: &str = "Datin API service";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub common: core_config::Config,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            common: core_config::Config::load(DEFAULT_PORT)?,
        })
    }
}

use service_core::config as core_config;
use service_core::error::AppError;

pub const SERVICE_NAME: &str = "datin-discovery";
pub const SERVICE_TITLE: &str = "Datin Discovery";
pub const SERVICE_DESCRIPTION: &str = "Datin discovery and search service";
pub const DEFAULT_PORT: u16 = 8001;

#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    pub common: core_config::Config,
}

impl DiscoveryConfig {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            common: core_config::Config::load(DEFAULT_PORT)?,
        })
    }
}

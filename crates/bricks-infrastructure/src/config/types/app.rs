//! Root configuration

use super::{LoggingConfig, RegistryConfig};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pool sizes of the component registry
    pub registry: RegistryConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

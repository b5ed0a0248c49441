use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolvers::default_resolvers;
use super::server::ServerConfig;
use crate::ResolverEndpoint;

const LOCAL_CONFIG_PATH: &str = "ferrous-probe.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-probe/config.toml";

/// Main configuration structure for Ferrous Probe
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream lookup configuration
    #[serde(default)]
    pub dns: DnsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Vantage points, queried in this order and reported in this order
    #[serde(default = "default_resolvers")]
    pub resolvers: Vec<ResolverEndpoint>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dns: DnsConfig::default(),
            logging: LoggingConfig::default(),
            resolvers: default_resolvers(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-probe.toml in current directory
    /// 3. /etc/ferrous-probe/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be at least 1 second".to_string(),
            ));
        }

        if self.resolvers.is_empty() {
            return Err(ConfigError::Validation(
                "No resolvers configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for resolver in &self.resolvers {
            if !seen.insert((resolver.ip, resolver.location.as_str())) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate resolver {} ({})",
                    resolver.ip, resolver.location
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

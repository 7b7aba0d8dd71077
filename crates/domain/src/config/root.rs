use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::resolver::{validate_port, ResolverSettings};

pub const DEFAULT_CONFIG_FILE: &str = "dns-verify.toml";

/// Tool settings. The record document being verified is separate input.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Nameserver port and query timeout
    #[serde(default)]
    pub resolver: ResolverSettings,

    /// Changes document destination
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-verify.toml in current directory
    /// 3. Default configuration
    ///
    /// Command-line overrides are applied last.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.resolver.port = port;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.resolver.query_timeout = timeout;
        }
        if let Some(path) = overrides.output_path {
            self.output.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_port(self.resolver.port as i64)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if self.resolver.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.output.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Output path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub query_timeout: Option<u64>,
    pub output_path: Option<String>,
    pub log_level: Option<String>,
}

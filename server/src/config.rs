//! Server configuration.
//!
//! Priority, highest to lowest:
//! 1. Command-line arguments
//! 2. Environment variables (`HOST`, `PORT`)
//! 3. Configuration file (`--config`)
//! 4. Default values
//!
//! Clap resolves the first two into [`Overrides`]; this module layers them
//! over the file and the defaults.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [limits]
//! max_depth = 10000
//! max_len = 16777216
//! stack_size = 67108864
//! ```

use std::path::{Path, PathBuf};

use catalog::Limits;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Root of the TOML file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub server: ServerSection,
    pub limits: LimitsSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsSection {
    pub max_depth: Option<usize>,
    pub max_len: Option<usize>,
    pub stack_size: Option<usize>,
}

impl ConfigFile {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_depth: Option<usize>,
    pub max_len: Option<usize>,
    pub stack_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub limits: Limits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            limits: Limits::default(),
        }
    }
}

impl ServerConfig {
    /// Read the config file named in `overrides` (if any), layer, validate.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        let file = match &overrides.config {
            Some(path) => ConfigFile::from_path(path)?,
            None => ConfigFile::default(),
        };
        let config = Self::layered(&file, overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn layered(file: &ConfigFile, overrides: &Overrides) -> Self {
        let defaults = Self::default();
        let limits = Limits {
            max_depth: overrides
                .max_depth
                .or(file.limits.max_depth)
                .unwrap_or(defaults.limits.max_depth),
            max_len: overrides
                .max_len
                .or(file.limits.max_len)
                .unwrap_or(defaults.limits.max_len),
            stack_size: overrides
                .stack_size
                .or(file.limits.stack_size)
                .unwrap_or(defaults.limits.stack_size),
        };
        Self {
            host: overrides
                .host
                .clone()
                .or_else(|| file.server.host.clone())
                .unwrap_or(defaults.host),
            port: overrides.port.or(file.server.port).unwrap_or(defaults.port),
            limits,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".into()));
        }
        if self.limits.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be positive".into()));
        }
        if self.limits.max_len == 0 {
            return Err(ConfigError::Invalid("max_len must be positive".into()));
        }
        let required = self.limits.required_stack_size();
        if self.limits.stack_size < required {
            return Err(ConfigError::Invalid(format!(
                "stack_size {} is too small for max_depth {}; need at least {required} bytes",
                self.limits.stack_size, self.limits.max_depth
            )));
        }
        Ok(())
    }

    /// `host:port`, bracketing IPv6 hosts.
    pub fn addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

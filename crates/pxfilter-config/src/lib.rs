//! Module: config
//! Responsibility: load and default the pushdown configuration file.
//! Does not own: interpreting the switches (core does that per scan).
//! Boundary: CLI and embedders read a `PxfilterConfig` once and pass
//! `PushdownConfig` down to the compiler.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;


/// Default file name looked up by the CLI when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "pxfilter.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}

///
/// PxfilterConfig
///
/// Root of `pxfilter.toml`. Every section and key is optional.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PxfilterConfig {
    pub pushdown: PushdownConfig,
    pub logging: LoggingConfig,
}

impl PxfilterConfig {
    /// Parse a TOML document and validate its values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.logging.validate()?;

        Ok(config)
    }

    /// Read and parse one config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    /// Read `path` when given, else the default file if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

///
/// PushdownConfig
///
/// Switches for the two pushdown paths of a scan.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PushdownConfig {
    /// Serialize WHERE-clause qualifiers into `X-GP-FILTER`.
    pub filter: bool,

    /// Send `X-GP-ATTRS-PROJ` column projection headers.
    pub projection: bool,
}

impl Default for PushdownConfig {
    fn default() -> Self {
        Self {
            filter: true,
            projection: true,
        }
    }
}

impl PushdownConfig {
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            filter: false,
            projection: false,
        }
    }
}

///
/// LoggingConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    const LEVELS: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];

    fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_ascii_lowercase();
        if Self::LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel(self.level.clone()))
        }
    }
}

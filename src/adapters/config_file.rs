//! JSON configuration file adapter.
//!
//! Implements [`ConfigPort`] for the host build. The file path comes from
//! the `THERMOBAND_CONFIG` environment variable; with no variable set the
//! adapter reports [`ConfigError::NotFound`] and `main` runs on defaults.

use std::path::{Path, PathBuf};

use log::debug;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::SystemConfig;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV: &str = "THERMOBAND_CONFIG";

pub struct JsonConfigFile {
    path: Option<PathBuf>,
}

impl JsonConfigFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Path from [`CONFIG_ENV`], if set.
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Decode and validate a JSON document.
    pub fn parse(text: &str) -> Result<SystemConfig, ConfigError> {
        let config: SystemConfig =
            serde_json::from_str(text).map_err(|_| ConfigError::Corrupted)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        let path = self.path.as_deref().ok_or(ConfigError::NotFound)?;
        debug!("loading config from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::IoError,
        })?;
        Self::parse(&text)
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PortalError, Result};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// CLI configuration, stored as JSON in the platform config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL of the portal API used by `--remote`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Directory holding a `catalog.json` snapshot, used when set and
    /// `--catalog`/`--remote` are not given.
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            catalog_dir: None,
        }
    }
}

impl PortalConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PortalError::Io)?;
        let config: PortalConfig =
            serde_json::from_str(&content).map_err(PortalError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PortalError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PortalError::Serialization)?;
        fs::write(config_path, content).map_err(PortalError::Io)?;
        Ok(())
    }

    /// Read a value by CLI key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api-base-url" => Ok(self.api_base_url.clone()),
            "catalog-dir" => Ok(self
                .catalog_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            _ => Err(PortalError::Config(format!("unknown config key: {}", key))),
        }
    }

    /// Write a value by CLI key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api-base-url" => {
                self.api_base_url = value.trim_end_matches('/').to_string();
                Ok(())
            }
            "catalog-dir" => {
                self.catalog_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(PortalError::Config(format!("unknown config key: {}", key))),
        }
    }
}

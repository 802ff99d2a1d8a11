use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::colors::Palette;
use crate::core::dirs::get_config_file;
use crate::core::error::{Result, UpstreamError};
use crate::core::formatter::DEFAULT_REMOTE_PREFIX;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    pub active: String,
    pub gone: String,
    pub remote: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            active: "green".to_string(),
            gone: "red".to_string(),
            remote: "blue".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub remote_prefix: String,
    pub colors: ColorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_prefix: DEFAULT_REMOTE_PREFIX.to_string(),
            colors: ColorConfig::default(),
        }
    }
}

impl Config {
    /// Load the user config file, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_file())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| UpstreamError::config_parse(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn palette(&self) -> Result<Palette> {
        Palette::from_names(&self.colors.active, &self.colors.gone, &self.colors.remote)
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{CardSettings, RoundingPolicy};
use crate::log::LogLevel;
use crate::{blog_debug, Error, Result};

const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub rounding: RoundingPolicy,
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            rounding: RoundingPolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    pub fn bankcard_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".bankcard"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::bankcard_dir()?.join("bankcard.toml"))
    }

    pub fn card_settings(&self) -> CardSettings {
        CardSettings {
            currency: self.currency.clone(),
            rounding: self.rounding,
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        blog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            blog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        blog_debug!(
            "Config loaded: currency={:?} rounding={:?} log_level={}",
            config.currency,
            config.rounding,
            config.log_level
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                blog_debug!("Creating config directory: {}", dir.display());
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, self.to_toml()?)?;
        blog_debug!("Config saved to {}", path.display());
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

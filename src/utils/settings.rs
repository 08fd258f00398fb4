//! Settings and configuration utilities.
//!
//! Settings live in $HOME/.zyda-cz/settings.json. Every value can be
//! overridden by an environment variable of the same name.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming a file that replaces the embedded info text.
pub const INFO_FILE_ENV: &str = "ZYDA_CZ_INFO_FILE";

/// Settings loaded from $HOME/.zyda-cz/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable fallbacks.
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// File whose contents replace the embedded info text.
    #[serde(default, rename = "infoFile")]
    pub info_file: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".zyda-cz").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(_) => self.env.get(key).cloned(),
        }
    }

    /// Returns the info override file, if one is configured.
    ///
    /// [`INFO_FILE_ENV`] (environment, then `env` map) wins over `infoFile`.
    pub fn info_file(&self) -> Option<PathBuf> {
        self.get_env_var(INFO_FILE_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| self.info_file.clone())
    }
}

use super::{
    data::DataConfig,
    display::DisplayConfig,
    traits::ConfigSection,
};
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Looked up in the working directory at startup.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), DashboardError> {
        self.data.validate().map_err(in_section::<DataConfig>)?;
        self.display.validate().map_err(in_section::<DisplayConfig>)?;
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, DashboardError> {
        let config: AppConfig = toml::from_str(contents)
            .map_err(|e| DashboardError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

fn in_section<S: ConfigSection>(err: DashboardError) -> DashboardError {
    match err {
        DashboardError::Configuration(msg) => {
            DashboardError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    }
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DashboardError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DashboardError::Configuration(format!("Failed to read config: {}", e)))?;

        self.config = AppConfig::from_toml_str(&contents)?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise keep the defaults.
    ///
    /// Returns whether a file was read.
    pub fn load_if_present<P: AsRef<Path>>(&mut self, path: P) -> Result<bool, DashboardError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(false);
        }
        self.load_from_file(path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(true)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DashboardError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| DashboardError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    /// Like [`load_if_present`](Self::load_if_present), but writes the
    /// defaults to `path` as a starter file when it is missing. Failing to
    /// write the starter file is only logged.
    pub fn load_or_create<P: AsRef<Path>>(&mut self, path: P) -> Result<bool, DashboardError> {
        let path = path.as_ref();
        if self.load_if_present(path)? {
            return Ok(true);
        }
        match self.save_to_file(path) {
            Ok(()) => log::info!("Wrote starter config to {}", path.display()),
            Err(e) => log::warn!("Could not write starter config {}: {}", path.display(), e),
        }
        Ok(false)
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

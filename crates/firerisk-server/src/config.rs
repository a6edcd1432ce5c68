//! Server configuration
//!
//! Resolution order:
//! 1. `FIRERISK_CONFIG` if set, else `<config dir>/firerisk/config.toml` if present
//! 2. built-in defaults for anything the file leaves out
//! 3. `FIRERISK_ADDR` / `FIRERISK_MODELS_DIR` environment overrides
//!
//! ```toml
//! [server]
//! addr = "0.0.0.0:5000"
//!
//! [models]
//! dir = "models"
//! scaler_file = "scaler.json"
//! model_file = "ridge.json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use firerisk_core::artifact::{DEFAULT_MODEL_FILE, DEFAULT_SCALER_FILE};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "FIRERISK_CONFIG";
/// Environment variable overriding the listen address
pub const ADDR_ENV: &str = "FIRERISK_ADDR";
/// Environment variable overriding the models directory
pub const MODELS_DIR_ENV: &str = "FIRERISK_MODELS_DIR";

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid value: {0}")]
    Invalid(String),
}

/// Top-level server configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ListenConfig,
    pub models: ModelsConfig,
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    /// Socket address to bind
    pub addr: String,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Where the fitted artifacts live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub dir: PathBuf,
    pub scaler_file: String,
    pub model_file: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("models"),
            scaler_file: DEFAULT_SCALER_FILE.to_string(),
            model_file: DEFAULT_MODEL_FILE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Default per-user config location
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("firerisk").join("config.toml"))
    }

    /// Resolve configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match Self::user_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `FIRERISK_ADDR` / `FIRERISK_MODELS_DIR` style overrides
    pub fn apply_overrides<F>(&mut self, mut lookup: F)
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ADDR_ENV) {
            self.server.addr = addr;
        }
        if let Some(dir) = lookup(MODELS_DIR_ENV) {
            self.models.dir = PathBuf::from(dir);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.addr.trim().is_empty() {
            return Err(ConfigError::Invalid("server.addr must not be empty".to_string()));
        }
        if self.models.scaler_file.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "models.scaler_file must not be empty".to_string(),
            ));
        }
        if self.models.model_file.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "models.model_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

//! Startup configuration loaded from an optional TOML file.
//!
//! Every section uses `#[serde(default)]`, so a file that only overrides
//! `[camera.movement]` keeps the defaults for everything else.

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    gameplay::{CameraDesc, CameraDescError, InputDesc},
    window::WindowStateDesc,
};

/// Environment variable consulted when no config path is given on the command line.
pub const CONFIG_ENV_VAR: &str = "FLYCAM_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid camera settings")]
    Camera(#[from] CameraDescError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowStateDesc,
    pub camera: CameraDesc,
    pub input: InputDesc,
}

impl AppConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.camera.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    #[allow(dead_code)]
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config named by `arg` or by [`CONFIG_ENV_VAR`], falling back
    /// to defaults when neither is set.
    pub fn resolve(arg: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = arg.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));
        match path {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load(&path)
            }
            None => {
                log::info!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::backends::camera::types::{CameraFacing, CaptureConfig};
use crate::errors::{FlowError, FlowResult};

const CONFIG_FILE: &str = "config.json";
const APP_NAME: &str = "capture-flow";

/// Session configuration that persists between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory where saved stills land, platform pictures dir when unset
    pub save_dir: Option<PathBuf>,
    /// Camera facing sessions start with
    pub default_facing: CameraFacing,
    /// Options applied to every capture
    pub capture: CaptureConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_dir: None,                          // platform pictures directory
            default_facing: CameraFacing::default(), // back camera
            capture: CaptureConfig::default(),       // maximum quality stills
        }
    }
}

impl Config {
    /// Directory where saved stills land
    pub fn resolve_save_dir(&self) -> PathBuf {
        self.save_dir
            .clone()
            .unwrap_or_else(crate::storage::default_save_dir)
    }
}

/// Default configuration file path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load the configuration, falling back to defaults
pub fn load() -> Config {
    let Some(path) = default_config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!(
                error = %err,
                path = %path.display(),
                "Unreadable configuration, using defaults"
            );
            Config::default()
        }
    }
}

/// Save to the default path
pub fn save(config: &Config) -> FlowResult<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> FlowResult<Config> {
    let content = fs::read_to_string(path).map_err(|e| FlowError::Config(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| FlowError::Config(e.to_string()))
}

pub fn save_to_path(config: &Config, path: &Path) -> FlowResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FlowError::Config(e.to_string()))?;
    }
    let content =
        serde_json::to_string_pretty(config).map_err(|e| FlowError::Config(e.to_string()))?;
    fs::write(path, content).map_err(|e| FlowError::Config(e.to_string()))?;
    Ok(())
}

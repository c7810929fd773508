use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::vendor::VendorPolicy;

const APP_DIR: &str = "csx";
const APP_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {path}")]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Settings from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub vendor_prefixes: VendorPolicy,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

const fn default_pretty() -> bool {
    true
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            vendor_prefixes: VendorPolicy::default(),
            pretty: default_pretty(),
        }
    }
}

pub fn load_config() -> Result<StyleConfig, ConfigError> {
    let (xdg_config_home, home) = config_env_dirs();
    load_config_with(xdg_config_home.as_deref(), home.as_deref())
}

pub fn load_config_or_default() -> StyleConfig {
    load_config().unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load config.json; using defaults");
        StyleConfig::default()
    })
}

fn load_config_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<StyleConfig, ConfigError> {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(ConfigPathError::MissingHomeDirectory) => {
            tracing::debug!("no config directory available; using defaults");
            return Ok(StyleConfig::default());
        }
    };
    if !path.exists() {
        return Ok(StyleConfig::default());
    }

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let config: StyleConfig = serde_json::from_str(&contents)
        .map_err(|source| ConfigError::ParseConfig { path: path.clone(), source })?;
    tracing::debug!(?path, ?config, "loaded config");
    Ok(config)
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

//! `campusnav.toml` settings

use std::fs;
use std::path::{Path, PathBuf};

use campusnav_core::{Algorithm, LoaderConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "campusnav.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Building data file
    pub data_path: PathBuf,
    /// Used when no algorithm is requested or the requested one is unknown
    pub default_algorithm: Algorithm,
    /// Print edge weights on floor plans
    pub draw_weights: bool,
    /// Where the console writes floor plans
    pub render_dir: PathBuf,
    pub loader: LoaderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/campus.json"),
            default_algorithm: Algorithm::Dijkstra,
            draw_weights: true,
            render_dir: PathBuf::from("renders"),
            loader: LoaderConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the settings
    ///
    /// An explicit path must exist. Without one, `campusnav.toml` in the
    /// working directory is used when present, else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads a config file; relative paths inside it are resolved against
    /// the file's directory
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.data_path = resolve(base, &config.data_path);
            config.render_dir = resolve(base, &config.render_dir);
        }
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Command line override for the data file
    pub fn with_data_path(mut self, data_path: Option<PathBuf>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        self
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

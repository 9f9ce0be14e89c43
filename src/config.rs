//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bloodline/bloodline.toml`
//! 3. Explicit config file passed to [`Settings::load`]
//! 4. Environment variables: `BLOODLINE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::GenealogyError;

/// Year after which a conversion counts as "millennial".
pub const DEFAULT_MILLENNIAL_THRESHOLD: i32 = 1980;

/// Unified configuration for bloodline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Threshold year used by `millennial_vampires` (exclusive)
    pub millennial_threshold: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            millennial_threshold: DEFAULT_MILLENNIAL_THRESHOLD,
        }
    }
}

/// Get the XDG config directory for bloodline.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bloodline").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bloodline.toml"))
}

fn config_err(e: config::ConfigError) -> GenealogyError {
    GenealogyError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional file layered over the global config; must exist if given
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, GenealogyError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("millennial_threshold", i64::from(defaults.millennial_threshold))
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("BLOODLINE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }
}

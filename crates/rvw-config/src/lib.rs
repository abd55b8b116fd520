//! # rvw-config
//!
//! Layered configuration loading for reviewgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RVW_*` prefix, `__` as separator)
//! 2. Project-level `rvw.toml` in the working directory
//! 3. User-level `~/.config/rvw/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied by the binary on top of the loaded value.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RVW_CONVERT__INPUT` -> `convert.input`,
//! `RVW_CONVERT__EXPORT_NAME` -> `convert.export_name`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rvw_config::RvwConfig;
//!
//! let config = RvwConfig::load_with_dotenv().expect("config");
//! println!("reading {}", config.convert.input);
//! ```

mod convert;
mod error;

pub use convert::ConvertConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, resolved against the working directory.
pub const PROJECT_CONFIG_FILE: &str = "rvw.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "RVW_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RvwConfig {
    #[serde(default)]
    pub convert: ConvertConfig,
}

impl RvwConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Fails when a source cannot be parsed or a value does not validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_dotenv`] and [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv()?;
        Self::load()
    }

    /// Read `.env` (searching upward from the working directory) into the
    /// process environment. Variables already set are not overwritten.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Dotenv`] when a `.env` exists but cannot be read or
    /// parsed. A missing `.env` is not an error.
    pub fn load_dotenv() -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded dotenv file");
                Ok(())
            }
            Err(error) if error.not_found() => Ok(()),
            Err(error) => Err(ConfigError::Dotenv(error)),
        }
    }

    /// Load with an explicit config file in place of `rvw.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist, otherwise
    /// the same failures as [`Self::load`].
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        Self::from_figment(&Self::layered(Self::global_config_path(), path))
    }

    /// Extract and validate a config from a prepared figment.
    ///
    /// # Errors
    ///
    /// Fails when extraction fails or a value does not validate.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.convert.validate()?;
        Ok(config)
    }

    /// Build the default figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        Self::layered(Self::global_config_path(), Path::new(PROJECT_CONFIG_FILE))
    }

    /// Build the provider chain from explicit file locations.
    ///
    /// Files that do not exist are skipped.
    #[must_use]
    pub fn layered(global_path: Option<PathBuf>, local_path: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rvw").join("config.toml"))
    }
}

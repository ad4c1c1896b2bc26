// SPDX-License-Identifier: MPL-2.0

//! Configuration for xbg.
//!
//! The config file is optional and only ever read. It lives at
//! `$XDG_CONFIG_HOME/xbg/config.ron` and may set any subset of the fields:
//!
//! ```ron
//! (
//!     mode: "zoom",
//!     verbose: false,
//!     rotate: false,
//!     setroot: Some("/usr/local/bin/setroot"),
//! )
//! ```

pub mod fit_mode;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use fit_mode::{FitMode, UnknownFitMode};

pub const NAME: &str = "xbg";
pub const CONFIG_FILE: &str = "config.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Defaults applied before command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fit mode name, validated when the wallpaper is applied.
    pub mode: String,
    pub verbose: bool,
    pub rotate: bool,
    /// Program used to paint the root window. `None` uses `setroot` from `PATH`.
    pub setroot: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: FitMode::default().as_str().to_owned(),
            verbose: false,
            rotate: false,
            setroot: None,
        }
    }
}

impl Config {
    /// Loads the user's config file, falling back to defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Location of an existing config file, if any.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(NAME).find_config_file(CONFIG_FILE)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }
}

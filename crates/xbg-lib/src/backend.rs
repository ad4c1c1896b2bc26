// SPDX-License-Identifier: MPL-2.0

//! Windowing backends and the options they are driven with.

use std::path::Path;

use xbg_config::Config;

use crate::Result;

/// How a single wallpaper change should be performed.
///
/// Built once and passed by reference; backends never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Fit mode name, any synonym [`xbg_config::FitMode::parse`] accepts.
    pub mode: String,
    /// Print progress to stdout and let the root setter write to the terminal.
    pub verbose: bool,
    /// Rotate the image to match monitor orientation, where supported.
    pub rotate: bool,
}

impl Options {
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            verbose: false,
            rotate: false,
        }
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Options {
    fn from(config: &Config) -> Self {
        Self {
            mode: config.mode.clone(),
            verbose: config.verbose,
            rotate: config.rotate,
        }
    }
}

/// A detection and invocation strategy for one windowing environment.
pub trait Backend: Send + Sync {
    /// Human readable backend name.
    fn name(&self) -> &'static str;

    /// Whether the environment says this backend's display is active.
    fn running(&self) -> bool;

    /// Whether the executables this backend relies on are on `PATH`.
    fn executables_exist(&self) -> bool;

    fn is_available(&self) -> bool {
        self.running() && self.executables_exist()
    }

    /// Sets `image` as the desktop background.
    fn set_wallpaper(&self, options: &Options, image: &Path) -> Result<()>;
}

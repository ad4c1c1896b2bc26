// SPDX-License-Identifier: MPL-2.0

//! Picks a working backend and hands the image to it.

use std::path::Path;

use xbg_config::Config;

use crate::{
    backend::{Backend, Options},
    user_context::UserContext,
    x11::X11,
    Error, Result,
};

/// Ordered set of backends to try.
pub struct Wallpaper {
    backends: Vec<Box<dyn Backend>>,
}

impl std::fmt::Debug for Wallpaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.backends.iter().map(|b| b.name()))
            .finish()
    }
}

impl Wallpaper {
    pub fn new(backends: Vec<Box<dyn Backend>>) -> Self {
        Self { backends }
    }

    /// All backends known for this platform, detected against `context`.
    pub fn detect(context: UserContext) -> Self {
        Self::new(vec![Box::new(X11::new(context))])
    }

    /// Like [`Wallpaper::detect`], honouring the configured root setter.
    pub fn from_config(context: UserContext, config: &Config) -> Self {
        let mut x11 = X11::new(context);
        if let Some(program) = &config.setroot {
            x11 = x11.program(program.clone());
        }
        Self::new(vec![Box::new(x11)])
    }

    pub fn backends(&self) -> &[Box<dyn Backend>] {
        &self.backends
    }

    /// Backends whose environment and executables are present.
    pub fn available(&self) -> impl Iterator<Item = &Box<dyn Backend>> {
        self.backends.iter().filter(|b| b.is_available())
    }

    /// Sets `image` as the desktop background with the first backend that works.
    ///
    /// A bad mode is reported straight away instead of falling through to the
    /// next backend.
    pub fn set(&self, image: &Path, options: &Options) -> Result<()> {
        // Checked up front so a missing file is reported even without a display.
        if !image.exists() {
            return Err(Error::NoSuchFile(image.to_path_buf()));
        }

        let mut last_failed = None;

        for backend in self.available() {
            let name = backend.name();
            if options.verbose {
                println!("Using the {name} backend.");
            }

            match backend.set_wallpaper(options, image) {
                Ok(()) => {
                    tracing::info!(backend = name, image = %image.display(), "wallpaper set");
                    return Ok(());
                }
                Err(err @ (Error::UnsupportedMode(_) | Error::NoSuchFile(_))) => return Err(err),
                Err(err) => {
                    if options.verbose {
                        eprintln!("failed: {err}");
                    }
                    tracing::warn!(backend = name, %err, "backend failed, trying the next one");
                    last_failed = Some(name);
                }
            }
        }

        match last_failed {
            Some(name) => Err(Error::BackendFailed { name }),
            None => Err(Error::NoBackend),
        }
    }
}

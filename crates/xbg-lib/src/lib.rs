// SPDX-License-Identifier: MPL-2.0

//! Set the desktop background on X11, independent of the window manager.

pub mod backend;
pub mod error;
pub mod root_setter;
pub mod user_context;
pub mod wallpaper;
pub mod x11;

#[cfg(test)]
mod testing;

use std::path::Path;

pub use backend::{Backend, Options};
pub use error::{Error, Result};
pub use root_setter::{Invocation, RootSetter, SetrootCommand, SetterError};
pub use user_context::UserContext;
pub use wallpaper::Wallpaper;
pub use x11::X11;
pub use xbg_config::{Config, FitMode};

/// Sets `image` as the wallpaper using the current environment and `setroot`.
pub fn set_wallpaper(image: impl AsRef<Path>, mode: &str, verbose: bool) -> Result<()> {
    Wallpaper::detect(UserContext::from_env())
        .set(image.as_ref(), &Options::new(mode).verbose(verbose))
}

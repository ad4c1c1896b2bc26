// SPDX-License-Identifier: MPL-2.0

use std::path::PathBuf;

use crate::root_setter::SetterError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no such file: {}", .0.display())]
    NoSuchFile(PathBuf),

    #[error(
        "found no working method for setting the desktop wallpaper, maybe X11 is not installed or DISPLAY not set"
    )]
    NoBackend,

    #[error("unsupported desktop wallpaper mode: {0:?}")]
    UnsupportedMode(String),

    #[error("could not set the background image, root setter exited with status {status}")]
    HelperFailed { status: i32 },

    #[error(transparent)]
    Helper(#[from] SetterError),

    #[error("could not use the {name} backend")]
    BackendFailed { name: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// SPDX-License-Identifier: MPL-2.0

//! The external program that paints the root window.
//!
//! xbg never decodes or scales images itself. A [`RootSetter`] receives an
//! [`Invocation`] (program plus argument list) and reports the integer exit
//! status. [`SetrootCommand`] runs it as a child process; tests substitute a
//! recorder.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use xbg_config::FitMode;

/// Program used when none is configured.
pub const DEFAULT_PROGRAM: &str = "setroot";

#[derive(Debug, thiserror::Error)]
pub enum SetterError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} was terminated by a signal")]
    Signal { program: String },
}

/// One call of the root setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Builds `<program> <mode flag> <image>`.
    pub fn for_image(program: impl Into<String>, mode: FitMode, image: &Path) -> Self {
        Self {
            program: program.into(),
            args: vec![mode_flag(mode).into(), image.as_os_str().to_owned()],
        }
    }
}

/// Command line flag `setroot` uses for a fit mode.
#[must_use]
pub fn mode_flag(mode: FitMode) -> &'static str {
    match mode {
        FitMode::Center => "--center",
        FitMode::Zoom => "--zoom",
        FitMode::Stretch => "--stretch",
        FitMode::Fit => "--fit-auto",
        FitMode::Tile => "--tiled",
    }
}

/// Paints the root window. Implementations block until the helper is done.
pub trait RootSetter: Send + Sync {
    /// Runs `invocation` and returns its exit status.
    fn run(&self, invocation: &Invocation, verbose: bool) -> Result<i32, SetterError>;
}

/// Runs the invocation as a child process and waits for it.
///
/// There is no timeout; a helper that never exits blocks the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct SetrootCommand;

impl RootSetter for SetrootCommand {
    fn run(&self, invocation: &Invocation, verbose: bool) -> Result<i32, SetterError> {
        let (stdout, stderr) = if verbose {
            (Stdio::inherit(), Stdio::inherit())
        } else {
            (Stdio::null(), Stdio::null())
        };

        tracing::debug!(program = %invocation.program, args = ?invocation.args, "running root setter");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .status()
            .map_err(|source| SetterError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        status.code().ok_or_else(|| SetterError::Signal {
            program: invocation.program.clone(),
        })
    }
}

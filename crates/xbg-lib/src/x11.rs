// SPDX-License-Identifier: MPL-2.0

//! X11 backend: paints the root window through an external root setter.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use xbg_config::FitMode;

use crate::{
    backend::{Backend, Options},
    root_setter::{Invocation, RootSetter, SetrootCommand, DEFAULT_PROGRAM},
    user_context::UserContext,
    Error, Result,
};

/// Variable that signals a running X session.
pub const DISPLAY_VAR: &str = "DISPLAY";
/// Executable whose presence on `PATH` means X is installed.
pub const SERVER_EXECUTABLE: &str = "X";

pub struct X11 {
    context: UserContext,
    setter: Arc<dyn RootSetter>,
    program: String,
    server_executable: String,
    // Serializes root setter runs made through a shared handle.
    invoke_lock: Mutex<()>,
}

impl fmt::Debug for X11 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X11")
            .field("program", &self.program)
            .field("server_executable", &self.server_executable)
            .finish_non_exhaustive()
    }
}

impl X11 {
    /// Backend that runs `setroot` from `PATH`.
    pub fn new(context: UserContext) -> Self {
        Self::with_setter(context, Arc::new(SetrootCommand))
    }

    pub fn with_setter(context: UserContext, setter: Arc<dyn RootSetter>) -> Self {
        Self {
            context,
            setter,
            program: DEFAULT_PROGRAM.to_owned(),
            server_executable: SERVER_EXECUTABLE.to_owned(),
            invoke_lock: Mutex::new(()),
        }
    }

    /// Overrides the root setter program.
    #[must_use]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Overrides the executable probed by [`Backend::executables_exist`].
    #[must_use]
    pub fn server_executable(mut self, name: impl Into<String>) -> Self {
        self.server_executable = name.into();
        self
    }

    fn display_name(&self) -> &str {
        self.context.var(DISPLAY_VAR).unwrap_or_default()
    }
}

impl Backend for X11 {
    fn name(&self) -> &'static str {
        "X11"
    }

    fn running(&self) -> bool {
        // i3 and Awesome run on X and set DISPLAY too, so this covers them.
        self.context.has_var(DISPLAY_VAR)
    }

    fn executables_exist(&self) -> bool {
        self.context
            .find_executable(&self.server_executable)
            .is_some()
    }

    fn set_wallpaper(&self, options: &Options, image: &Path) -> Result<()> {
        if !image.exists() {
            return Err(Error::NoSuchFile(image.to_path_buf()));
        }

        let mode = FitMode::parse(&options.mode)
            .ok_or_else(|| Error::UnsupportedMode(options.mode.clone()))?;

        if options.rotate {
            tracing::warn!(program = %self.program, "rotation is not supported by the root setter, ignoring");
        }

        let _guard = self
            .invoke_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if options.verbose {
            println!(
                "X11: setting {} ({mode}) on display '{}'",
                image.display(),
                self.display_name()
            );
        }

        let invocation = Invocation::for_image(&self.program, mode, image);
        let status = self.setter.run(&invocation, options.verbose)?;
        tracing::debug!(status, %mode, image = %image.display(), "root setter finished");

        if status != 0 {
            return Err(Error::HelperFailed { status });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use super::X11;
    use crate::backend::{Backend, Options};
    use crate::testing::{image_file, RecordingSetter};
    use crate::user_context::UserContext;
    use crate::Error;

    fn backend(setter: &Arc<RecordingSetter>) -> X11 {
        X11::with_setter(UserContext::new([("DISPLAY", ":0")]), setter.clone())
    }

    #[test]
    fn running_requires_non_empty_display() {
        let setter = RecordingSetter::new(0);

        assert!(backend(&setter).running());
        assert!(!X11::with_setter(UserContext::new([("DISPLAY", "")]), setter.clone()).running());
        assert!(!X11::with_setter(UserContext::new([("HOME", "/root")]), setter.clone()).running());
    }

    #[test]
    fn missing_server_executable_is_unavailable() {
        let context = UserContext::new([("DISPLAY", ":0"), ("PATH", "/nonexistent/xbg")]);
        let x11 = X11::with_setter(context, RecordingSetter::new(0));

        assert!(x11.running());
        assert!(!x11.executables_exist());
        assert!(!x11.is_available());
    }

    #[test]
    fn missing_file_wins_over_bad_mode() {
        let setter = RecordingSetter::new(0);

        let err = backend(&setter)
            .set_wallpaper(&Options::new("bogus"), Path::new("/nonexistent/cat.png"))
            .unwrap_err();

        assert!(matches!(err, Error::NoSuchFile(_)));
        assert!(setter.calls().is_empty());
    }

    #[test]
    fn unsupported_mode_skips_the_setter() {
        let (_dir, image) = image_file();
        let setter = RecordingSetter::new(0);

        let err = backend(&setter)
            .set_wallpaper(&Options::new("kaleidoscope"), &image)
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedMode(mode) if mode == "kaleidoscope"));
        assert!(setter.calls().is_empty());
    }

    #[test]
    fn synonyms_reach_the_setter_as_canonical_flags() {
        let (_dir, image) = image_file();
        let setter = RecordingSetter::new(0);
        let x11 = backend(&setter);

        for mode in ["zoomed", "scaled", "center", "fit", "tiled", ""] {
            x11.set_wallpaper(&Options::new(mode), &image).unwrap();
        }

        let flags: Vec<_> = setter
            .calls()
            .iter()
            .map(|call| call.args[0].to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            flags,
            ["--zoom", "--stretch", "--center", "--fit-auto", "--tiled", "--zoom"]
        );
        assert!(setter.calls().iter().all(|call| call.program == "setroot"));
    }

    #[test]
    fn non_zero_status_is_helper_failure() {
        let (_dir, image) = image_file();
        let setter = RecordingSetter::new(3);

        let err = backend(&setter)
            .set_wallpaper(&Options::new("zoom"), &image)
            .unwrap_err();

        assert!(matches!(err, Error::HelperFailed { status: 3 }));
        assert_eq!(setter.calls().len(), 1);
    }

    #[test]
    fn program_override_is_used() {
        let (_dir, image) = image_file();
        let setter = RecordingSetter::new(0);

        backend(&setter)
            .program("/opt/bin/setroot")
            .set_wallpaper(&Options::new("zoom").rotate(true), &image)
            .unwrap();

        assert_eq!(setter.calls()[0].program, "/opt/bin/setroot");
    }
}

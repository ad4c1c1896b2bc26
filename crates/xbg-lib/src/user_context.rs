// SPDX-License-Identifier: MPL-2.0

use std::ffi::OsStr;
use std::path::PathBuf;

/// Snapshot of the environment that backend detection looks at.
///
/// Backends never read the live process environment, so detection is
/// repeatable and can be driven with synthetic variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserContext {
    vars: Vec<(String, String)>,
}

impl UserContext {
    pub fn new<K, V, I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Captures the current process environment. Variables that are not
    /// valid UTF-8 are left out.
    pub fn from_env() -> Self {
        Self::new(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Value of `key`. Later entries shadow earlier ones.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is set to a non-empty value.
    pub fn has_var(&self, key: &str) -> bool {
        self.var(key).is_some_and(|v| !v.is_empty())
    }

    /// Searches this context's `PATH` for an executable.
    pub fn find_executable(&self, name: impl AsRef<OsStr>) -> Option<PathBuf> {
        let paths = self.var("PATH")?;
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        which::which_in(name, Some(paths), cwd).ok()
    }
}

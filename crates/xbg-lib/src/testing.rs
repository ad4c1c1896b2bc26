// SPDX-License-Identifier: MPL-2.0

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::root_setter::{Invocation, RootSetter, SetterError};

/// Root setter that records invocations instead of running anything.
#[derive(Debug)]
pub(crate) struct RecordingSetter {
    status: i32,
    calls: Mutex<Vec<Invocation>>,
}

impl RecordingSetter {
    pub(crate) fn new(status: i32) -> Arc<Self> {
        Arc::new(Self {
            status,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl RootSetter for RecordingSetter {
    fn run(&self, invocation: &Invocation, _verbose: bool) -> Result<i32, SetterError> {
        self.calls.lock().unwrap().push(invocation.clone());
        Ok(self.status)
    }
}

/// An existing file to pass as the wallpaper. Keep the dir alive.
pub(crate) fn image_file() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grumpy-cat.png");
    std::fs::write(&path, b"not really a png").unwrap();
    (dir, path)
}

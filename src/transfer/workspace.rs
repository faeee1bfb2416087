//! Per-request staging directories on the host.

use crate::error::{PackagerError, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A unique directory for one packaging run.
///
/// Created under the configured workspace root and removed when dropped,
/// whatever way the request ends, unless `keep` was requested.
pub struct RunWorkspace {
    dir: TempDir,
    run_id: String,
    keep: bool,
}

impl RunWorkspace {
    pub fn create(root: &Path, run_id: &str, keep: bool) -> Result<Self> {
        std::fs::create_dir_all(root).map_err(|e| PackagerError::io(root, e))?;

        let dir = tempfile::Builder::new()
            .prefix(&format!("run-{run_id}-"))
            .disable_cleanup(keep)
            .tempdir_in(root)
            .map_err(|e| PackagerError::io(root, e))?;

        tracing::debug!(path = %dir.path().display(), "Created run workspace");
        Ok(Self {
            dir,
            run_id: run_id.to_string(),
            keep,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Location of the downloaded archive for `name`.
    pub fn archive_path(&self, name: &str) -> PathBuf {
        self.path().join(format!("{name}.tar"))
    }
}

impl Drop for RunWorkspace {
    fn drop(&mut self) {
        if self.keep {
            tracing::info!(path = %self.path().display(), "Keeping run workspace");
        } else {
            tracing::debug!(path = %self.path().display(), "Removing run workspace");
        }
    }
}

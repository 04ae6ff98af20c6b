//! Per-invocation temporary directory for compiled stylesheets
//!
//! Each call owns one `TempWorkspace`. Dropping it without calling
//! [`TempWorkspace::finish`] removes the directory, so an aborted run does
//! not leave partial output behind.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::{InlineSassError, Result};
use crate::utils::TEMP_DIR_PREFIX;

#[derive(Debug)]
pub struct TempWorkspace {
    dir: TempDir,
}

impl TempWorkspace {
    /// Create a fresh `css-XXXXXX` directory under `root`, or under the OS
    /// temp root when `root` is `None`
    pub fn create(root: Option<&Path>) -> Result<Self> {
        let root = root.map_or_else(std::env::temp_dir, Path::to_path_buf);
        let dir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir_in(&root)
            .map_err(|e| InlineSassError::io(&root, e))?;

        log::debug!("Created temp dir {}", dir.path().display());
        Ok(Self { dir })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a compiled stylesheet into the workspace, replacing any file of
    /// the same name
    pub fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(file_name);
        std::fs::write(&path, contents).map_err(|e| InlineSassError::io(&path, e))?;
        Ok(path)
    }

    /// Delete the directory or keep it for inspection
    ///
    /// Returns the directory path. Deletion failures are logged, not raised:
    /// the inlined HTML is already produced by the time cleanup runs.
    pub fn finish(self, delete: bool) -> PathBuf {
        let path = self.dir.path().to_path_buf();

        if delete {
            if let Err(e) = self.dir.close() {
                log::warn!("Failed to remove temp dir {}: {e}", path.display());
            }
        } else {
            let kept = self.dir.keep();
            log::info!("Temp dir: {}", kept.display());
        }

        path
    }
}

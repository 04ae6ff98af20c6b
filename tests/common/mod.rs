//! Test utilities and helper functions for the inline_sass test suite

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway site directory plus a separate root for temp workspaces
#[allow(dead_code)]
pub struct TestSite {
    pub dir: TempDir,
    pub temp_root: TempDir,
}

#[allow(dead_code)]
impl TestSite {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
            temp_root: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the site root, creating parent directories
    pub fn write(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Directories created under the temp root by finished invocations
    pub fn temp_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(self.temp_root.path())? {
            let path = entry?.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        Ok(dirs)
    }
}

/// Creates a test HTML document with the given head and body content
#[allow(dead_code)]
pub fn create_test_html(head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Mail</title>
    {head}
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Collapse `prop: value` to `prop:value` so assertions ignore declaration spacing
#[allow(dead_code)]
pub fn compact(html: &str) -> String {
    html.replace(": ", ":")
}

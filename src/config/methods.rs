//! Loading `InlineSassOptions` from JSON
//!
//! The JSON shape mirrors the option bag accepted by the library API:
//! `{"url": "...", "deleteTempDir": false, "keepStyleTags": true, "sass": {...}}`.
//! Loaded options pass through the builder so the same validation applies.

use std::path::Path;

use super::types::InlineSassOptions;
use crate::error::{InlineSassError, Result};

impl InlineSassOptions {
    /// Parse options from a JSON document
    ///
    /// Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: InlineSassOptions = serde_json::from_str(json)?;
        options.into_builder().build()
    }

    /// Read and parse options from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| InlineSassError::io(path, e))?;
        Self::from_json_str(&json).map_err(|e| match e {
            InlineSassError::Config(message) => {
                InlineSassError::Config(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }
}

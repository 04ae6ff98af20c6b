//! Getter methods for `InlineSassOptions`
//!
//! This module provides the accessor methods for retrieving configuration
//! values from an `InlineSassOptions` instance.

use std::path::Path;
use std::time::Duration;

use super::types::{InlineSassOptions, InlinerOptions, SassOptions};

impl InlineSassOptions {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn delete_temp_dir(&self) -> bool {
        self.delete_temp_dir
    }

    #[must_use]
    pub fn temp_root(&self) -> Option<&Path> {
        self.temp_root.as_deref()
    }

    #[must_use]
    pub fn inline_timeout(&self) -> Option<Duration> {
        self.inline_timeout_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn sass(&self) -> &SassOptions {
        &self.sass
    }

    #[must_use]
    pub fn inliner(&self) -> &InlinerOptions {
        &self.inliner
    }
}

//! Fluent builder for `InlineSassOptions`
//!
//! Every field has a default, so a builder can be built straight away.
//! `build()` normalizes paths and validates the values that the engines
//! would otherwise reject late.

use std::path::PathBuf;

use super::types::{CssStyle, InlineSassOptions};
use crate::error::{InlineSassError, Result};

#[derive(Debug, Clone, Default)]
pub struct InlineSassOptionsBuilder {
    pub(crate) options: InlineSassOptions,
}

impl InlineSassOptions {
    /// Create a builder for configuring `InlineSassOptions` with a fluent interface
    #[must_use]
    pub fn builder() -> InlineSassOptionsBuilder {
        InlineSassOptionsBuilder::default()
    }

    /// Reopen these options for modification
    #[must_use]
    pub fn into_builder(self) -> InlineSassOptionsBuilder {
        InlineSassOptionsBuilder { options: self }
    }
}

impl InlineSassOptionsBuilder {
    /// Base URL for resolving relative stylesheet links.
    ///
    /// `file:///path/to/dir` resolves links against a local directory; any
    /// other scheme is stripped and the remainder used as a string prefix.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.options.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn delete_temp_dir(mut self, delete: bool) -> Self {
        self.options.delete_temp_dir = delete;
        self
    }

    #[must_use]
    pub fn temp_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.temp_root = Some(dir.into());
        self
    }

    #[must_use]
    pub fn inline_timeout_secs(mut self, secs: u64) -> Self {
        self.options.inline_timeout_secs = Some(secs);
        self
    }

    #[must_use]
    pub fn style(mut self, style: CssStyle) -> Self {
        self.options.sass.style = style;
        self
    }

    #[must_use]
    pub fn load_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.sass.load_paths.push(dir.into());
        self
    }

    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.options.sass.quiet = quiet;
        self
    }

    #[must_use]
    pub fn inline_style_tags(mut self, inline: bool) -> Self {
        self.options.inliner.inline_style_tags = inline;
        self
    }

    #[must_use]
    pub fn keep_style_tags(mut self, keep: bool) -> Self {
        self.options.inliner.keep_style_tags = keep;
        self
    }

    #[must_use]
    pub fn keep_link_tags(mut self, keep: bool) -> Self {
        self.options.inliner.keep_link_tags = keep;
        self
    }

    #[must_use]
    pub fn load_remote_stylesheets(mut self, load: bool) -> Self {
        self.options.inliner.load_remote_stylesheets = load;
        self
    }

    #[must_use]
    pub fn extra_css(mut self, css: impl Into<String>) -> Self {
        self.options.inliner.extra_css = Some(css.into());
        self
    }

    #[must_use]
    pub fn preallocate_node_capacity(mut self, capacity: usize) -> Self {
        self.options.inliner.preallocate_node_capacity = capacity;
        self
    }

    /// Validate and finish the options
    ///
    /// # Errors
    ///
    /// Returns `InlineSassError::Config` when the temp root cannot be made
    /// absolute, when the node capacity is zero, or when the timeout is zero.
    pub fn build(self) -> Result<InlineSassOptions> {
        let mut options = self.options;

        if let Some(root) = options.temp_root.take() {
            let absolute = std::path::absolute(&root).map_err(|e| {
                InlineSassError::Config(format!(
                    "temp root '{}' cannot be made absolute: {e}",
                    root.display()
                ))
            })?;
            options.temp_root = Some(absolute);
        }

        if options.inliner.preallocate_node_capacity == 0 {
            return Err(InlineSassError::Config(
                "preallocateNodeCapacity must be at least 1".to_string(),
            ));
        }

        if options.inline_timeout_secs == Some(0) {
            return Err(InlineSassError::Config(
                "inlineTimeoutSecs must be at least 1".to_string(),
            ));
        }

        Ok(options)
    }
}

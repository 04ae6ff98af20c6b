//! Compile Sass stylesheets.
//!
//! This module uses [`grass`] under the hood. The syntax (indented `.sass`
//! or `.scss`) is picked from the file extension.

use grass::{Options, OutputStyle};
use std::path::Path;

use crate::config::{CssStyle, SassOptions};
use crate::error::{InlineSassError, Result};

/// Sass compiler configured once per invocation
#[derive(Debug, Clone, Default)]
pub struct SassCompiler {
    settings: SassOptions,
}

impl SassCompiler {
    #[must_use]
    pub fn new(settings: SassOptions) -> Self {
        Self { settings }
    }

    fn options(&self) -> Options<'_> {
        let style = match self.settings.style {
            CssStyle::Expanded => OutputStyle::Expanded,
            CssStyle::Compressed => OutputStyle::Compressed,
        };

        Options::default()
            .style(style)
            .quiet(self.settings.quiet)
            .load_paths(self.settings.load_paths.as_slice())
    }

    /// Compile the stylesheet at `path` to CSS
    ///
    /// # Errors
    ///
    /// `InlineSassError::Compile` if the file is missing or does not compile.
    pub fn compile_path(&self, path: &Path) -> Result<String> {
        grass::from_path(path, &self.options()).map_err(|e| InlineSassError::Compile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Compile SCSS source text to CSS
    ///
    /// # Errors
    ///
    /// `InlineSassError::Compile` with the placeholder path `<string>` if the
    /// source does not compile.
    pub fn compile_str(&self, source: &str) -> Result<String> {
        grass::from_string(source, &self.options()).map_err(|e| InlineSassError::Compile {
            path: "<string>".into(),
            message: e.to_string(),
        })
    }
}

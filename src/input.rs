//! Input resolution
//!
//! Decides whether the caller handed us a path to an HTML file or the HTML
//! text itself, loads the text, and works out the base against which
//! relative stylesheet links are resolved.

use std::path::{Path, PathBuf};

use crate::config::InlineSassOptions;
use crate::error::{InlineSassError, Result};
use crate::utils::{file_url_path, strip_scheme};

/// Where the HTML text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOrigin {
    /// Read from this file
    File(PathBuf),
    /// Passed in directly as text
    Literal,
}

/// Base against which relative stylesheet hrefs are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetBase {
    /// A local directory (the input file's directory or a `file://` url)
    Directory(PathBuf),
    /// The remainder of a non-file url after its scheme was stripped.
    /// It is only joined with hrefs as a string prefix.
    Remote(String),
    /// No base; hrefs are used as given
    None,
}

impl StylesheetBase {
    /// Resolve a link href to the on-disk path of its source
    #[must_use]
    pub fn resolve(&self, href: &str) -> PathBuf {
        match self {
            StylesheetBase::Directory(dir) => dir.join(href),
            StylesheetBase::Remote(prefix) if !prefix.is_empty() => Path::new(prefix).join(href),
            StylesheetBase::Remote(_) | StylesheetBase::None => PathBuf::from(href),
        }
    }

    /// The local directory, when the base is one
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        match self {
            StylesheetBase::Directory(dir) => Some(dir),
            _ => None,
        }
    }
}

/// HTML text plus everything needed to resolve its links
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub html: String,
    pub origin: InputOrigin,
    pub base: StylesheetBase,
}

/// Load the HTML text and resolve the stylesheet base
///
/// A `path_or_html` naming an existing file wins: its contents are the HTML
/// and its directory is the base, whatever `url` says. Otherwise the string
/// is the HTML and the base comes from `url`.
///
/// # Errors
///
/// Returns `InlineSassError::Io` if the named file exists but cannot be read.
pub fn resolve_input(path_or_html: &str, options: &InlineSassOptions) -> Result<ResolvedInput> {
    let candidate = Path::new(path_or_html);

    if is_existing_file(candidate) {
        let html =
            std::fs::read_to_string(candidate).map_err(|e| InlineSassError::io(candidate, e))?;
        let base = file_directory(candidate)?;

        log::debug!(
            "Loaded HTML from {} ({} bytes), base directory {}",
            candidate.display(),
            html.len(),
            base.display()
        );

        return Ok(ResolvedInput {
            html,
            origin: InputOrigin::File(candidate.to_path_buf()),
            base: StylesheetBase::Directory(base),
        });
    }

    Ok(ResolvedInput {
        html: path_or_html.to_string(),
        origin: InputOrigin::Literal,
        base: base_from_url(options.url()),
    })
}

/// Derive the stylesheet base from the `url` option
#[must_use]
pub fn base_from_url(url: Option<&str>) -> StylesheetBase {
    let Some(url) = url else {
        return StylesheetBase::None;
    };

    if let Some(path) = file_url_path(url) {
        return StylesheetBase::Directory(PathBuf::from(path));
    }

    StylesheetBase::Remote(strip_scheme(url).to_string())
}

fn is_existing_file(candidate: &Path) -> bool {
    // Longer than PATH_MAX: certainly markup, skip the stat
    if candidate.as_os_str().is_empty() || candidate.as_os_str().len() > 4096 {
        return false;
    }
    candidate.is_file()
}

/// Absolute directory containing `file`
fn file_directory(file: &Path) -> Result<PathBuf> {
    let parent = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::path::absolute(&parent).map_err(|e| InlineSassError::io(parent, e))
}

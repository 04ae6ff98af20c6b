//! URL and path manipulation utilities.
//!
//! This module provides the small conversions between `file://` URLs,
//! scheme-prefixed base URLs and filesystem paths used by the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use url::Url;

use super::constants::FILE_SCHEME;

/// Any `scheme://` prefix, e.g. `https://` or `file://`
#[allow(clippy::expect_used)]
static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+://").expect("scheme prefix regex is valid"));

/// Strip a leading `scheme://` prefix, returning the remainder
///
/// Strings without a scheme are returned unchanged.
#[must_use]
pub fn strip_scheme(url: &str) -> &str {
    match SCHEME_PREFIX.find(url) {
        Some(m) => &url[m.end()..],
        None => url,
    }
}

/// Local path carried by a `file://` URL, if the URL uses that scheme
#[must_use]
pub fn file_url_path(url: &str) -> Option<&str> {
    url.strip_prefix(FILE_SCHEME)
}

/// Build a `file://` href for a compiled stylesheet
///
/// Path separators are normalized to forward slashes so the href is a valid
/// URL on every platform.
#[must_use]
pub fn file_href(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    if normalized.starts_with('/') {
        format!("{FILE_SCHEME}{normalized}")
    } else {
        // Drive-letter paths need the extra slash: file:///C:/...
        format!("{FILE_SCHEME}/{normalized}")
    }
}

/// `file://<dir>/` URL for an absolute directory
///
/// Returns `None` for relative paths, which cannot be expressed as file URLs.
#[must_use]
pub fn directory_url(dir: &Path) -> Option<Url> {
    Url::from_directory_path(dir).ok()
}

/// Parse a caller-supplied base URL, logging and discarding unusable values
#[must_use]
pub fn parse_base_url(url: &str) -> Option<Url> {
    match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("Ignoring base URL '{url}' for inlining: {e}");
            None
        }
    }
}

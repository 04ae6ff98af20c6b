//! Shared constants for inline_sass
//!
//! This module contains the fixed names and suffixes used throughout the
//! codebase to ensure consistency and avoid magic strings.

/// Link suffix for the indented Sass syntax
pub const SASS_SUFFIX: &str = ".sass";

/// Link suffix for the SCSS syntax
pub const SCSS_SUFFIX: &str = ".scss";

/// Extension given to every compiled stylesheet
pub const CSS_EXTENSION: &str = "css";

/// Selector matching every link whose href ends in a Sass suffix
///
/// Attribute suffix matching is case-sensitive, so `STYLE.SCSS` is left alone.
pub const SASS_LINK_SELECTOR: &str = r#"link[href$=".sass"], link[href$=".scss"]"#;

/// Attribute that keeps the pre-rewrite href of a transpiled link
pub const ORIGINAL_HREF_ATTR: &str = "data-original-href";

/// Prefix of the per-invocation temporary directory
///
/// The final name is this prefix followed by a random suffix (`css-a1B2c3`).
pub const TEMP_DIR_PREFIX: &str = "css-";

/// Scheme prefix for local file URLs
pub const FILE_SCHEME: &str = "file://";

/// Default node capacity hint handed to the inliner
pub const DEFAULT_NODE_CAPACITY: usize = 32;

//! Core configuration types for the inline_sass pipeline
//!
//! This module contains `InlineSassOptions` and the two option groups it
//! carries: compiler settings for `grass` and engine settings forwarded to
//! `css-inline`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::DEFAULT_NODE_CAPACITY;

/// Output style of compiled stylesheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssStyle {
    #[default]
    Expanded,
    Compressed,
}

impl std::str::FromStr for CssStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expanded" => Ok(CssStyle::Expanded),
            "compressed" => Ok(CssStyle::Compressed),
            other => Err(format!(
                "unknown style '{other}' (expected 'expanded' or 'compressed')"
            )),
        }
    }
}

/// Settings for the Sass compiler
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SassOptions {
    pub style: CssStyle,
    /// Extra directories searched by `@use` and `@import`
    pub load_paths: Vec<PathBuf>,
    /// Suppress `@warn` and `@debug` output
    pub quiet: bool,
}

/// Settings forwarded verbatim to the CSS inlining engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InlinerOptions {
    /// Inline rules found in `<style>` tags
    pub inline_style_tags: bool,
    /// Keep `<style>` tags after inlining
    pub keep_style_tags: bool,
    /// Keep `<link>` tags after inlining.
    ///
    /// Defaults to `true` so rewritten links keep their `data-original-href`.
    pub keep_link_tags: bool,
    /// Load stylesheets referenced by `<link>` tags
    pub load_remote_stylesheets: bool,
    /// Additional CSS inlined on top of the document's own rules
    pub extra_css: Option<String>,
    /// Initial node capacity of the engine's document arena
    pub preallocate_node_capacity: usize,
}

impl Default for InlinerOptions {
    fn default() -> Self {
        Self {
            inline_style_tags: true,
            keep_style_tags: false,
            keep_link_tags: true,
            load_remote_stylesheets: true,
            extra_css: None,
            preallocate_node_capacity: DEFAULT_NODE_CAPACITY,
        }
    }
}

/// Options for one `inline_sass` invocation
///
/// Serialized field names follow the camelCase names callers already use in
/// JSON option bags (`url`, `deleteTempDir`, `keepLinkTags`, ...). Inliner
/// settings are flattened into the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InlineSassOptions {
    /// Base URL for resolving relative links when the input is not a file.
    /// A `file://` URL names a local base directory.
    pub(crate) url: Option<String>,

    /// Remove the temporary stylesheet directory after inlining.
    ///
    /// Default: true
    pub(crate) delete_temp_dir: bool,

    /// Directory under which the temporary directory is created.
    ///
    /// **INVARIANT:** Absolute when set through the builder.
    /// Default: the OS temp root
    pub(crate) temp_root: Option<PathBuf>,

    /// Upper bound for the inline stage; `None` waits indefinitely
    pub(crate) inline_timeout_secs: Option<u64>,

    pub(crate) sass: SassOptions,

    #[serde(flatten)]
    pub(crate) inliner: InlinerOptions,
}

impl Default for InlineSassOptions {
    fn default() -> Self {
        Self {
            url: None,
            delete_temp_dir: true,
            temp_root: None,
            inline_timeout_secs: None,
            sass: SassOptions::default(),
            inliner: InlinerOptions::default(),
        }
    }
}

//! Pipeline orchestration
//!
//! Sequences the stages of one invocation: resolve input, parse, transpile
//! Sass links into a fresh temp directory, serialize, inline, clean up.
//! Everything up to serialization is fail-fast; the inline stage degrades.

use std::path::PathBuf;

use crate::config::InlineSassOptions;
use crate::document::{parse_document, serialize_document};
use crate::error::Result;
use crate::inliner::{InlineOutcome, engine_base_url, inline_html};
use crate::input::resolve_input;
use crate::transpiler::{CompiledStylesheet, SassCompiler, transpile_stylesheets};
use crate::workspace::TempWorkspace;

/// Everything one invocation produced
#[derive(Debug, Clone)]
pub struct InlineReport {
    pub outcome: InlineOutcome,
    /// The invocation's temp directory (gone unless `temp_dir_kept`)
    pub temp_dir: PathBuf,
    pub temp_dir_kept: bool,
    /// One entry per rewritten link, in document order
    pub stylesheets: Vec<CompiledStylesheet>,
}

/// Compile linked Sass stylesheets and inline all CSS into `style` attributes
///
/// `path_or_html` is either a path to an existing HTML file or the HTML text
/// itself.
///
/// # Errors
///
/// Fails on blank input (`UnparseableFile` / `NotHtml`), on the first Sass
/// stylesheet that does not compile (`Compile`), and on filesystem errors.
/// A failed inline pass is returned as `InlineOutcome::Degraded`.
pub async fn inline_sass(path_or_html: &str, options: &InlineSassOptions) -> Result<InlineOutcome> {
    inline_sass_with_report(path_or_html, options)
        .await
        .map(|report| report.outcome)
}

/// Same as [`inline_sass`], also reporting the temp directory and the
/// compiled stylesheets
pub async fn inline_sass_with_report(
    path_or_html: &str,
    options: &InlineSassOptions,
) -> Result<InlineReport> {
    let input = resolve_input(path_or_html, options)?;
    let workspace = TempWorkspace::create(options.temp_root())?;

    // The tree is not Send; it must be gone before the inline stage awaits.
    let (html, stylesheets) = {
        let document = parse_document(&input)?;
        let compiler = SassCompiler::new(options.sass().clone());
        let stylesheets = transpile_stylesheets(&document, &input.base, &workspace, &compiler)?;
        (serialize_document(&document)?, stylesheets)
    };

    log::debug!(
        "Transpiled {} stylesheet(s) into {}",
        stylesheets.len(),
        workspace.path().display()
    );

    let base_url = engine_base_url(options.url(), &input.base);
    let outcome = inline_html(
        html,
        options.inliner().clone(),
        base_url,
        options.inline_timeout(),
    )
    .await;

    let temp_dir_kept = !options.delete_temp_dir();
    let temp_dir = workspace.finish(options.delete_temp_dir());

    Ok(InlineReport {
        outcome,
        temp_dir,
        temp_dir_kept,
        stylesheets,
    })
}

//! Sass stylesheet transpilation
//!
//! Finds `<link>` elements pointing at `.sass`/`.scss` sources, compiles each
//! one into the invocation's temp directory, and rewrites the link to the
//! compiled file. The original href is kept in `data-original-href`.

pub mod compiler;

pub use compiler::SassCompiler;

use kuchiki::NodeRef;
use std::path::PathBuf;

use crate::error::{InlineSassError, Result};
use crate::input::StylesheetBase;
use crate::utils::{
    CSS_EXTENSION, ORIGINAL_HREF_ATTR, SASS_LINK_SELECTOR, SASS_SUFFIX, SCSS_SUFFIX, file_href,
};
use crate::workspace::TempWorkspace;

/// One rewritten link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledStylesheet {
    /// href as written in the document
    pub original_href: String,
    /// Sass source that was compiled
    pub source_path: PathBuf,
    /// Compiled CSS inside the temp directory
    pub output_path: PathBuf,
    /// `file://` href now on the link
    pub href: String,
}

/// Whether an href names a Sass source (case-sensitive suffix match)
#[must_use]
pub fn is_sass_href(href: &str) -> bool {
    href.ends_with(SASS_SUFFIX) || href.ends_with(SCSS_SUFFIX)
}

/// File name of the compiled stylesheet for an href
///
/// Only the basename counts, so `a/style.scss` and `b/style.scss` both map
/// to `style.css` and the later one overwrites the earlier.
#[must_use]
pub fn compiled_file_name(href: &str) -> String {
    let basename = href.rsplit(['/', '\\']).next().unwrap_or(href);
    let stem = basename.strip_suffix(SASS_SUFFIX).unwrap_or(basename);
    let stem = stem.strip_suffix(SCSS_SUFFIX).unwrap_or(stem);
    format!("{stem}.{CSS_EXTENSION}")
}

/// Compile every Sass-linked stylesheet and rewrite its `<link>` in place
///
/// Links are processed in document order. Links with an empty href are
/// skipped without error.
///
/// # Errors
///
/// The first failed compilation aborts the whole pass with
/// `InlineSassError::Compile`; links already rewritten stay rewritten.
pub fn transpile_stylesheets(
    document: &NodeRef,
    base: &StylesheetBase,
    workspace: &TempWorkspace,
    compiler: &SassCompiler,
) -> Result<Vec<CompiledStylesheet>> {
    let mut compiled = Vec::new();

    // Direct iteration is safe: only attributes change, no node is detached.
    for link in document
        .select(SASS_LINK_SELECTOR)
        .map_err(|()| InlineSassError::Document(format!("invalid selector {SASS_LINK_SELECTOR}")))?
    {
        let href = {
            let attrs = link.attributes.borrow();
            attrs.get("href").map(std::string::ToString::to_string)
        };

        let Some(original_href) = href.filter(|h| !h.is_empty()) else {
            continue;
        };

        let source_path = base.resolve(&original_href);
        let css = compiler.compile_path(&source_path)?;

        let output_path = workspace.write(&compiled_file_name(&original_href), &css)?;
        let new_href = file_href(&output_path);

        {
            let mut attrs = link.attributes.borrow_mut();
            attrs.insert("href", new_href.clone());
            attrs.insert(ORIGINAL_HREF_ATTR, original_href.clone());
        }

        log::debug!(
            "Compiled {} -> {} ({} bytes)",
            source_path.display(),
            output_path.display(),
            css.len()
        );

        compiled.push(CompiledStylesheet {
            original_href,
            source_path,
            output_path,
            href: new_href,
        });
    }

    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::serialize_document;
    use kuchiki::traits::TendrilSink;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_sass_href_is_case_sensitive() {
        assert!(is_sass_href("styles/main.scss"));
        assert!(is_sass_href("main.sass"));
        assert!(!is_sass_href("main.SCSS"));
        assert!(!is_sass_href("main.css"));
        assert!(!is_sass_href("main.scss?v=2"));
    }

    #[test]
    fn test_compiled_file_name_strips_either_suffix() {
        assert_eq!(compiled_file_name("a.scss"), "a.css");
        assert_eq!(compiled_file_name("theme/b.sass"), "b.css");
        assert_eq!(compiled_file_name(r"theme\c.scss"), "c.css");
        assert_eq!(compiled_file_name("../shared/mail.scss"), "mail.css");
    }

    #[test]
    fn test_rewrites_matching_links_only() {
        let site = TempDir::new().unwrap();
        fs::write(site.path().join("main.scss"), "$c: red;\np { color: $c; }").unwrap();

        let html = r#"<html><head>
<link rel="stylesheet" href="main.scss">
<link rel="stylesheet" href="plain.css">
<link rel="stylesheet" href="UPPER.SCSS">
</head><body><p>x</p></body></html>"#;
        let document = kuchiki::parse_html().one(html);

        let workspace = TempWorkspace::create(Some(site.path())).unwrap();
        let base = StylesheetBase::Directory(site.path().to_path_buf());
        let compiled =
            transpile_stylesheets(&document, &base, &workspace, &SassCompiler::default()).unwrap();

        assert_eq!(compiled.len(), 1);
        let sheet = &compiled[0];
        assert_eq!(sheet.original_href, "main.scss");
        assert_eq!(sheet.source_path, site.path().join("main.scss"));
        assert_eq!(sheet.output_path, workspace.path().join("main.css"));
        assert!(sheet.href.starts_with("file://"));
        assert!(
            fs::read_to_string(&sheet.output_path)
                .unwrap()
                .contains("color: red")
        );

        let out = serialize_document(&document).unwrap();
        assert!(out.contains(r#"data-original-href="main.scss""#));
        assert!(out.contains(&format!(r#"href="{}""#, sheet.href)));
        assert!(out.contains(r#"href="plain.css""#));
        assert!(out.contains(r#"href="UPPER.SCSS""#));
    }

    #[test]
    fn test_missing_source_aborts() {
        let site = TempDir::new().unwrap();
        let document = kuchiki::parse_html().one(r#"<link rel="stylesheet" href="missing.scss">"#);
        let workspace = TempWorkspace::create(Some(site.path())).unwrap();
        let base = StylesheetBase::Directory(site.path().to_path_buf());

        let err = transpile_stylesheets(&document, &base, &workspace, &SassCompiler::default())
            .unwrap_err();
        assert!(matches!(
            err,
            InlineSassError::Compile { ref path, .. } if path == &site.path().join("missing.scss")
        ));
    }

    #[test]
    fn test_shared_basename_collides() {
        let site = TempDir::new().unwrap();
        for (dir, color) in [("a", "red"), ("b", "blue")] {
            fs::create_dir(site.path().join(dir)).unwrap();
            fs::write(
                site.path().join(dir).join("style.scss"),
                format!("p {{ color: {color}; }}"),
            )
            .unwrap();
        }
        let document = kuchiki::parse_html().one(
            r#"<link rel="stylesheet" href="a/style.scss"><link rel="stylesheet" href="b/style.scss">"#,
        );
        let workspace = TempWorkspace::create(Some(site.path())).unwrap();
        let base = StylesheetBase::Directory(site.path().to_path_buf());

        let compiled =
            transpile_stylesheets(&document, &base, &workspace, &SassCompiler::default()).unwrap();

        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[0].output_path, compiled[1].output_path);
        let files: Vec<_> = fs::read_dir(workspace.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
        let css = fs::read_to_string(workspace.path().join("style.css")).unwrap();
        assert!(css.contains("blue"));
    }
}

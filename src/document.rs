//! Parse/serialize boundary
//!
//! Turns HTML text into a mutable kuchiki tree and renders it back once the
//! stylesheet links have been rewritten.

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

use crate::error::{InlineSassError, Result};
use crate::input::{InputOrigin, ResolvedInput};

/// Parse the resolved input into a mutable document tree
///
/// # Errors
///
/// Blank input yields no document. That is `UnparseableFile` when the text
/// came from a file and `NotHtml` when it was passed in directly.
pub fn parse_document(input: &ResolvedInput) -> Result<NodeRef> {
    if input.html.trim().is_empty() {
        return Err(match &input.origin {
            InputOrigin::File(path) => InlineSassError::UnparseableFile { path: path.clone() },
            InputOrigin::Literal => InlineSassError::NotHtml {
                input: input.html.clone(),
            },
        });
    }

    Ok(kuchiki::parse_html().one(input.html.as_str()))
}

/// Serialize a document tree back to HTML text
pub fn serialize_document(document: &NodeRef) -> Result<String> {
    let mut html_output = Vec::new();
    document
        .serialize(&mut html_output)
        .map_err(|e| InlineSassError::Document(e.to_string()))?;

    String::from_utf8(html_output).map_err(|e| InlineSassError::Document(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::StylesheetBase;
    use std::path::PathBuf;

    fn literal(html: &str) -> ResolvedInput {
        ResolvedInput {
            html: html.to_string(),
            origin: InputOrigin::Literal,
            base: StylesheetBase::None,
        }
    }

    #[test]
    fn test_blank_literal_is_not_html() {
        let err = parse_document(&literal("  \n\t")).unwrap_err();
        assert!(matches!(err, InlineSassError::NotHtml { .. }));
    }

    #[test]
    fn test_blank_file_is_unparseable() {
        let input = ResolvedInput {
            html: String::new(),
            origin: InputOrigin::File(PathBuf::from("empty.html")),
            base: StylesheetBase::Directory(PathBuf::from("/srv")),
        };
        let err = parse_document(&input).unwrap_err();
        assert!(matches!(
            err,
            InlineSassError::UnparseableFile { ref path } if path == &PathBuf::from("empty.html")
        ));
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let html = r#"<!DOCTYPE html>
<html>
<head><title>Test</title></head>
<body>
<div class="card"><p>Check out <a href="https://example.com">this link</a>.</p></div>
<ul><li>one</li><li>two</li></ul>
</body>
</html>"#;

        let document = parse_document(&literal(html)).unwrap();
        let result = serialize_document(&document).unwrap();

        assert!(result.contains(r#"<div class="card"><p>Check out <a href="https://example.com">this link</a>.</p></div>"#));
        assert!(result.contains("<ul><li>one</li><li>two</li></ul>"));
        assert!(result.contains("<title>Test</title>"));
    }

    #[test]
    fn test_fragment_gets_document_skeleton() {
        let document = parse_document(&literal("<p>hello</p>")).unwrap();
        let result = serialize_document(&document).unwrap();
        assert!(result.contains("<body><p>hello</p></body>"));
    }
}

//! Regex-based extraction of shape declarations from icon markup.
//!
//! This is deliberately not a structural markup parser. The upstream icon
//! set is tightly authored: every drawable shape is a flat `<path …>` tag
//! with double-quoted attributes, no nesting tricks, no escaping beyond
//! literal quoted values. Scanning for attribute syntax within recognized
//! opening-tag spans accepts exactly that subset and nothing more; the
//! whitelist in [`crate::validate`] rejects everything unexpected.

use std::sync::OnceLock;

use regex::{CaptureMatches, Regex};

use crate::icon::ShapeDeclaration;

/// Matches one opening `<path …>` tag, capturing its attribute span.
const PATH_TAG_PATTERN: &str = r"<path\s([^>]*)>";

/// Matches one `name="value"` pair inside an attribute span.
const ATTR_PATTERN: &str = r#"(?:\s*|^)([^= ]*)="([^"]*)""#;

static PATH_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static ATTR_REGEX: OnceLock<Regex> = OnceLock::new();

fn path_tag_regex() -> &'static Regex {
    PATH_TAG_REGEX.get_or_init(|| Regex::new(PATH_TAG_PATTERN).expect("invalid regex pattern"))
}

fn attr_regex() -> &'static Regex {
    ATTR_REGEX.get_or_init(|| Regex::new(ATTR_PATTERN).expect("invalid regex pattern"))
}

/// Returns a lazy iterator over every shape declaration in `markup`, in
/// document order.
///
/// The scan is pure and restartable: calling this again on the same text
/// yields the same sequence. Mask declarations (`fill="none"`) are included;
/// use [`ShapeDeclarations::visible`] for the filtered view that feeds the
/// shape count.
pub fn shape_declarations(markup: &str) -> ShapeDeclarations<'_> {
    ShapeDeclarations {
        spans: path_tag_regex().captures_iter(markup),
    }
}

/// Iterator over the shape declarations of one icon's markup.
pub struct ShapeDeclarations<'a> {
    spans: CaptureMatches<'static, 'a>,
}

impl<'a> ShapeDeclarations<'a> {
    /// Drops mask declarations (`fill="none"`) from the sequence entirely.
    /// Masks are placeholders, never real visible shapes.
    pub fn visible(self) -> impl Iterator<Item = ShapeDeclaration> + 'a {
        self.filter(|decl| !decl.is_mask())
    }
}

impl Iterator for ShapeDeclarations<'_> {
    type Item = ShapeDeclaration;

    fn next(&mut self) -> Option<ShapeDeclaration> {
        let span = self.spans.next()?;
        let attr_text = span.get(1).map_or("", |m| m.as_str());
        let mut declaration = ShapeDeclaration::default();
        for attr in attr_regex().captures_iter(attr_text) {
            declaration.insert(&attr[1], &attr[2]);
        }
        Some(declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(decl: &ShapeDeclaration) -> Vec<(String, String)> {
        decl.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_extracts_single_declaration() {
        let markup = r##"<svg><path d="M1 2L3 4" fill="#000"/></svg>"##;
        let decls: Vec<_> = shape_declarations(markup).collect();
        assert_eq!(decls.len(), 1);
        assert_eq!(
            attrs(&decls[0]),
            vec![
                ("d".to_string(), "M1 2L3 4".to_string()),
                ("fill".to_string(), "#000".to_string()),
            ]
        );
    }

    #[test]
    fn test_extracts_in_document_order() {
        let markup = r#"<svg><path d="M0 0"/><path d="M1 1"/><path d="M2 2"/></svg>"#;
        let paths: Vec<_> = shape_declarations(markup)
            .map(|d| d.get("d").unwrap().to_string())
            .collect();
        assert_eq!(paths, vec!["M0 0", "M1 1", "M2 2"]);
    }

    #[test]
    fn test_visible_drops_masks() {
        let markup = r##"<svg><path fill="none" d="M0 0"/><path d="M1 1" fill="#000"/></svg>"##;
        let visible: Vec<_> = shape_declarations(markup).visible().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].get("d"), Some("M1 1"));
    }

    #[test]
    fn test_mask_only_markup_has_empty_visible_sequence() {
        let markup = r#"<svg><path fill="none" d="M0 0"/></svg>"#;
        assert_eq!(shape_declarations(markup).visible().count(), 0);
    }

    #[test]
    fn test_scan_is_restartable() {
        let markup = r#"<svg><path d="M0 0"/><path d="M1 1"/></svg>"#;
        let first: Vec<_> = shape_declarations(markup).collect();
        let second: Vec<_> = shape_declarations(markup).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_declarations() {
        assert_eq!(shape_declarations("<svg></svg>").count(), 0);
        assert_eq!(shape_declarations("").count(), 0);
    }

    #[test]
    fn test_ignores_other_tags() {
        let markup = r#"<svg><rect width="24"/><path d="M0 0"/></svg>"#;
        let decls: Vec<_> = shape_declarations(markup).collect();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].get("d"), Some("M0 0"));
    }
}

//! Document extraction - locate MathML inside surrounding markup
//!
//! The renderer only ever sees a parsed tree; this module is the shim that
//! finds the `<math>…</math>` substring in a larger document (e.g. an XHTML
//! chapter) and drives the parse-then-render pipeline. A document with no
//! math element passes through unchanged.

use crate::error::ConvertResult;
use crate::parser::parse_mathml;
use math_grid::{GridRenderer, RenderOptions};
use regex_lite::Regex;
use tracing::{debug, trace};

/// The first `<math>…</math>` substring of a document, if any.
pub fn extract_mathml(input: &str) -> Option<&str> {
    let pattern = Regex::new(r"(?s)<math[^>]*>.*?</math>").expect("valid math pattern");
    pattern.find(input).map(|m| m.as_str())
}

/// Convert the first MathML element of a document to its text-grid form.
///
/// Returns the input unchanged when it contains no math element. Only the
/// first element is converted; any further ones are left to the caller.
pub fn mathml_to_text(input: &str, options: RenderOptions) -> ConvertResult<String> {
    let Some(mathml) = extract_mathml(input) else {
        trace!("no math element found, passing document through");
        return Ok(input.to_string());
    };

    debug!(len = mathml.len(), "converting math element");
    let tree = parse_mathml(mathml)?;
    let grid = GridRenderer::with_options(options).render(&tree);
    Ok(grid.render())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_finds_element() {
        let html = "<p>before</p><math><mi>x</mi></math><p>after</p>";
        assert_eq!(extract_mathml(html), Some("<math><mi>x</mi></math>"));
    }

    #[test]
    fn test_extract_spans_newlines() {
        let html = "<math>\n  <mi>x</mi>\n</math>";
        assert_eq!(extract_mathml(html), Some(html));
    }

    #[test]
    fn test_extract_with_attributes() {
        let html = r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mi>x</mi></math>"#;
        assert!(extract_mathml(html).is_some());
    }

    #[test]
    fn test_extract_none() {
        assert_eq!(extract_mathml("<p>just text</p>"), None);
    }

    #[test]
    fn test_pipeline_passthrough_without_math() {
        let html = "<p>Just plain text</p>";
        let out = mathml_to_text(html, RenderOptions::default()).unwrap();
        assert_eq!(out, html);
    }

    #[test]
    fn test_pipeline_renders_fraction() {
        let html = "<p>Here: <math><mfrac><mi>x</mi><mi>y</mi></mfrac></math></p>";
        let out = mathml_to_text(html, RenderOptions::default()).unwrap();
        assert_eq!(out, "x\n─\ny");
    }

    #[test]
    fn test_pipeline_takes_first_element() {
        let html = "<math><mi>a</mi></math> and <math><mi>b</mi></math>";
        let out = mathml_to_text(html, RenderOptions::default()).unwrap();
        assert_eq!(out, "a");
    }

    #[test]
    fn test_pipeline_malformed_math_errors() {
        let html = "<math><mfrac></math>";
        assert!(mathml_to_text(html, RenderOptions::default()).is_err());
    }
}

//! MathML Parser - build markup trees from MathML XML
//!
//! Parses a MathML fragment into the `MarkupNode` tree the renderer
//! consumes. Text between elements is preserved: text before the first child
//! becomes the parent's own text, text after a child becomes that child's
//! tail run, matching how document markup interleaves text and elements.

use crate::error::{ConvertError, ConvertResult};
use math_grid::{MarkupNode, NodeKind};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Parse a MathML string into a markup tree.
///
/// Input that does not start with a `math` element is wrapped in one first,
/// so bare fragments like `<mi>x</mi>` parse too.
pub fn parse_mathml(mathml: &str) -> ConvertResult<MarkupNode> {
    let trimmed = mathml.trim();
    if trimmed.starts_with("<math") {
        MathMlParser::new(trimmed).parse()
    } else {
        let wrapped =
            format!(r#"<math xmlns="http://www.w3.org/1998/Math/MathML">{trimmed}</math>"#);
        MathMlParser::new(&wrapped).parse()
    }
}

/// Event-driven parser for MathML content.
pub struct MathMlParser<'a> {
    reader: Reader<&'a [u8]>,
}

impl<'a> MathMlParser<'a> {
    /// Create a new parser from a MathML string.
    pub fn new(xml: &'a str) -> Self {
        // Text is kept untrimmed; the renderer decides where trimming applies.
        Self {
            reader: Reader::from_str(xml),
        }
    }

    /// Parse the root element and return its tree.
    pub fn parse(&mut self) -> ConvertResult<MarkupNode> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match self.reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let tag = local_name_from_bytes(e.name().as_ref());
                    return self.parse_element(NodeKind::from_tag(&tag), &tag);
                }
                Ok(Event::Empty(ref e)) => {
                    let tag = local_name_from_bytes(e.name().as_ref());
                    return Ok(MarkupNode::new(NodeKind::from_tag(&tag)));
                }
                Ok(Event::Eof) => {
                    return Err(ConvertError::Parse("no root element found".to_string()))
                }
                Err(e) => return Err(ConvertError::Xml(e)),
                _ => {}
            }
        }
    }

    /// Parse one element's content until its end tag.
    fn parse_element(&mut self, kind: NodeKind, end_tag: &str) -> ConvertResult<MarkupNode> {
        let mut node = MarkupNode::new(kind);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match self.reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let tag = local_name_from_bytes(e.name().as_ref());
                    let child = self.parse_element(NodeKind::from_tag(&tag), &tag)?;
                    node.children.push(child);
                }
                Ok(Event::Empty(ref e)) => {
                    let tag = local_name_from_bytes(e.name().as_ref());
                    node.children.push(MarkupNode::new(NodeKind::from_tag(&tag)));
                }
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| ConvertError::Parse(format!("bad character data: {e}")))?;
                    append_text(&mut node, &text);
                }
                Ok(Event::End(ref e)) => {
                    if local_name_from_bytes(e.name().as_ref()) == end_tag {
                        break;
                    }
                }
                Ok(Event::Eof) => {
                    return Err(ConvertError::Parse(format!("unclosed element <{end_tag}>")))
                }
                Err(e) => return Err(ConvertError::Xml(e)),
                _ => {}
            }
        }

        Ok(node)
    }
}

/// Attach character data to the right owner: the parent's own text before the
/// first child, the previous child's tail after it.
fn append_text(node: &mut MarkupNode, text: &str) {
    let slot = match node.children.last_mut() {
        Some(last) => last.tail.get_or_insert_with(String::new),
        None => node.text.get_or_insert_with(String::new),
    };
    slot.push_str(text);
}

/// Local name without any namespace prefix.
fn local_name_from_bytes(name: &[u8]) -> String {
    let name_str = String::from_utf8_lossy(name);
    match name_str.find(':') {
        Some(pos) => name_str[pos + 1..].to_string(),
        None => name_str.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_fragment() {
        let node = parse_mathml("<mi>x</mi>").unwrap();
        assert_eq!(node.kind, NodeKind::Math);
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].kind, NodeKind::Identifier);
        assert_eq!(node.children[0].text.as_deref(), Some("x"));
    }

    #[test]
    fn test_parse_fraction() {
        let node = parse_mathml(
            r#"<math xmlns="http://www.w3.org/1998/Math/MathML">
                <mfrac><mi>a</mi><mi>b</mi></mfrac>
            </math>"#,
        )
        .unwrap();
        let frac = &node.children[0];
        assert_eq!(frac.kind, NodeKind::Fraction);
        assert_eq!(frac.children.len(), 2);
    }

    #[test]
    fn test_parse_namespace_prefix() {
        let node = parse_mathml("<m:math><m:mi>x</m:mi></m:math>").unwrap();
        assert_eq!(node.kind, NodeKind::Math);
        assert_eq!(node.children[0].kind, NodeKind::Identifier);
    }

    #[test]
    fn test_parse_tail_text() {
        let node = parse_mathml("<mrow><mi>x</mi> plus <mi>y</mi></mrow>").unwrap();
        let row = &node.children[0];
        assert_eq!(row.children.len(), 2);
        assert_eq!(row.children[0].tail.as_deref(), Some(" plus "));
        assert_eq!(row.children[1].tail, None);
    }

    #[test]
    fn test_parse_leading_text() {
        let node = parse_mathml("<mrow>if <mi>x</mi></mrow>").unwrap();
        let row = &node.children[0];
        assert_eq!(row.text.as_deref(), Some("if "));
    }

    #[test]
    fn test_parse_self_closing_space() {
        let node = parse_mathml(r#"<mrow><mi>a</mi><mspace width="1em"/><mi>b</mi></mrow>"#)
            .unwrap();
        let row = &node.children[0];
        assert_eq!(row.children.len(), 3);
        assert_eq!(row.children[1].kind, NodeKind::Space);
    }

    #[test]
    fn test_parse_entity_escapes() {
        let node = parse_mathml("<mo>&lt;</mo>").unwrap();
        assert_eq!(node.children[0].text.as_deref(), Some("<"));
    }

    #[test]
    fn test_parse_unknown_tag() {
        let node = parse_mathml("<semantics><mi>x</mi></semantics>").unwrap();
        let sem = &node.children[0];
        assert_eq!(sem.kind, NodeKind::Unknown);
        assert_eq!(sem.children.len(), 1);
    }

    #[test]
    fn test_parse_malformed_fails() {
        assert!(parse_mathml("<math><mi>x</math>").is_err());
    }

    #[test]
    fn test_parse_empty_input_wraps_to_empty_root() {
        let node = parse_mathml("").unwrap();
        assert_eq!(node.kind, NodeKind::Math);
        assert!(node.children.is_empty());
    }
}

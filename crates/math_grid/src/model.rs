//! Markup tree - the input model for grid layout
//!
//! This module defines the element tree the renderer consumes: a node kind
//! drawn from a closed vocabulary, optional literal text, optional tail text
//! (document text that follows the node inside its parent), and ordered
//! children. An external parser builds these trees; the renderer never sees
//! raw markup.

use serde::{Deserialize, Serialize};

// =============================================================================
// Node Kind
// =============================================================================

/// The closed set of markup element kinds the renderer lays out.
///
/// Anything outside this set maps to [`NodeKind::Unknown`] and is handled by
/// the default rule (concatenate children, or fall back to literal text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Document root wrapper (`math`)
    Math,
    /// Horizontal group of siblings (`mrow`)
    Row,
    /// Identifier / variable (`mi`)
    Identifier,
    /// Operator (`mo`)
    Operator,
    /// Numeric literal (`mn`)
    Number,
    /// Upright text embedded in math (`mtext`)
    Text,
    /// Explicit spacing (`mspace`)
    Space,
    /// Numerator over denominator (`mfrac`)
    Fraction,
    /// Base with attachment below-right (`msub`)
    Subscript,
    /// Base with attachment above-right (`msup`)
    Superscript,
    /// Base with both attachments (`msubsup`)
    SubSup,
    /// Element directly beneath another (`munder`)
    Under,
    /// Square root (`msqrt`)
    Sqrt,
    /// Any tag outside the closed set
    Unknown,
}

impl NodeKind {
    /// Map a markup tag name to its kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "math" => NodeKind::Math,
            "mrow" => NodeKind::Row,
            "mi" => NodeKind::Identifier,
            "mo" => NodeKind::Operator,
            "mn" => NodeKind::Number,
            "mtext" => NodeKind::Text,
            "mspace" => NodeKind::Space,
            "mfrac" => NodeKind::Fraction,
            "msub" => NodeKind::Subscript,
            "msup" => NodeKind::Superscript,
            "msubsup" => NodeKind::SubSup,
            "munder" => NodeKind::Under,
            "msqrt" => NodeKind::Sqrt,
            _ => NodeKind::Unknown,
        }
    }
}

// =============================================================================
// Markup Node
// =============================================================================

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupNode {
    /// What kind of element this is
    pub kind: NodeKind,
    /// Literal content of the node itself
    pub text: Option<String>,
    /// Document text immediately following this node inside its parent
    pub tail: Option<String>,
    /// Ordered child elements
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    /// Create a node with a kind and nothing else.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: None,
            tail: None,
            children: Vec::new(),
        }
    }

    /// Create a leaf node with literal text.
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            tail: None,
            children: Vec::new(),
        }
    }

    /// Create a node with children.
    pub fn with_children(kind: NodeKind, children: Vec<MarkupNode>) -> Self {
        Self {
            kind,
            text: None,
            tail: None,
            children,
        }
    }

    /// Create a `math` root wrapper.
    pub fn math(children: Vec<MarkupNode>) -> Self {
        Self::with_children(NodeKind::Math, children)
    }

    /// Create a horizontal row group.
    pub fn row(children: Vec<MarkupNode>) -> Self {
        Self::with_children(NodeKind::Row, children)
    }

    /// Create an identifier leaf.
    pub fn identifier(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Identifier, text)
    }

    /// Create an operator leaf.
    pub fn operator(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Operator, text)
    }

    /// Create a number leaf.
    pub fn number(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Number, text)
    }

    /// Create an upright-text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text, text)
    }

    /// Create an explicit space.
    pub fn space() -> Self {
        Self::new(NodeKind::Space)
    }

    /// Create a fraction.
    pub fn fraction(num: MarkupNode, den: MarkupNode) -> Self {
        Self::with_children(NodeKind::Fraction, vec![num, den])
    }

    /// Create a subscript.
    pub fn subscript(base: MarkupNode, sub: MarkupNode) -> Self {
        Self::with_children(NodeKind::Subscript, vec![base, sub])
    }

    /// Create a superscript.
    pub fn superscript(base: MarkupNode, sup: MarkupNode) -> Self {
        Self::with_children(NodeKind::Superscript, vec![base, sup])
    }

    /// Create a combined subscript and superscript.
    pub fn sub_superscript(base: MarkupNode, sub: MarkupNode, sup: MarkupNode) -> Self {
        Self::with_children(NodeKind::SubSup, vec![base, sub, sup])
    }

    /// Create an under-group (e.g. an index beneath a large operator).
    pub fn under(base: MarkupNode, under: MarkupNode) -> Self {
        Self::with_children(NodeKind::Under, vec![base, under])
    }

    /// Create a square root.
    pub fn sqrt(children: Vec<MarkupNode>) -> Self {
        Self::with_children(NodeKind::Sqrt, children)
    }

    /// Attach tail text following this node.
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    /// All children of this node.
    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    /// True when the node carries no text and no non-empty children.
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, str::is_empty)
            && (self.children.is_empty() || self.children.iter().all(|c| c.is_empty()))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(NodeKind::from_tag("mfrac"), NodeKind::Fraction);
        assert_eq!(NodeKind::from_tag("mrow"), NodeKind::Row);
        assert_eq!(NodeKind::from_tag("msubsup"), NodeKind::SubSup);
        assert_eq!(NodeKind::from_tag("annotation"), NodeKind::Unknown);
    }

    #[test]
    fn test_leaf_creation() {
        let node = MarkupNode::identifier("x");
        assert_eq!(node.kind, NodeKind::Identifier);
        assert_eq!(node.text.as_deref(), Some("x"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_fraction_creation() {
        let frac = MarkupNode::fraction(MarkupNode::identifier("a"), MarkupNode::identifier("b"));
        assert_eq!(frac.kind, NodeKind::Fraction);
        assert_eq!(frac.children().len(), 2);
    }

    #[test]
    fn test_tail_text() {
        let node = MarkupNode::identifier("x").with_tail(" and ");
        assert_eq!(node.tail.as_deref(), Some(" and "));
    }

    #[test]
    fn test_is_empty() {
        assert!(MarkupNode::new(NodeKind::Row).is_empty());
        assert!(MarkupNode::identifier("").is_empty());
        assert!(!MarkupNode::identifier("x").is_empty());
        assert!(!MarkupNode::row(vec![MarkupNode::identifier("x")]).is_empty());
    }

    #[test]
    fn test_serialization() {
        let node = MarkupNode::fraction(MarkupNode::number("1"), MarkupNode::number("2"));
        let json = serde_json::to_string(&node).unwrap();
        let deserialized: MarkupNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, deserialized);
    }
}

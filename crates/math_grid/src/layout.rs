//! Grid layout - recursive markup-tree-to-box rendering
//!
//! One entry point, [`GridRenderer::render`], maps a markup node to a
//! [`GridBox`] by dispatching on the node kind and composing the children's
//! boxes with the baseline-aligned compositor. Rendering is a total function:
//! malformed arity degrades to a `?` placeholder box and untranslatable
//! compact glyphs fall back to two-dimensional placement, so no input tree
//! can make it fail.

use crate::compose::{self, concat_horizontal, space_tall_naries, stretch_brackets};
use crate::glyphs;
use crate::grid::GridBox;
use crate::model::{MarkupNode, NodeKind};

/// The fraction bar and square-root overline character.
pub const BAR_CHAR: char = '─';

// =============================================================================
// Render Options
// =============================================================================

/// Options controlling grid rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Substitute compact Unicode sub/superscript glyphs where the whole
    /// attachment translates; disable to force multi-line placement.
    pub compact_glyphs: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            compact_glyphs: true,
        }
    }
}

// =============================================================================
// Grid Renderer
// =============================================================================

/// Renders markup trees into character-grid boxes.
pub struct GridRenderer {
    options: RenderOptions,
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GridRenderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Create a renderer with specific options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a markup node into a box. Never fails; see the module docs for
    /// the degrade-gracefully rules.
    pub fn render(&self, node: &MarkupNode) -> GridBox {
        match node.kind {
            NodeKind::Math => match node.children.first() {
                Some(first) => self.render(first),
                None => GridBox::from_text(node_text(node)),
            },
            NodeKind::Row => self.render_row(node),
            NodeKind::Identifier | NodeKind::Number | NodeKind::Text => {
                GridBox::from_text(node_text(node))
            }
            NodeKind::Space => GridBox::from_text(" "),
            NodeKind::Operator => render_operator(node_text(node)),
            NodeKind::Fraction => self.render_fraction(node),
            NodeKind::Subscript => self.render_subscript(node),
            NodeKind::Superscript => self.render_superscript(node),
            NodeKind::SubSup => self.render_sub_superscript(node),
            NodeKind::Under => self.render_under(node),
            NodeKind::Sqrt => self.render_sqrt(node),
            NodeKind::Unknown => self.render_default(node),
        }
    }

    /// Concatenate a sibling row after the row-level pre-passes (spacing
    /// around tall n-ary stacks, stretching brackets over tall content).
    fn concat_row(&self, boxes: Vec<GridBox>) -> GridBox {
        concat_horizontal(stretch_brackets(space_tall_naries(boxes)))
    }

    /// Row group: leading text, then each child followed by its tail text.
    fn render_row(&self, node: &MarkupNode) -> GridBox {
        let mut boxes = Vec::new();

        if let Some(text) = node.text.as_deref() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                boxes.push(GridBox::from_text(trimmed));
            }
        }

        for child in &node.children {
            let child_box = self.render(child);
            if child_box.width() > 0 {
                boxes.push(child_box);
            }
            if let Some(tail) = child.tail.as_deref() {
                let trimmed = tail.trim();
                if !trimmed.is_empty() {
                    boxes.push(GridBox::from_text(trimmed));
                }
            }
        }

        if boxes.is_empty() {
            GridBox::empty()
        } else {
            self.concat_row(boxes)
        }
    }

    /// Fraction: numerator centered over a full-width bar, denominator
    /// centered beneath. The bar row is the baseline, so fractions sit level
    /// with `=` signs in an outer row.
    fn render_fraction(&self, node: &MarkupNode) -> GridBox {
        let [num_node, den_node] = match node.children() {
            [n, d] => [n, d],
            _ => return placeholder(),
        };
        let num = self.render(num_node);
        let den = self.render(den_node);

        let width = num.width().max(den.width());
        let height = num.height() + 1 + den.height();
        let baseline = num.height();

        let mut result = GridBox::blank(width, height, baseline);
        // Offsets are computed per part; an odd width difference may leave
        // numerator and denominator one column apart, which is accepted.
        result.blit(&num, (width - num.width()) / 2, 0);
        for x in 0..width {
            result.set(x, baseline, BAR_CHAR);
        }
        result.blit(&den, (width - den.width()) / 2, baseline + 1);
        result
    }

    /// Subscript: compact single-line form when both sides are plain text and
    /// the whole attachment has compact glyphs, else base with the attachment
    /// one row below its baseline, to the right.
    fn render_subscript(&self, node: &MarkupNode) -> GridBox {
        let [base_node, sub_node] = match node.children() {
            [b, s] => [b, s],
            _ => return placeholder(),
        };
        let base = self.render(base_node);
        let sub = self.render(sub_node);

        if is_plain_text(&base) && is_plain_text(&sub) {
            let sub_text = sub.row_text(0).trim().to_string();
            if let Some(compact) = glyphs::try_subscript(&sub_text, self.options.compact_glyphs) {
                let base_text = base.row_text(0).trim().to_string();
                return GridBox::from_text(&format!("{base_text}{compact}"));
            }
        }

        let width = base.width() + sub.width();
        let height = base.height().max(base.baseline() + 1 + sub.height());
        let mut result = GridBox::blank(width, height, base.baseline());
        result.blit(&base, 0, 0);
        result.blit(&sub, base.width(), base.baseline() + 1);
        result
    }

    /// Superscript: mirror of the subscript; in the fallback the attachment
    /// sits strictly above the base with no row overlap.
    fn render_superscript(&self, node: &MarkupNode) -> GridBox {
        let [base_node, sup_node] = match node.children() {
            [b, s] => [b, s],
            _ => return placeholder(),
        };
        let base = self.render(base_node);
        let sup = self.render(sup_node);

        if is_plain_text(&base) && is_plain_text(&sup) {
            let sup_text = sup.row_text(0).trim().to_string();
            if let Some(compact) = glyphs::try_superscript(&sup_text, self.options.compact_glyphs) {
                let base_text = base.row_text(0).trim().to_string();
                return GridBox::from_text(&format!("{base_text}{compact}"));
            }
        }

        let width = base.width() + sup.width();
        let height = sup.height() + base.height();
        let baseline = sup.height() + base.baseline();
        let mut result = GridBox::blank(width, height, baseline);
        result.blit(&sup, base.width(), 0);
        result.blit(&base, 0, sup.height());
        result
    }

    /// Combined sub- and superscript. Compact only when base and both
    /// attachments are plain text, the base is not a large-operator glyph
    /// (those keep stacked limits), and both attachments translate fully.
    /// Fallback stacks superscript, base and subscript, each centered.
    fn render_sub_superscript(&self, node: &MarkupNode) -> GridBox {
        let [base_node, sub_node, sup_node] = match node.children() {
            [b, s, p] => [b, s, p],
            _ => return placeholder(),
        };
        let base = self.render(base_node);
        let sub = self.render(sub_node);
        let sup = self.render(sup_node);

        if is_plain_text(&base) && is_plain_text(&sub) && is_plain_text(&sup) {
            let base_text = base.row_text(0).trim().to_string();
            let base_is_nary = {
                let mut chars = base_text.chars();
                matches!(
                    (chars.next(), chars.next()),
                    (Some(c), None) if compose::NARY_OPS.contains(&c)
                )
            };
            if !base_is_nary {
                let sub_text = sub.row_text(0).trim().to_string();
                let sup_text = sup.row_text(0).trim().to_string();
                if let (Some(compact_sub), Some(compact_sup)) = (
                    glyphs::try_subscript(&sub_text, self.options.compact_glyphs),
                    glyphs::try_superscript(&sup_text, self.options.compact_glyphs),
                ) {
                    return GridBox::from_text(&format!("{base_text}{compact_sub}{compact_sup}"));
                }
            }
        }

        let width = base.width().max(sub.width()).max(sup.width());
        let height = sup.height() + base.height() + sub.height();
        let baseline = sup.height() + base.baseline();
        let mut result = GridBox::blank(width, height, baseline);
        result.blit(&sup, (width - sup.width()) / 2, 0);
        result.blit(&base, (width - base.width()) / 2, sup.height());
        result.blit(&sub, (width - sub.width()) / 2, sup.height() + base.height());
        result
    }

    /// Under group: base centered over the under-part. The baseline stays at
    /// the base, so a `∑` aligns with siblings while its index hangs below.
    fn render_under(&self, node: &MarkupNode) -> GridBox {
        let [base_node, under_node] = match node.children() {
            [b, u] => [b, u],
            _ => return placeholder(),
        };
        let base = self.render(base_node);
        let under = self.render(under_node);

        // The summation glyph renders narrow but reads wide; reserve room.
        let is_summation = base_node
            .text
            .as_deref()
            .map_or(false, |t| t.contains('∑'));

        let mut width = base.width().max(under.width());
        if is_summation {
            width = width.max(2);
        }
        let height = base.height() + under.height();

        let mut result = GridBox::blank(width, height, base.baseline());
        result.blit(&base, (width - base.width()) / 2, 0);
        result.blit(&under, (width - under.width()) / 2, base.height());
        result
    }

    /// Square root: single-row content renders inline as `√(…)`; taller
    /// content gets a drawn radical with an overline and a diagonal gutter.
    fn render_sqrt(&self, node: &MarkupNode) -> GridBox {
        if node.children.is_empty() {
            return GridBox::from_text("√");
        }

        let inner = if node.children.len() == 1 {
            self.render(&node.children[0])
        } else {
            let boxes = node.children.iter().map(|c| self.render(c)).collect();
            self.concat_row(boxes)
        };

        if inner.height() <= 1 {
            let text = inner.row_text(0).trim().to_string();
            return GridBox::from_text(&format!("√({text})"));
        }

        // One extra row for the overline; the diagonal descends through a
        // left gutter as wide as the result is tall.
        let rows = inner.height() + 1;
        let gutter = rows;
        let width = gutter + inner.width() + 3;
        let mut result = GridBox::blank(width, rows, inner.baseline() + 1);

        result.set(gutter, 0, '⟋');
        for x in gutter + 1..width {
            result.set(x, 0, BAR_CHAR);
        }
        for y in 1..rows {
            result.set(gutter - y, y, '╱');
        }
        result.set(0, rows - 1, '\\');
        result.blit_transparent(&inner, gutter + 2, 1);
        result
    }

    /// Default rule for unrecognized kinds: concatenate rendered children,
    /// or fall back to the node's own literal text.
    fn render_default(&self, node: &MarkupNode) -> GridBox {
        if node.children.is_empty() {
            GridBox::from_text(node_text(node))
        } else {
            let boxes = node.children.iter().map(|c| self.render(c)).collect();
            self.concat_row(boxes)
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn node_text(node: &MarkupNode) -> &str {
    node.text.as_deref().unwrap_or("")
}

/// The `?` box that stands in for any structure with the wrong arity.
fn placeholder() -> GridBox {
    GridBox::from_text("?")
}

/// A box eligible for the compact glyph path: one row of plain text with the
/// baseline at the top, i.e. no nested structure.
fn is_plain_text(b: &GridBox) -> bool {
    b.height() == 1 && b.baseline() == 0
}

/// Operator boxes: binary operators get one padding space on each side,
/// brackets stay tight, anything else renders verbatim.
fn render_operator(text: &str) -> GridBox {
    match text {
        "=" | "+" | "-" | "*" | "/" => GridBox::from_text(&format!(" {text} ")),
        "(" | ")" | "[" | "]" | "{" | "}" => GridBox::from_text(text),
        _ => GridBox::from_text(text),
    }
}

// =============================================================================
// Tests
// =============================================================================

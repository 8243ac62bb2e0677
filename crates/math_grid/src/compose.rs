//! Compositor - merge sibling boxes while preserving baseline alignment
//!
//! [`concat_horizontal`] is the single merge primitive: boxes are placed left
//! to right with each one shifted vertically so all baselines land on the
//! same row. The row-level pre-passes ([`space_tall_naries`],
//! [`stretch_brackets`]) adjust a sibling list before concatenation and are
//! applied by the renderer, not by the primitive itself.

use crate::grid::GridBox;

/// Large-operator glyphs that keep their limits stacked around them.
pub(crate) const NARY_OPS: &[char] = &['∏', '∑', '∫', '⋃', '⋂', '⋁', '⋀'];

// =============================================================================
// Horizontal Concatenation
// =============================================================================

/// Concatenate boxes left to right, aligning them on a shared baseline.
///
/// Empty boxes are filtered out first; an empty input yields the empty box
/// and a single survivor is returned unchanged. Boxes with a deeper
/// below-baseline extent push the shared line up, boxes with a higher
/// baseline push it down, so `=` signs and fraction bars stay level.
pub fn concat_horizontal(boxes: Vec<GridBox>) -> GridBox {
    let boxes: Vec<GridBox> = boxes.into_iter().filter(|b| !b.is_empty()).collect();

    if boxes.is_empty() {
        return GridBox::empty();
    }
    if boxes.len() == 1 {
        return boxes.into_iter().next().unwrap();
    }

    let width = boxes.iter().map(GridBox::width).sum();
    let max_above = boxes.iter().map(GridBox::baseline).max().unwrap_or(0);
    let max_below = boxes
        .iter()
        .map(|b| b.height() - b.baseline())
        .max()
        .unwrap_or(0);
    let height = max_above + max_below;

    let mut result = GridBox::blank(width, height, max_above);

    let mut x_offset = 0;
    for b in &boxes {
        // Transparent copy: a short box's blank rows must not erase content
        // an earlier taller box already placed alongside.
        result.blit_transparent(b, x_offset, max_above - b.baseline());
        x_offset += b.width();
    }

    result
}

// =============================================================================
// Row Pre-passes
// =============================================================================

/// Insert a one-space box on each side of tall n-ary operator boxes.
///
/// Only multi-line operator stacks (3+ rows, i.e. an operator carrying both
/// limits) get breathing room; a plain `∑` with one index keeps tight
/// spacing. No space is added at either end of the sequence.
pub fn space_tall_naries(boxes: Vec<GridBox>) -> Vec<GridBox> {
    let needs_space =
        |b: &GridBox| b.height() > 2 && NARY_OPS.iter().any(|&op| b.contains(op));

    let last = boxes.len().saturating_sub(1);
    let mut result = Vec::with_capacity(boxes.len());
    for (i, b) in boxes.into_iter().enumerate() {
        let tall_nary = needs_space(&b);
        if tall_nary && i > 0 {
            result.push(GridBox::from_text(" "));
        }
        result.push(b);
        if tall_nary && i < last {
            result.push(GridBox::from_text(" "));
        }
    }
    result
}

/// Replace matched single-cell bracket pairs with multi-row bracket glyphs
/// when the enclosed content is at least three rows tall.
pub fn stretch_brackets(boxes: Vec<GridBox>) -> Vec<GridBox> {
    if boxes.len() < 3 {
        return boxes;
    }

    let mut result = Vec::with_capacity(boxes.len());
    let mut i = 0;

    while i < boxes.len() {
        if let Some(open) = opening_bracket(&boxes[i]) {
            if let Some(close_idx) = find_matching_close(&boxes, i, open) {
                let content = &boxes[i + 1..close_idx];
                let content_height = content.iter().map(GridBox::height).max().unwrap_or(0);
                if content_height >= 3 {
                    result.push(stretched_bracket(open, content_height));
                    result.extend_from_slice(content);
                    result.push(stretched_bracket(closing_for(open), content_height));
                    i = close_idx + 1;
                    continue;
                }
            }
        }
        result.push(boxes[i].clone());
        i += 1;
    }

    result
}

/// The opening bracket character of a 1×1 box, if that is all it holds.
fn opening_bracket(b: &GridBox) -> Option<char> {
    if b.width() == 1 && b.height() == 1 {
        let ch = b.get(0, 0);
        if matches!(ch, '(' | '[' | '{') {
            return Some(ch);
        }
    }
    None
}

fn closing_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => open,
    }
}

/// Index of the bracket closing `open`, honoring nesting of the same pair.
fn find_matching_close(boxes: &[GridBox], open_idx: usize, open: char) -> Option<usize> {
    let close = closing_for(open);
    let mut depth = 1usize;
    for (j, b) in boxes.iter().enumerate().skip(open_idx + 1) {
        if b.width() == 1 && b.height() == 1 {
            let ch = b.get(0, 0);
            if ch == open {
                depth += 1;
            } else if ch == close {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
        }
    }
    None
}

/// Build a one-column bracket of the given height from the Unicode bracket
/// piece glyphs, baseline in the middle.
fn stretched_bracket(bracket: char, height: usize) -> GridBox {
    if height < 3 {
        return GridBox::from_text(&bracket.to_string());
    }

    // (top, extender, bottom); braces additionally get a middle connector.
    let (top, mid, bottom, connector) = match bracket {
        '(' => ('⎛', '⎜', '⎝', None),
        ')' => ('⎞', '⎟', '⎠', None),
        '[' => ('⎡', '⎢', '⎣', None),
        ']' => ('⎤', '⎥', '⎦', None),
        '{' => ('⎧', '⎪', '⎩', Some('⎨')),
        '}' => ('⎫', '⎪', '⎭', Some('⎬')),
        other => {
            let rows = vec![vec![other]; height];
            return GridBox::from_rows(rows, height / 2);
        }
    };

    let mut rows = Vec::with_capacity(height);
    rows.push(vec![top]);
    for i in 1..height - 1 {
        let ch = match connector {
            Some(c) if i == height / 2 || height == 3 => c,
            _ => mid,
        };
        rows.push(vec![ch]);
    }
    rows.push(vec![bottom]);

    GridBox::from_rows(rows, height / 2)
}

// =============================================================================
// Tests
// =============================================================================

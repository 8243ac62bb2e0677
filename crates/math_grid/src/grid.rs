//! Character-grid box - the geometric unit of composition
//!
//! A [`GridBox`] is a rectangular grid of characters with a declared baseline
//! row. Composition aligns sibling boxes on their baselines, which is what
//! keeps `=` signs, fraction bars and plain text on one shared line. Boxes
//! behave as infinite blank planes clipped to their declared extent: reads
//! outside the grid return a space, writes outside it are dropped.

// =============================================================================
// GridBox
// =============================================================================

/// A rectangular character grid with a baseline.
///
/// A box of width 0 or height 0 is "empty" and is discarded by composition
/// without affecting geometry. Boxes are built by their creator and read-only
/// afterwards; mutation stays inside the function constructing the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBox {
    width: usize,
    height: usize,
    baseline: usize,
    cells: Vec<Vec<char>>,
}

impl GridBox {
    /// Create a single-row box from text. Width is the codepoint count, so
    /// multi-byte symbols such as `∑` occupy one cell.
    pub fn from_text(text: &str) -> Self {
        let row: Vec<char> = text.chars().collect();
        Self {
            width: row.len(),
            height: 1,
            baseline: 0,
            cells: vec![row],
        }
    }

    /// The empty box, identity element of horizontal concatenation.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            baseline: 0,
            cells: Vec::new(),
        }
    }

    /// Create a space-filled box with the given dimensions; the caller fills
    /// it cell by cell.
    pub fn blank(width: usize, height: usize, baseline: usize) -> Self {
        Self {
            width,
            height,
            baseline,
            cells: vec![vec![' '; width]; height],
        }
    }

    /// Build a box directly from rows of characters. Rows are padded with
    /// spaces to the widest row.
    pub fn from_rows(rows: Vec<Vec<char>>, baseline: usize) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = rows;
        for row in &mut cells {
            row.resize(width, ' ');
        }
        Self {
            width,
            height: cells.len(),
            baseline,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row offset from the top at which this box's line of alignment sits.
    pub fn baseline(&self) -> usize {
        self.baseline
    }

    /// True when the box has no area at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Character at `(x, y)`; space when out of range.
    pub fn get(&self, x: usize, y: usize) -> char {
        if y < self.height && x < self.width {
            self.cells[y][x]
        } else {
            ' '
        }
    }

    /// Set the character at `(x, y)`; out-of-range writes are dropped so
    /// composition code can write with offsets that overshoot the grid.
    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        if y < self.height && x < self.width {
            self.cells[y][x] = ch;
        }
    }

    /// Copy every cell of `src` into `self` at the given offset.
    pub fn blit(&mut self, src: &GridBox, x_offset: usize, y_offset: usize) {
        for y in 0..src.height {
            for x in 0..src.width {
                self.set(x + x_offset, y + y_offset, src.get(x, y));
            }
        }
    }

    /// Copy only non-space cells of `src` into `self`, so a blank area never
    /// blanks content an earlier box already placed on a shared row.
    pub fn blit_transparent(&mut self, src: &GridBox, x_offset: usize, y_offset: usize) {
        for y in 0..src.height {
            for x in 0..src.width {
                let ch = src.get(x, y);
                if ch != ' ' {
                    self.set(x + x_offset, y + y_offset, ch);
                }
            }
        }
    }

    /// The contents of one row as a `String`; empty for out-of-range rows.
    pub fn row_text(&self, y: usize) -> String {
        self.cells.get(y).map_or_else(String::new, |row| row.iter().collect())
    }

    /// True when any cell contains `ch`.
    pub fn contains(&self, ch: char) -> bool {
        self.cells.iter().any(|row| row.contains(&ch))
    }

    /// Render the grid as text: rows joined by `\n`, no trailing newline.
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let b = GridBox::from_text("hello");
        assert_eq!(b.width(), 5);
        assert_eq!(b.height(), 1);
        assert_eq!(b.baseline(), 0);
        assert_eq!(b.render(), "hello");
    }

    #[test]
    fn test_from_text_counts_codepoints() {
        let b = GridBox::from_text("∑x²");
        assert_eq!(b.width(), 3);
        assert_eq!(b.render(), "∑x²");
    }

    #[test]
    fn test_empty_box() {
        let b = GridBox::empty();
        assert!(b.is_empty());
        assert_eq!(b.render(), "");
    }

    #[test]
    fn test_blank_dimensions() {
        let b = GridBox::blank(3, 2, 1);
        assert_eq!(b.width(), 3);
        assert_eq!(b.height(), 2);
        assert_eq!(b.baseline(), 1);
        assert_eq!(b.render(), "   \n   ");
    }

    #[test]
    fn test_get_set_bounds() {
        let mut b = GridBox::blank(3, 2, 0);
        b.set(1, 0, 'X');
        assert_eq!(b.get(1, 0), 'X');
        // Out of range: reads give space, writes are dropped
        assert_eq!(b.get(10, 10), ' ');
        b.set(10, 10, 'Y');
        assert_eq!(b.render(), " X \n   ");
    }

    #[test]
    fn test_blit_transparent_keeps_existing() {
        let mut dest = GridBox::blank(2, 1, 0);
        dest.set(0, 0, 'a');
        let mut src = GridBox::blank(2, 1, 0);
        src.set(1, 0, 'b');
        dest.blit_transparent(&src, 0, 0);
        assert_eq!(dest.render(), "ab");
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let b = GridBox::from_rows(vec![vec!['a'], vec!['b', 'c']], 0);
        assert_eq!(b.width(), 2);
        assert_eq!(b.render(), "a \nbc");
    }
}

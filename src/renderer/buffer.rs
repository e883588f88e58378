//! CellGrid and drawing primitives.
//!
//! A 2D grid of characters that a layout is rasterised into before it is
//! written to the terminal. Each cell remembers which box painted it so the
//! output stage can colour boxes apart.

// =============================================================================
// GridCell
// =============================================================================

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub ch: char,
    /// Index of the box that painted this cell, if any.
    pub paint: Option<usize>,
}

impl Default for GridCell {
    fn default() -> Self {
        Self { ch: ' ', paint: None }
    }
}

// =============================================================================
// CellGrid
// =============================================================================

/// Flat row-major grid: `index = y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<GridCell>,
}

impl CellGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![GridCell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&GridCell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Write a cell; out-of-bounds writes are clipped.
    pub fn set(&mut self, x: u16, y: u16, ch: char, paint: Option<usize>) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = GridCell { ch, paint };
        }
    }

    /// Draw a box outline. Degenerate boxes (one cell wide or tall) draw as a
    /// line; empty ones draw nothing.
    pub fn draw_outline(&mut self, x: u16, y: u16, w: u16, h: u16, paint: Option<usize>) {
        if w == 0 || h == 0 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        // Loops stop at the grid edge; `set` clips the rest.
        for cx in x..=right.min(self.width.saturating_sub(1)) {
            self.set(cx, y, '-', paint);
            self.set(cx, bottom, '-', paint);
        }
        for cy in y..=bottom.min(self.height.saturating_sub(1)) {
            self.set(x, cy, '|', paint);
            self.set(right, cy, '|', paint);
        }
        for (cx, cy) in [(x, y), (right, y), (x, bottom), (right, bottom)] {
            self.set(cx, cy, '+', paint);
        }
    }

    /// Write `text` starting at (x, y), clipped to `max_len` cells.
    pub fn label(&mut self, x: u16, y: u16, text: &str, max_len: u16, paint: Option<usize>) {
        for (i, ch) in text.chars().take(max_len as usize).enumerate() {
            self.set(x.saturating_add(i as u16), y, ch, paint);
        }
    }

    /// Rows as plain strings, trailing spaces trimmed.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .take(self.height as usize)
            .map(|row| {
                let line: String = row.iter().map(|c| c.ch).collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Iterate over rows of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.width.max(1) as usize).take(self.height as usize)
    }
}

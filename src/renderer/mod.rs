//! Terminal preview of a computed layout.
//!
//! Pixels are scaled down to cells (`scale` pixels per column, twice that per
//! row since cells are roughly twice as tall as they are wide), the wrapping
//! element is outlined, and every box is drawn and labelled on top. The grid
//! never grows past the given bounds; anything beyond them is clipped.

mod buffer;
mod output;

pub use buffer::{CellGrid, GridCell};
pub use output::{color_for, write_grid, CONTAINER_COLOR, PALETTE};

use crate::layout::BoxLayoutOutput;
use crate::types::{Px, Rect};

/// Preview bounds used when no terminal is attached.
pub const DEFAULT_PREVIEW_SIZE: (u16, u16) = (120, 40);

/// Columns and rows available for a preview.
///
/// Uses crossterm to query the terminal dimensions.
pub fn detect_preview_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or(DEFAULT_PREVIEW_SIZE)
}

/// Pixels per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub x: u16,
    pub y: u16,
}

impl Scale {
    /// `px` pixels per column, `2 * px` per row.
    pub fn uniform(px: u16) -> Self {
        let px = px.max(1);
        Self { x: px, y: px.saturating_mul(2) }
    }

    fn column(&self, px: Px) -> u16 {
        to_cells(px, self.x)
    }

    fn row(&self, px: Px) -> u16 {
        to_cells(px, self.y)
    }
}

fn to_cells(px: Px, per_cell: u16) -> u16 {
    let cells = px.max(0) / Px::from(per_cell.max(1));
    u16::try_from(cells).unwrap_or(u16::MAX)
}

/// Rasterise a layout into a grid of at most `bounds` (columns, rows).
pub fn render_layout(
    output: &BoxLayoutOutput,
    labels: &[String],
    scale: Scale,
    bounds: (u16, u16),
) -> CellGrid {
    let extent = output
        .rects
        .iter()
        .fold(output.inner, |acc, r| {
            Rect::new(0, 0, acc.width.max(r.right()), acc.height.max(r.bottom()))
        });

    let width = scale.column(extent.width).saturating_add(1).min(bounds.0.max(1));
    let height = scale.row(extent.height).saturating_add(1).min(bounds.1.max(1));
    let mut grid = CellGrid::new(width, height);

    let inner = output.inner;
    grid.draw_outline(
        0,
        0,
        scale.column(inner.width).saturating_add(1),
        scale.row(inner.height).saturating_add(1),
        None,
    );

    for (i, rect) in output.rects.iter().enumerate() {
        if rect.width <= 0 || rect.height <= 0 {
            continue;
        }
        let x = scale.column(rect.x);
        let y = scale.row(rect.y);
        if !grid.in_bounds(x, y) {
            continue;
        }
        let w = scale.column(rect.right()).saturating_sub(x).saturating_add(1);
        let h = scale.row(rect.bottom()).saturating_sub(y).saturating_add(1);

        grid.draw_outline(x, y, w, h, Some(i));
        if let Some(label) = labels.get(i) {
            if h >= 3 && w >= 3 {
                grid.label(x.saturating_add(1), y.saturating_add(1), label, w - 2, Some(i));
            }
        }
    }

    grid
}

//! Terminal output.
//!
//! Writes a [`CellGrid`] through crossterm, queueing every command and
//! flushing once at the end.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use super::buffer::CellGrid;

/// Colours cycled through by box index.
pub const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// Colour for cells no box painted (the container outline).
pub const CONTAINER_COLOR: Color = Color::DarkGrey;

pub fn color_for(paint: Option<usize>) -> Color {
    match paint {
        Some(i) => PALETTE[i % PALETTE.len()],
        None => CONTAINER_COLOR,
    }
}

/// Write the grid row by row. With `color` off, only characters are written.
pub fn write_grid<W: Write>(out: &mut W, grid: &CellGrid, color: bool) -> io::Result<()> {
    for row in grid.rows() {
        let mut current: Option<Color> = None;

        for cell in row {
            if color && cell.ch != ' ' {
                let wanted = color_for(cell.paint);
                if current != Some(wanted) {
                    queue!(out, SetForegroundColor(wanted))?;
                    current = Some(wanted);
                }
            }
            queue!(out, Print(cell.ch))?;
        }

        if color && current.is_some() {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print('\n'))?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output() {
        let mut grid = CellGrid::new(3, 2);
        grid.draw_outline(0, 0, 3, 2, Some(0));

        let mut out = Vec::new();
        write_grid(&mut out, &grid, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "+-+\n+-+\n");
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let mut grid = CellGrid::new(1, 1);
        grid.set(0, 0, 'x', Some(1));

        let mut out = Vec::new();
        write_grid(&mut out, &grid, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains('x'));
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(color_for(Some(0)), color_for(Some(PALETTE.len())));
        assert_eq!(color_for(None), CONTAINER_COLOR);
    }
}

//! Read-only character views of a grid.

#[cfg(feature = "std")]
use std::fmt::Write as _;

use crate::common::Cell;
use crate::grid::Grid;

/// How much of a grid a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Every cell, including undamaged ships.
    Revealed,
    /// Only shots taken: ships are indistinguishable from open water.
    Fogged,
}

impl View {
    /// Display character for `cell` under this view.
    pub fn glyph(self, cell: Cell) -> char {
        match (self, cell) {
            (_, Cell::Empty) => '.',
            (View::Fogged, Cell::Ship) => '.',
            (_, other) => other.to_char(),
        }
    }
}

/// Map every cell of `grid` to its display character.
pub fn render_view<const R: usize, const C: usize>(
    grid: &Grid<R, C>,
    view: View,
) -> [[char; C]; R] {
    let mut out = [['.'; C]; R];
    for (dst, src) in out.iter_mut().zip(grid.iter_rows()) {
        for (d, &cell) in dst.iter_mut().zip(src.iter()) {
            *d = view.glyph(cell);
        }
    }
    out
}

/// Lay out a rendered view with column letters and row numbers.
#[cfg(feature = "std")]
pub fn format_view<const R: usize, const C: usize>(grid: &Grid<R, C>, view: View) -> String {
    let mut out = String::from("   ");
    for c in 0..C {
        let _ = write!(out, " {}", column_label(c));
    }
    out.push('\n');
    for (r, row) in render_view(grid, view).iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for ch in row {
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Letter used for column `col` in coordinates such as `B7`.
pub fn column_label(col: usize) -> char {
    (b'A' + (col % 26) as u8) as char
}

//! Grid model: per-cell state, ship placement and shot resolution.

use crate::common::{Cell, GridError, ShotResult};
use crate::config::{BOARD_COLS, BOARD_ROWS};
use crate::ship::{Orientation, Placement};

/// Standard 10×10 board.
pub type Board = Grid<BOARD_ROWS, BOARD_COLS>;

/// An `R`×`C` grid of cells with a live count of undamaged ship segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid<const R: usize, const C: usize> {
    cells: [[Cell; C]; R],
    ship_cells: usize,
}

impl<const R: usize, const C: usize> Default for Grid<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize, const C: usize> Grid<R, C> {
    /// Create an empty grid (no ships placed).
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; C]; R],
            ship_cells: 0,
        }
    }

    pub const fn rows(&self) -> usize {
        R
    }

    pub const fn cols(&self) -> usize {
        C
    }

    /// Clear every cell back to open water.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; C]; R];
        self.ship_cells = 0;
    }

    /// State of the cell at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.check(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Number of undamaged ship segments left. Zero means the fleet on this
    /// grid is destroyed.
    pub fn remaining_ships(&self) -> usize {
        self.ship_cells
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == state)
            .count()
    }

    /// Whether `placement` lies in bounds over open water only.
    pub fn can_place(&self, placement: &Placement) -> bool {
        placement.fits(R, C)
            && placement
                .cells()
                .all(|(r, c)| self.cells[r][c] == Cell::Empty)
    }

    /// Mark `length` cells from (`row`, `col`) as ship segments.
    ///
    /// Returns `false` without touching the grid if any cell would be out of
    /// bounds or is not open water.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        self.place(&Placement::new(row, col, length, orientation))
    }

    /// [`Grid::place_ship`] taking a [`Placement`].
    pub fn place(&mut self, placement: &Placement) -> bool {
        if !self.can_place(placement) {
            return false;
        }
        for (r, c) in placement.cells() {
            self.cells[r][c] = Cell::Ship;
        }
        self.ship_cells += placement.length;
        true
    }

    /// Fire at (`row`, `col`).
    ///
    /// A ship segment becomes a hit and open water becomes a miss. Any
    /// other cell has already been targeted and is left alone.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> Result<ShotResult, GridError> {
        self.check(row, col)?;
        let result = match self.cells[row][col] {
            Cell::Ship => {
                self.cells[row][col] = Cell::Hit;
                self.ship_cells -= 1;
                ShotResult::Hit
            }
            Cell::Empty => {
                self.cells[row][col] = Cell::Miss;
                ShotResult::Miss
            }
            Cell::Hit | Cell::Miss | Cell::Other(_) => ShotResult::AlreadyTargeted,
        };
        log::trace!("shot at ({}, {}) -> {:?}", row, col, result);
        Ok(result)
    }

    /// Character grid using the save-file alphabet.
    pub fn serialize(&self) -> [[char; C]; R] {
        self.cells.map(|row| row.map(Cell::to_char))
    }

    /// Build a grid from rows of characters.
    ///
    /// Loading is lenient: missing rows and short rows are padded with open
    /// water, surplus rows and columns are ignored, and unknown characters
    /// are kept as [`Cell::Other`]. The ship counter is recounted from the
    /// resulting cells.
    pub fn deserialize<I, L>(rows: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = char>,
    {
        let mut grid = Self::new();
        for (r, line) in rows.into_iter().take(R).enumerate() {
            for (c, ch) in line.into_iter().take(C).enumerate() {
                grid.cells[r][c] = Cell::from_char(ch);
            }
        }
        grid.ship_cells = grid.count(Cell::Ship);
        grid
    }

    /// Iterate over the rows of cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell; C]> {
        self.cells.iter()
    }

    fn check(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row < R && col < C {
            Ok(())
        } else {
            Err(GridError::InvalidCoordinate { row, col })
        }
    }
}

//! Ship classes and placements on a rectangular grid.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Row and column step taken from one segment to the next.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Entry of the fleet manifest: a named ship class, its length and how many
/// ships of that class are deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Length of every ship of this class.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of ships of this class in the fleet.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Cells occupied by all ships of this class.
    pub fn total_cells(&self) -> usize {
        self.length * self.count
    }
}

/// A run of `length` cells starting at (`row`, `col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(row: usize, col: usize, length: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            length,
            orientation,
        }
    }

    /// Coordinates covered by this placement, in order from the origin.
    ///
    /// Coordinates are not bounds-checked; a placement hanging off the edge
    /// yields cells past the last row or column.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.orientation.step();
        let (row, col) = (self.row, self.col);
        (0..self.length).map(move |i| (row + dr * i, col + dc * i))
    }

    /// Whether every cell lies inside a `rows`×`cols` grid.
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        if self.length == 0 {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => {
                self.row < rows && self.col < cols && self.length <= cols - self.col
            }
            Orientation::Vertical => {
                self.col < cols && self.row < rows && self.length <= rows - self.row
            }
        }
    }
}

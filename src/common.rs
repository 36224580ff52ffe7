//! Common types for Battleship: cell states, shot results and errors.

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Open water, never targeted.
    #[default]
    Empty,
    /// Undamaged ship segment.
    Ship,
    /// Ship segment that has been hit.
    Hit,
    /// Open water that has been targeted.
    Miss,
    /// Unrecognised character kept verbatim from a save file.
    Other(char),
}

impl Cell {
    /// Character used for this cell in the save format.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Ship => 'S',
            Cell::Hit => 'H',
            Cell::Miss => 'M',
            Cell::Other(c) => c,
        }
    }

    /// Inverse of [`Cell::to_char`]. Any character is accepted.
    pub fn from_char(c: char) -> Self {
        match c {
            ' ' => Cell::Empty,
            'S' => Cell::Ship,
            'H' => Cell::Hit,
            'M' => Cell::Miss,
            other => Cell::Other(other),
        }
    }

    /// Whether a shot at this cell would be rejected.
    pub fn is_targeted(self) -> bool {
        !matches!(self, Cell::Empty | Cell::Ship)
    }
}

/// Result of resolving a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot struck a ship segment.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Cell was already hit or missed; nothing changed.
    AlreadyTargeted,
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the grid.
    InvalidCoordinate { row: usize, col: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

/// Errors returned while deploying a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// No valid position was drawn for a ship within the retry budget.
    Infeasible { length: usize, attempts: usize },
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::Infeasible { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

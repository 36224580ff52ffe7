//! Random fleet deployment by rejection sampling.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::common::PlacementError;
use crate::config::{DEFAULT_MAX_ATTEMPTS, FLEET};
use crate::grid::Grid;
use crate::ship::{Orientation, Placement, ShipClass};

/// Places a fleet manifest onto a grid at uniformly random positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetPlacer<'a> {
    manifest: &'a [ShipClass],
    max_attempts: usize,
}

impl Default for FleetPlacer<'static> {
    fn default() -> Self {
        Self::new(&FLEET)
    }
}

impl<'a> FleetPlacer<'a> {
    pub fn new(manifest: &'a [ShipClass]) -> Self {
        Self {
            manifest,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Limit the number of random draws per ship.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn manifest(&self) -> &'a [ShipClass] {
        self.manifest
    }

    /// Deploy every ship of the manifest, in manifest order, onto `grid`.
    ///
    /// Each ship draws a row, a column and an orientation until the grid
    /// accepts the placement. On error the ships placed so far remain on
    /// the grid.
    pub fn place<R: Rng, const ROWS: usize, const COLS: usize>(
        &self,
        grid: &mut Grid<ROWS, COLS>,
        rng: &mut R,
    ) -> Result<Vec<Placement>, PlacementError> {
        let mut placed = Vec::new();
        for class in self.manifest {
            for _ in 0..class.count() {
                let placement = self.place_one(grid, rng, class.length())?;
                log::trace!("placed {} at {:?}", class.name(), placement);
                placed.push(placement);
            }
        }
        log::debug!(
            "deployed {} ships covering {} cells",
            placed.len(),
            grid.remaining_ships()
        );
        Ok(placed)
    }

    fn place_one<R: Rng, const ROWS: usize, const COLS: usize>(
        &self,
        grid: &mut Grid<ROWS, COLS>,
        rng: &mut R,
        length: usize,
    ) -> Result<Placement, PlacementError> {
        if ROWS == 0 || COLS == 0 {
            return Err(PlacementError::Infeasible {
                length,
                attempts: 0,
            });
        }
        for _ in 0..self.max_attempts {
            let row = rng.random_range(0..ROWS);
            let col = rng.random_range(0..COLS);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let placement = Placement::new(row, col, length, orientation);
            if grid.place(&placement) {
                return Ok(placement);
            }
        }
        log::debug!(
            "gave up placing ship of length {} after {} attempts",
            length,
            self.max_attempts
        );
        Err(PlacementError::Infeasible {
            length,
            attempts: self.max_attempts,
        })
    }
}

/// Deploy the standard fleet onto `grid`.
pub fn place_fleet<R: Rng, const ROWS: usize, const COLS: usize>(
    grid: &mut Grid<ROWS, COLS>,
    rng: &mut R,
) -> Result<Vec<Placement>, PlacementError> {
    FleetPlacer::default().place(grid, rng)
}

use rand::rngs::SmallRng;
use rand::SeedableRng;

#[cfg(feature = "std")]
use std::path::Path;

use crate::{
    common::{Cell, GridError, PlacementError, ShotResult},
    fleet::FleetPlacer,
    grid::Board,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One player's game against the computer: the player's board, the
/// computer's board and the random source used to deploy both fleets.
#[derive(Debug, Clone)]
pub struct GameSession {
    player: Board,
    opponent: Board,
    placer: FleetPlacer<'static>,
    rng: SmallRng,
}

impl GameSession {
    /// Create a session with empty boards. Call [`GameSession::new_game`]
    /// to deploy the fleets.
    pub fn new(rng: SmallRng) -> Self {
        Self {
            player: Board::new(),
            opponent: Board::new(),
            placer: FleetPlacer::default(),
            rng,
        }
    }

    /// Session whose fleet layouts are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Session seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }

    /// Use a custom placement engine for subsequent games.
    pub fn with_placer(mut self, placer: FleetPlacer<'static>) -> Self {
        self.placer = placer;
        self
    }

    /// Clear both boards and deploy a fresh random fleet on each.
    ///
    /// On error both boards are left empty.
    pub fn new_game(&mut self) -> Result<(), PlacementError> {
        self.player.reset();
        self.opponent.reset();
        let deployed = self
            .placer
            .place(&mut self.player, &mut self.rng)
            .and_then(|_| self.placer.place(&mut self.opponent, &mut self.rng));
        if let Err(e) = deployed {
            self.player.reset();
            self.opponent.reset();
            return Err(e);
        }
        log::info!("new game started");
        Ok(())
    }

    /// Fire at (`row`, `col`) on the computer's board.
    pub fn target(&mut self, row: usize, col: usize) -> Result<ShotResult, GridError> {
        let result = self.opponent.resolve_shot(row, col)?;
        log::debug!(
            "target ({}, {}) -> {:?}, {} ship cells left",
            row,
            col,
            result,
            self.opponent.remaining_ships()
        );
        Ok(result)
    }

    /// Evaluate the current game status.
    ///
    /// A side is defeated once it has taken at least one hit and has no
    /// undamaged ship segments left.
    pub fn status(&self) -> GameStatus {
        if defeated(&self.player) {
            GameStatus::Lost
        } else if defeated(&self.opponent) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// The player's own board.
    pub fn player(&self) -> &Board {
        &self.player
    }

    /// The computer's board, the one the player shoots at.
    pub fn opponent(&self) -> &Board {
        &self.opponent
    }

    /// Replace both boards, e.g. after loading a saved game.
    pub fn restore(&mut self, player: Board, opponent: Board) {
        self.player = player;
        self.opponent = opponent;
    }

    /// Write both boards to `path` in the plain-text save format.
    #[cfg(feature = "std")]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        crate::persist::save_file(path.as_ref(), &self.player, &self.opponent)
    }

    /// Replace both boards with the ones stored at `path`.
    ///
    /// The file is parsed completely before anything is committed; on error
    /// the session is unchanged.
    #[cfg(feature = "std")]
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> anyhow::Result<()> {
        let (player, opponent) = crate::persist::load_file(path.as_ref())?;
        self.restore(player, opponent);
        Ok(())
    }
}

fn defeated(board: &Board) -> bool {
    board.remaining_ships() == 0 && board.count(Cell::Hit) > 0
}

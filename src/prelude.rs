//! Commonly used types and utilities for ease of import.

pub use crate::{
    place_fleet, render_view, Board, Cell, FleetPlacer, GameSession, GameStatus, Grid, GridError,
    Orientation, PlacementError, ShotResult, View,
};

#[cfg(feature = "std")]
pub use crate::{format_view, init_logging};

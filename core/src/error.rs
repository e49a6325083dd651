use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid grid size {0}, must be at least 1")]
    InvalidSize(Coord),
    #[error("A game needs at least one life")]
    NoLives,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cannot reveal {requested} cells on a grid of {capacity}")]
    CapacityExceeded {
        requested: CellCount,
        capacity: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failures reported by a [`HighScoreStore`](crate::HighScoreStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Could not read high score: {0}")]
    Read(String),
    #[error("Could not write high score: {0}")]
    Write(String),
}

#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use evaluator::*;
pub use geometry::*;
pub use host::*;
pub use progression::*;
pub use reveal::*;
pub use selector::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod evaluator;
mod geometry;
mod host;
mod progression;
mod reveal;
mod selector;
mod session;
mod types;

/// How long the reveal set stays face up before guessing starts.
pub const DEFAULT_MEMORIZE_MS: u32 = 3000;

/// Starting values of every game in a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub initial_grid_size: Coord,
    pub initial_lives: Points,
    pub initial_level: Points,
    pub initial_reveal_count: CellCount,
    /// Where the host keeps the high score, a file name for file-backed stores.
    pub high_score_key: String,
    pub memorize_ms: u32,
    pub layout: ScreenLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_grid_size: 3,
            initial_lives: 5,
            initial_level: 1,
            initial_reveal_count: 3,
            high_score_key: String::from("high_score.txt"),
            memorize_ms: DEFAULT_MEMORIZE_MS,
            layout: ScreenLayout::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.initial_grid_size < 1 {
            return Err(GameError::InvalidSize(self.initial_grid_size));
        }
        if self.initial_lives == 0 {
            return Err(GameError::NoLives);
        }
        let params = self.initial_params();
        if params.reveal_count > params.capacity() {
            return Err(GameError::CapacityExceeded {
                requested: params.reveal_count,
                capacity: params.capacity(),
            });
        }
        Ok(())
    }

    pub const fn initial_params(&self) -> RoundParams {
        RoundParams::new(self.initial_grid_size, self.initial_reveal_count)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessKind {
    Correct,
    AlreadyGuessed,
    Incorrect,
    FatalIncorrect,
}

impl GuessKind {
    pub const fn is_miss(self) -> bool {
        !matches!(self, Self::Correct)
    }
}

/// Result of one guess along with what it does to lives and score.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub kind: GuessKind,
    pub lives_delta: i32,
    pub score_delta: i32,
}

impl GuessOutcome {
    pub const fn correct() -> Self {
        Self {
            kind: GuessKind::Correct,
            lives_delta: 0,
            score_delta: 1,
        }
    }

    pub const fn already_guessed() -> Self {
        Self {
            kind: GuessKind::AlreadyGuessed,
            lives_delta: 0,
            score_delta: 0,
        }
    }

    pub const fn incorrect(kind: GuessKind) -> Self {
        Self {
            kind,
            lives_delta: -1,
            score_delta: 0,
        }
    }

    pub const fn has_update(self) -> bool {
        !matches!(self.kind, GuessKind::AlreadyGuessed)
    }
}

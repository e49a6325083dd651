use serde::{Deserialize, Serialize};

/// Color tag a cell is shown with when face up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellOutcome {
    #[default]
    None,
    Correct,
    Incorrect,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub face_up: bool,
    pub outcome: CellOutcome,
    pub guessed: bool,
}

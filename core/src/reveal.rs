use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cells the player has to recall in the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSet {
    coords: BTreeSet<Coord2>,
}

impl RevealSet {
    /// Builds a set from explicit coordinates, validating them against `board`.
    pub fn from_coords(board: &Board, coords: impl IntoIterator<Item = Coord2>) -> Result<Self> {
        let mut set = BTreeSet::new();
        for coords in coords {
            if !board.contains(coords) {
                return Err(GameError::InvalidCoords);
            }
            set.insert(coords);
        }
        Ok(Self { coords: set })
    }

    pub(crate) fn insert(&mut self, coords: Coord2) -> bool {
        self.coords.insert(coords)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.coords.contains(&coords)
    }

    pub fn len(&self) -> CellCount {
        self.coords.len() as CellCount
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> {
        self.coords.iter().copied()
    }
}

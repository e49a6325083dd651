use serde::{Deserialize, Serialize};

use crate::*;

/// Grid size and reveal count of one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundParams {
    pub grid_size: Coord,
    pub reveal_count: CellCount,
}

impl RoundParams {
    pub const fn new(grid_size: Coord, reveal_count: CellCount) -> Self {
        Self {
            grid_size,
            reveal_count,
        }
    }

    pub const fn capacity(&self) -> CellCount {
        mult(self.grid_size, self.grid_size)
    }

    /// Difficulty of the following round.
    ///
    /// One more cell to remember every round; the grid grows by one once that would cover more than half of it.
    pub fn next(self) -> Self {
        let reveal_count = self.reveal_count.saturating_add(1);
        let grid_size = if reveal_count > self.capacity() / 2 {
            self.grid_size.saturating_add(1)
        } else {
            self.grid_size
        };
        Self {
            grid_size,
            reveal_count: reveal_count.min(mult(grid_size, grid_size)),
        }
    }
}

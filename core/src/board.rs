use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells for a single round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(size: Coord) -> Result<Self> {
        if size < 1 {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Self {
            cells: Array2::default((size, size).to_nd_index()),
        })
    }

    pub fn size(&self) -> Coord {
        // always square and bounded by `Coord` at construction
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row < self.size() && col < self.size()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Turns the given cells face up showing `outcome`.
    pub fn reveal(&mut self, coords: impl IntoIterator<Item = Coord2>, outcome: CellOutcome) {
        for coords in coords {
            let cell = &mut self.cells[coords.to_nd_index()];
            cell.face_up = true;
            cell.outcome = outcome;
        }
    }

    /// Turns the given cells back face down, dropping their color.
    pub fn hide(&mut self, coords: impl IntoIterator<Item = Coord2>) {
        for coords in coords {
            let cell = &mut self.cells[coords.to_nd_index()];
            cell.face_up = false;
            cell.outcome = CellOutcome::None;
        }
    }

    pub(crate) fn mark_guessed(&mut self, coords: Coord2, outcome: CellOutcome) {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.face_up = true;
        cell.outcome = outcome;
        cell.guessed = true;
    }

    /// Cells in row-major order, for renderers.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        GridIter::new(self.size()).map(|coords| (coords, &self.cells[coords.to_nd_index()]))
    }

    #[cfg(test)]
    pub(crate) fn face_up_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.face_up).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

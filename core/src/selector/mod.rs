use crate::*;
#[cfg(test)]
pub use preset::*;
pub use random::*;

#[cfg(test)]
mod preset;
mod random;

/// Picks the cells a round asks the player to remember.
///
/// Implementations flash the picked cells on `board` (face up, [`CellOutcome::Correct`]) and return them.
pub trait RevealSelector {
    fn select(&mut self, board: &mut Board, count: CellCount) -> Result<RevealSet>;
}

fn check_capacity(board: &Board, count: CellCount) -> Result<()> {
    let capacity = board.total_cells();
    if count > capacity {
        log::error!("Requested {} revealed cells but the board only has {}", count, capacity);
        return Err(GameError::CapacityExceeded {
            requested: count,
            capacity,
        });
    }
    Ok(())
}

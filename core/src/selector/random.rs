use alloc::vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform selection without replacement: each draw picks one of the cells still free.
#[derive(Clone, Debug)]
pub struct RandomRevealSelector {
    rng: SmallRng,
}

impl RandomRevealSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RevealSelector for RandomRevealSelector {
    fn select(&mut self, board: &mut Board, count: CellCount) -> Result<RevealSet> {
        check_capacity(board, count)?;

        let size = usize::from(board.size());
        let mut taken = vec![false; size * size];
        let mut free_cells = taken.len();
        let mut reveal_set = RevealSet::default();

        while reveal_set.len() < count {
            let place = self.rng.random_range(0..free_cells);
            let Some(index) = taken
                .iter()
                .enumerate()
                .filter(|&(_, &is_taken)| !is_taken)
                .map(|(index, _)| index)
                .nth(place)
            else {
                break;
            };
            taken[index] = true;
            free_cells -= 1;
            reveal_set.insert(((index / size) as Coord, (index % size) as Coord));
        }

        if reveal_set.len() != count {
            log::warn!(
                "Selected cell count mismatch, actual: {}, requested: {}",
                reveal_set.len(),
                count
            );
        }

        board.reveal(reveal_set.iter(), CellOutcome::Correct);
        log::debug!("Revealed {} of {} cells", count, board.total_cells());
        Ok(reveal_set)
    }
}

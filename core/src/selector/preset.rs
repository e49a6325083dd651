use alloc::collections::VecDeque;
use alloc::vec::Vec;

use super::*;

/// Replays predetermined layouts, one per round.
///
/// Once the queue runs dry the selector keeps falling back to the first cells in row-major order.
#[derive(Clone, Debug, Default)]
pub struct PresetRevealSelector {
    layouts: VecDeque<Vec<Coord2>>,
}

impl PresetRevealSelector {
    pub fn new(layouts: impl IntoIterator<Item = Vec<Coord2>>) -> Self {
        Self {
            layouts: layouts.into_iter().collect(),
        }
    }
}

impl RevealSelector for PresetRevealSelector {
    fn select(&mut self, board: &mut Board, count: CellCount) -> Result<RevealSet> {
        check_capacity(board, count)?;

        let reveal_set = match self.layouts.pop_front() {
            Some(layout) => {
                let set = RevealSet::from_coords(board, layout)?;
                if set.len() != count {
                    log::warn!(
                        "Preset layout has {} cells but the round asks for {}",
                        set.len(),
                        count
                    );
                }
                set
            }
            None => RevealSet::from_coords(
                board,
                GridIter::new(board.size()).take(usize::from(count)),
            )?,
        };

        board.reveal(reveal_set.iter(), CellOutcome::Correct);
        Ok(reveal_set)
    }
}

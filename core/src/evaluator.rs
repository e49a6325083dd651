use crate::*;

/// Classifies one click against the round's reveal set, marking the cell when the guess counts.
///
/// The order of the checks matters: a repeated click on a cell already marked incorrect is a no-op
/// instead of costing another life.
pub fn evaluate(
    board: &mut Board,
    reveal_set: &RevealSet,
    lives_remaining: Points,
    coords: Coord2,
) -> GuessOutcome {
    let cell = board.cell_at(coords);
    let in_set = reveal_set.contains(coords);

    let outcome = match (in_set, cell.guessed) {
        (true, false) => {
            board.mark_guessed(coords, CellOutcome::Correct);
            GuessOutcome::correct()
        }
        (true, true) | (false, true) => GuessOutcome::already_guessed(),
        (false, false) => {
            board.mark_guessed(coords, CellOutcome::Incorrect);
            if lives_remaining == 1 {
                GuessOutcome::incorrect(GuessKind::FatalIncorrect)
            } else {
                GuessOutcome::incorrect(GuessKind::Incorrect)
            }
        }
    };
    log::trace!("Guess at {:?}: {:?}", coords, outcome.kind);
    outcome
}

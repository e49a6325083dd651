use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Reveal set is face up, input is ignored until the countdown runs out.
    Memorizing { remaining_ms: u32 },
    Guessing,
    /// Round is over with lives left, waiting for the next round to be dealt.
    Resolved,
    GameOver,
}

impl RoundPhase {
    pub const fn accepts_guesses(self) -> bool {
        matches!(self, Self::Guessing)
    }

    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// Counters of the game in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub lives_remaining: Points,
    pub score: Points,
    pub level: Points,
    pub guesses_made: Points,
    pub misses: Points,
    pub correct_guesses_this_round: Points,
}

impl RoundState {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            lives_remaining: config.initial_lives,
            score: 0,
            level: config.initial_level,
            guesses_made: 0,
            misses: 0,
            correct_guesses_this_round: 0,
        }
    }

    fn start_round(&mut self) {
        self.guesses_made = 0;
        self.misses = 0;
        self.correct_guesses_this_round = 0;
    }

    /// Every miss buys one more guess, so the round only ends once all reveal-set cells are found or lives run out.
    pub fn guessing_continues(&self, reveal_count: CellCount) -> bool {
        self.lives_remaining > 0
            && self.guesses_made < self.misses.saturating_add(Points::from(reveal_count))
    }

    fn apply(&mut self, outcome: GuessOutcome) {
        self.guesses_made += 1;
        if outcome.kind.is_miss() {
            self.misses += 1;
        } else {
            self.correct_guesses_this_round += 1;
        }
        self.lives_remaining = self.lives_remaining.saturating_add_signed(outcome.lives_delta);
        self.score = self.score.saturating_add_signed(outcome.score_delta);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResolution {
    pub leveled_up: bool,
    pub game_over: bool,
    pub previous: RoundParams,
    pub next: RoundParams,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NoChange,
    /// Memorization ended, the reveal set is hidden again.
    GuessingStarted,
    /// Memorization ended on a round that had nothing left to guess.
    Resolved(RoundResolution),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub resolution: Option<RoundResolution>,
}

/// Memorize, guess, resolve cycle of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundEngine {
    config: SessionConfig,
    params: RoundParams,
    state: RoundState,
    board: Board,
    reveal_set: RevealSet,
    phase: RoundPhase,
}

impl RoundEngine {
    /// Starts a game at the configured initial values, dealing its first round.
    pub fn new(config: SessionConfig, selector: &mut impl RevealSelector) -> Result<Self> {
        config.validate()?;
        let params = config.initial_params();
        let mut engine = Self {
            board: Board::new(params.grid_size)?,
            reveal_set: RevealSet::default(),
            phase: RoundPhase::Memorizing {
                remaining_ms: config.memorize_ms,
            },
            state: RoundState::new(&config),
            params,
            config,
        };
        engine.begin_round(selector)?;
        Ok(engine)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn params(&self) -> RoundParams {
        self.params
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn reveal_set(&self) -> &RevealSet {
        &self.reveal_set
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    /// Advances the memorization countdown by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        let RoundPhase::Memorizing { remaining_ms } = self.phase else {
            return TickOutcome::NoChange;
        };

        if remaining_ms > elapsed_ms {
            self.phase = RoundPhase::Memorizing {
                remaining_ms: remaining_ms - elapsed_ms,
            };
            return TickOutcome::NoChange;
        }

        self.board.hide(self.reveal_set.iter());
        self.phase = RoundPhase::Guessing;
        log::debug!("Memorization over, guessing started");

        if self.state.guessing_continues(self.params.reveal_count) {
            TickOutcome::GuessingStarted
        } else {
            TickOutcome::Resolved(self.resolve())
        }
    }

    /// Evaluates a guess, `None` when the engine is not taking guesses or `coords` is off the board.
    pub fn guess(&mut self, coords: Coord2) -> Option<GuessReport> {
        if !self.phase.accepts_guesses() || !self.board.contains(coords) {
            log::trace!("Ignoring guess at {:?} during {:?}", coords, self.phase);
            return None;
        }

        let outcome = evaluate(
            &mut self.board,
            &self.reveal_set,
            self.state.lives_remaining,
            coords,
        );
        self.state.apply(outcome);

        let resolution = if self.state.guessing_continues(self.params.reveal_count) {
            None
        } else {
            Some(self.resolve())
        };

        Some(GuessReport {
            outcome,
            resolution,
        })
    }

    /// Deals the next round after a resolved one, returns `false` in any other phase.
    pub fn start_next_round(&mut self, selector: &mut impl RevealSelector) -> Result<bool> {
        if !matches!(self.phase, RoundPhase::Resolved) {
            return Ok(false);
        }
        self.begin_round(selector)?;
        Ok(true)
    }

    /// Starts a fresh game from the configured initial values.
    pub fn reset(&mut self, selector: &mut impl RevealSelector) -> Result<()> {
        self.state = RoundState::new(&self.config);
        self.params = self.config.initial_params();
        log::debug!("New game with {:?}", self.params);
        self.begin_round(selector)
    }

    fn begin_round(&mut self, selector: &mut impl RevealSelector) -> Result<()> {
        let mut board = Board::new(self.params.grid_size)?;
        let reveal_set = selector.select(&mut board, self.params.reveal_count)?;

        self.board = board;
        self.reveal_set = reveal_set;
        self.state.start_round();
        self.phase = RoundPhase::Memorizing {
            remaining_ms: self.config.memorize_ms,
        };
        log::debug!(
            "Round started: level {}, grid {}, revealing {}",
            self.state.level,
            self.params.grid_size,
            self.params.reveal_count
        );
        Ok(())
    }

    fn resolve(&mut self) -> RoundResolution {
        let leveled_up =
            self.state.correct_guesses_this_round == Points::from(self.params.reveal_count);
        if leveled_up {
            self.state.level += 1;
            self.state.correct_guesses_this_round = 0;
        }

        let previous = self.params;
        self.params = previous.next();

        let game_over = self.state.lives_remaining == 0;
        self.phase = if game_over {
            RoundPhase::GameOver
        } else {
            RoundPhase::Resolved
        };
        log::debug!(
            "Round resolved: leveled up {}, game over {}, next {:?}",
            leveled_up,
            game_over,
            self.params
        );

        RoundResolution {
            leveled_up,
            game_over,
            previous,
            next: self.params,
        }
    }
}

use crate::*;

/// Whether the host loop should keep running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives games one after another, talking to the host through its collaborators.
///
/// Holds the only [`RoundEngine`] of the session; the board and counters are never handed out mutably.
#[derive(Debug)]
pub struct SessionController<R, A, S, Sel> {
    engine: RoundEngine,
    selector: Sel,
    renderer: R,
    audio: A,
    store: S,
    high_score: Points,
}

impl<R, A, S, Sel> SessionController<R, A, S, Sel>
where
    R: Renderer,
    A: AudioSink,
    S: HighScoreStore,
    Sel: RevealSelector,
{
    pub fn new(
        config: SessionConfig,
        renderer: R,
        audio: A,
        mut store: S,
        mut selector: Sel,
    ) -> Result<Self> {
        let high_score = store.load().unwrap_or_else(|err| {
            log::warn!("{}, starting from 0", err);
            0
        });
        log::debug!("high score: {}", high_score);

        let engine = RoundEngine::new(config, &mut selector)?;
        let mut session = Self {
            engine,
            selector,
            renderer,
            audio,
            store,
            high_score,
        };
        session.redraw();
        Ok(session)
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    pub fn high_score(&self) -> Points {
        self.high_score
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Geometry of the round currently on screen.
    pub fn geometry(&self) -> GridGeometry {
        self.engine
            .config()
            .layout
            .geometry(self.engine.board().size())
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.engine.is_game_over()
    }

    /// Throws away the current game and deals a fresh one.
    pub fn start_game(&mut self) -> Result<()> {
        self.engine.reset(&mut self.selector)?;
        self.redraw();
        Ok(())
    }

    pub fn on_tick(&mut self, elapsed_ms: u32) -> Result<()> {
        match self.engine.tick(elapsed_ms) {
            TickOutcome::NoChange => Ok(()),
            TickOutcome::GuessingStarted => {
                self.redraw();
                Ok(())
            }
            TickOutcome::Resolved(resolution) => self.finish_round(resolution),
        }
    }

    /// Routes a click to the engine, `None` when it was ignored.
    pub fn on_click(&mut self, x: Pixel, y: Pixel) -> Result<Option<GuessOutcome>> {
        if !self.engine.phase().accepts_guesses() {
            log::trace!("Click at ({}, {}) ignored during {:?}", x, y, self.engine.phase());
            return Ok(None);
        }
        let Some(coords) = self.geometry().cell_at(x, y) else {
            log::trace!("Click at ({}, {}) outside the grid", x, y);
            return Ok(None);
        };
        let Some(report) = self.engine.guess(coords) else {
            return Ok(None);
        };

        match report.outcome.kind {
            GuessKind::Correct => self.audio.play_correct(),
            GuessKind::Incorrect | GuessKind::FatalIncorrect => self.audio.play_incorrect(),
            GuessKind::AlreadyGuessed => {}
        }
        if report.outcome.has_update() {
            self.redraw();
        }

        if let Some(resolution) = report.resolution {
            self.finish_round(resolution)?;
        }
        Ok(Some(report.outcome))
    }

    /// Starts a new game after the end-of-game summary, `false` while a game is still running.
    pub fn on_confirm_dismiss(&mut self) -> Result<bool> {
        if !self.engine.is_game_over() {
            return Ok(false);
        }
        self.start_game()?;
        Ok(true)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<Flow> {
        match event {
            InputEvent::Quit => {
                log::info!("Quit requested");
                return Ok(Flow::Quit);
            }
            InputEvent::Click { .. } if self.is_awaiting_confirmation() => {
                self.on_confirm_dismiss()?;
            }
            InputEvent::Click { x, y } => {
                self.on_click(x, y)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// One game tick: drains pending input, then advances the memorization timer.
    pub fn pump(&mut self, input: &mut impl InputSource, elapsed_ms: u32) -> Result<Flow> {
        while let Some(event) = input.poll() {
            if self.handle_event(event)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        self.on_tick(elapsed_ms)?;
        Ok(Flow::Continue)
    }

    fn finish_round(&mut self, resolution: RoundResolution) -> Result<()> {
        if resolution.leveled_up {
            self.audio.play_level_up();
        }

        if resolution.game_over {
            self.finish_game();
        } else {
            self.engine.start_next_round(&mut self.selector)?;
            self.redraw();
        }
        Ok(())
    }

    fn finish_game(&mut self) {
        let state = *self.engine.state();
        self.draw_hud();

        if state.score > self.high_score {
            self.high_score = state.score;
            log::info!("New high score: {}", state.score);
            if let Err(err) = self.store.save(state.score) {
                log::warn!("{}, continuing without it", err);
            }
        }

        self.renderer
            .draw_end_of_round_summary(state.level, state.score, self.high_score);
    }

    fn redraw(&mut self) {
        self.renderer.draw_board(self.engine.board());
        self.draw_hud();
    }

    fn draw_hud(&mut self) {
        let state = self.engine.state();
        self.renderer.draw_hud(
            state.level,
            state.score,
            self.high_score,
            state.lives_remaining,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        boards: usize,
        huds: Vec<(Points, Points, Points, Points)>,
        summaries: Vec<(Points, Points, Points)>,
    }

    impl Renderer for RecordingRenderer {
        fn draw_board(&mut self, _board: &Board) {
            self.boards += 1;
        }

        fn draw_hud(&mut self, level: Points, score: Points, high_score: Points, lives: Points) {
            self.huds.push((level, score, high_score, lives));
        }

        fn draw_end_of_round_summary(&mut self, level: Points, score: Points, high_score: Points) {
            self.summaries.push((level, score, high_score));
        }
    }

    #[derive(Debug, Default)]
    struct RecordingAudio {
        sounds: Vec<&'static str>,
    }

    impl AudioSink for RecordingAudio {
        fn play_correct(&mut self) {
            self.sounds.push("correct");
        }

        fn play_incorrect(&mut self) {
            self.sounds.push("incorrect");
        }

        fn play_level_up(&mut self) {
            self.sounds.push("level_up");
        }
    }

    #[derive(Debug, Default)]
    struct MemoryStore {
        value: Option<Points>,
        saves: Vec<Points>,
        fail_writes: bool,
    }

    impl HighScoreStore for MemoryStore {
        fn load(&mut self) -> core::result::Result<Points, PersistenceError> {
            self.value
                .ok_or_else(|| PersistenceError::Read("corrupt".to_string()))
        }

        fn save(&mut self, high_score: Points) -> core::result::Result<(), PersistenceError> {
            if self.fail_writes {
                return Err(PersistenceError::Write("read-only".to_string()));
            }
            self.value = Some(high_score);
            self.saves.push(high_score);
            Ok(())
        }
    }

    type TestSession =
        SessionController<RecordingRenderer, RecordingAudio, MemoryStore, PresetRevealSelector>;

    /// Cells are revealed in row-major order, so the correct ones are always the first few.
    fn session(config: SessionConfig, store: MemoryStore) -> TestSession {
        SessionController::new(
            config,
            RecordingRenderer::default(),
            RecordingAudio::default(),
            store,
            PresetRevealSelector::default(),
        )
        .unwrap()
    }

    fn click(session: &mut TestSession, coords: Coord2) -> Option<GuessOutcome> {
        let (x, y) = session.geometry().cell_center(coords);
        session.on_click(x, y).unwrap()
    }

    fn find_all(session: &mut TestSession) {
        session.on_tick(DEFAULT_MEMORIZE_MS).unwrap();
        let cells: Vec<_> = session.engine().reveal_set().iter().collect();
        for coords in cells {
            assert_eq!(click(session, coords).unwrap().kind, GuessKind::Correct);
        }
    }

    fn last_lives() -> SessionConfig {
        SessionConfig {
            initial_lives: 1,
            ..Default::default()
        }
    }

    #[test]
    fn high_score_saved_only_when_beaten() {
        let mut session = session(last_lives(), MemoryStore {
            value: Some(0),
            ..Default::default()
        });

        find_all(&mut session);
        find_all(&mut session);
        assert_eq!(session.engine().params(), RoundParams::new(4, 5));
        session.on_tick(DEFAULT_MEMORIZE_MS).unwrap();
        assert_eq!(
            click(&mut session, (3, 3)).unwrap().kind,
            GuessKind::FatalIncorrect
        );

        assert!(session.is_awaiting_confirmation());
        assert_eq!(session.store().saves, [7]);
        assert_eq!(session.high_score(), 7);
        assert_eq!(session.renderer().summaries.last(), Some(&(3, 7, 7)));

        assert!(session.on_confirm_dismiss().unwrap());
        find_all(&mut session);
        session.on_tick(DEFAULT_MEMORIZE_MS).unwrap();
        click(&mut session, (0, 0));
        click(&mut session, (0, 1));
        click(&mut session, (2, 2));

        assert!(session.is_awaiting_confirmation());
        assert_eq!(session.engine().state().score, 5);
        assert_eq!(session.store().saves, [7]);
        assert_eq!(session.high_score(), 7);
    }

    #[test]
    fn plays_sounds_for_outcomes() {
        let mut session = session(SessionConfig::default(), MemoryStore::default());
        session.on_tick(DEFAULT_MEMORIZE_MS).unwrap();

        click(&mut session, (0, 0));
        click(&mut session, (2, 2));
        click(&mut session, (2, 2));
        click(&mut session, (0, 1));
        click(&mut session, (0, 2));

        assert_eq!(
            session.audio().sounds,
            ["correct", "incorrect", "correct", "correct", "level_up"]
        );
        assert_eq!(session.engine().state().level, 2);
        assert!(matches!(
            session.engine().phase(),
            RoundPhase::Memorizing { .. }
        ));
    }

    #[test]
    fn clicks_ignored_while_memorizing_or_off_grid() {
        let mut session = session(SessionConfig::default(), MemoryStore::default());

        assert_eq!(click(&mut session, (0, 0)), None);
        session.on_tick(DEFAULT_MEMORIZE_MS).unwrap();
        assert_eq!(session.on_click(0, 0).unwrap(), None);
        assert_eq!(session.engine().state().guesses_made, 0);
        assert!(session.audio().sounds.is_empty());
    }

    #[test]
    fn unreadable_high_score_starts_at_zero() {
        let session = session(SessionConfig::default(), MemoryStore::default());

        assert_eq!(session.high_score(), 0);
        assert_eq!(session.renderer().boards, 1);
        assert_eq!(session.renderer().huds, [(1, 0, 0, 5)]);
    }

    #[test]
    fn failed_save_keeps_playing() {
        let mut session = session(last_lives(), MemoryStore {
            value: Some(0),
            fail_writes: true,
            ..Default::default()
        });
        find_all(&mut session);
        session.on_tick(DEFAULT_MEMORIZE_MS).unwrap();
        click(&mut session, (2, 2));

        assert!(session.store().saves.is_empty());
        assert_eq!(session.high_score(), 3);
        assert!(session.on_confirm_dismiss().unwrap());
        assert_eq!(session.engine().state().score, 0);
    }

    #[test]
    fn confirm_only_after_game_over() {
        let mut session = session(SessionConfig::default(), MemoryStore::default());

        assert!(!session.on_confirm_dismiss().unwrap());
    }

    #[test]
    fn pump_stops_on_quit_without_saving() {
        let mut session = session(last_lives(), MemoryStore {
            value: Some(0),
            ..Default::default()
        });
        find_all(&mut session);
        let (x, y) = session.geometry().cell_center((0, 0));
        let mut input = [InputEvent::Click { x, y }, InputEvent::Quit].into_iter().fuse();

        assert_eq!(session.pump(&mut input, 100).unwrap(), Flow::Quit);
        assert_eq!(session.engine().state().guesses_made, 0);
        assert!(session.store().saves.is_empty());
    }

    #[test]
    fn pump_drives_a_whole_game() {
        let mut session = session(last_lives(), MemoryStore {
            value: Some(0),
            ..Default::default()
        });
        let mut nothing = core::iter::empty::<InputEvent>().fuse();
        for _ in 0..30 {
            session.pump(&mut nothing, 100).unwrap();
        }
        assert_eq!(session.engine().phase(), RoundPhase::Guessing);

        let (x, y) = session.geometry().cell_center((2, 2));
        let mut miss = [InputEvent::Click { x, y }].into_iter().fuse();
        assert_eq!(session.pump(&mut miss, 16).unwrap(), Flow::Continue);
        assert!(session.is_awaiting_confirmation());

        let mut confirm = [InputEvent::Click { x: 0, y: 0 }].into_iter().fuse();
        assert_eq!(session.pump(&mut confirm, 16).unwrap(), Flow::Continue);
        assert!(!session.is_awaiting_confirmation());
        assert_eq!(session.engine().state().lives_remaining, 1);
    }
}

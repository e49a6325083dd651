//! Seams to the host: drawing, sound, high-score storage and input polling.

use serde::{Deserialize, Serialize};

use crate::*;

pub trait Renderer {
    fn draw_board(&mut self, board: &Board);
    fn draw_hud(&mut self, level: Points, score: Points, high_score: Points, lives: Points);
    fn draw_end_of_round_summary(&mut self, level: Points, score: Points, high_score: Points);
}

/// Fire-and-forget sound effects.
pub trait AudioSink {
    fn play_correct(&mut self);
    fn play_incorrect(&mut self);
    fn play_level_up(&mut self);
}

pub trait HighScoreStore {
    fn load(&mut self) -> core::result::Result<Points, PersistenceError>;
    fn save(&mut self, high_score: Points) -> core::result::Result<(), PersistenceError>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Quit,
    Click { x: Pixel, y: Pixel },
}

/// Queue of pending input, drained once per tick.
pub trait InputSource {
    fn poll(&mut self) -> Option<InputEvent>;
}

impl<I: Iterator<Item = InputEvent>> InputSource for core::iter::Fuse<I> {
    fn poll(&mut self) -> Option<InputEvent> {
        self.next()
    }
}

/// `None` stays silent, for hosts running without sound.
impl<A: AudioSink> AudioSink for Option<A> {
    fn play_correct(&mut self) {
        if let Some(audio) = self {
            audio.play_correct();
        }
    }

    fn play_incorrect(&mut self) {
        if let Some(audio) = self {
            audio.play_incorrect();
        }
    }

    fn play_level_up(&mut self) {
        if let Some(audio) = self {
            audio.play_level_up();
        }
    }
}

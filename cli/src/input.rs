use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use mnemogrid_core::{InputEvent, InputSource, Pixel};
use std::time::Duration;

/// Maps a terminal event onto the game's input, `None` for events the game ignores.
///
/// Mouse positions are passed through as character cells, the same units the board is laid out in.
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(InputEvent::Click {
            x: Pixel::from(column),
            y: Pixel::from(row),
        }),
        Event::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        Event::Key(KeyEvent {
            code: KeyCode::Esc | KeyCode::Char('q'),
            ..
        }) => Some(InputEvent::Quit),
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => Some(InputEvent::Quit),
        // off-grid click: ignored mid-game, dismisses the summary after a game over
        Event::Key(KeyEvent {
            code: KeyCode::Enter | KeyCode::Char(' '),
            ..
        }) => Some(InputEvent::Click { x: -1, y: -1 }),
        _ => None,
    }
}

/// Terminal events, read only when already pending so the frame loop never blocks.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    fn next_event() -> std::io::Result<Option<Event>> {
        if event::poll(Duration::ZERO)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Option<InputEvent> {
        loop {
            match Self::next_event() {
                Ok(Some(event)) => {
                    if let Some(input) = translate(event) {
                        return Some(input);
                    }
                }
                Ok(None) => return None,
                Err(err) => {
                    log::error!("Could not read terminal input: {}", err);
                    return Some(InputEvent::Quit);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::terminal_layout;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn left_click_is_a_click() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left), 44, 11)),
            Some(InputEvent::Click { x: 44, y: 11 })
        );
        assert_eq!(translate(mouse(MouseEventKind::Down(MouseButton::Right), 44, 11)), None);
        assert_eq!(translate(mouse(MouseEventKind::Moved, 44, 11)), None);
    }

    #[test]
    fn clicks_on_a_drawn_tile_map_back_to_it() {
        let geometry = terminal_layout(80, 24).geometry(3);

        for coords in [(0, 0), (1, 2), (2, 1)] {
            let (x, y) = geometry.cell_origin(coords);
            for dy in 0..geometry.cell_size {
                for dx in 0..geometry.cell_size {
                    let column = u16::try_from(x + dx).unwrap();
                    let row = u16::try_from(y + dy).unwrap();
                    let Some(InputEvent::Click { x, y }) =
                        translate(mouse(MouseEventKind::Down(MouseButton::Left), column, row))
                    else {
                        panic!("expected a click");
                    };
                    assert_eq!(geometry.cell_at(x, y), Some(coords));
                }
            }
        }
    }

    #[test]
    fn escape_and_q_quit() {
        assert_eq!(translate(key(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(translate(key(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(
            translate(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(InputEvent::Quit)
        );
        assert_eq!(translate(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn enter_is_an_off_grid_click() {
        let geometry = terminal_layout(80, 24).geometry(3);

        let Some(InputEvent::Click { x, y }) = translate(key(KeyCode::Enter)) else {
            panic!("expected a click");
        };

        assert_eq!(geometry.cell_at(x, y), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert_eq!(translate(Event::Key(release)), None);
    }
}

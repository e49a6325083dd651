use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Color, Print, PrintStyledContent, Stylize, style};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use mnemogrid_core::*;
use std::io::{self, Write};

/// Rows above the board, taken by the HUD and the hint line.
pub const HUD_ROWS: u16 = 3;

const BELL: &str = "\x07";

/// Layout of a terminal `columns` wide and `rows` high, measured in character cells.
pub fn terminal_layout(columns: u16, rows: u16) -> ScreenLayout {
    ScreenLayout {
        width: Pixel::from(columns),
        height: Pixel::from(rows),
        hud_height: Pixel::from(HUD_ROWS),
        gap: 1,
    }
}

fn position(value: Pixel) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

/// Raw mode, alternate screen and mouse capture, restored when dropped.
#[derive(Debug)]
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let restored = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen)
            .and_then(|_| terminal::disable_raw_mode());
        if let Err(err) = restored {
            log::warn!("Could not restore the terminal: {}", err);
        }
    }
}

/// Draws every tile as a block of characters placed by the board geometry, so mouse clicks land on what is shown.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    layout: ScreenLayout,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, layout: ScreenLayout) -> Self {
        Self { out, layout }
    }

    fn finish(&mut self, drawn: io::Result<()>) {
        if let Err(err) = drawn.and_then(|_| self.out.flush()) {
            log::warn!("Could not draw: {}", err);
        }
    }

    fn queue_board(&mut self, board: &Board) -> io::Result<()> {
        let geometry = self.layout.geometry(board.size());
        queue!(self.out, Clear(ClearType::All))?;
        if geometry.cell_size < 1 {
            log::warn!("A {0}x{0} board does not fit the terminal", board.size());
            return queue!(
                self.out,
                MoveTo(0, HUD_ROWS),
                Print("Terminal too small for this board, enlarge it and restart")
            );
        }

        let width = usize::try_from(geometry.cell_size).unwrap_or_default();
        for (coords, cell) in board.iter() {
            let (x, y) = geometry.cell_origin(coords);
            let tile = cell_glyph(cell).to_string().repeat(width);
            for line in 0..geometry.cell_size {
                queue!(
                    self.out,
                    MoveTo(position(x), position(y + line)),
                    PrintStyledContent(style(&tile).with(cell_color(cell)))
                )?;
            }
        }
        Ok(())
    }

    fn queue_summary(&mut self, lines: &[String]) -> io::Result<()> {
        let width = lines.iter().map(String::len).max().unwrap_or(0);
        let left = (self.layout.width - width as Pixel).div_euclid(2);
        let top = (self.layout.height - lines.len() as Pixel).div_euclid(2);
        for (line, text) in (0..).zip(lines) {
            queue!(self.out, MoveTo(position(left), position(top + line)), Print(text))?;
        }
        Ok(())
    }
}

pub fn cell_glyph(cell: &Cell) -> char {
    match (cell.face_up, cell.outcome) {
        (false, _) | (true, CellOutcome::None) => '#',
        (true, CellOutcome::Correct) => 'O',
        (true, CellOutcome::Incorrect) => 'X',
    }
}

fn cell_color(cell: &Cell) -> Color {
    match (cell.face_up, cell.outcome) {
        (false, _) => Color::DarkGrey,
        (true, CellOutcome::None) => Color::White,
        (true, CellOutcome::Correct) => Color::Green,
        (true, CellOutcome::Incorrect) => Color::Red,
    }
}

/// Boxed end-of-game summary, one string per screen line.
pub fn summary_box(level: Points, score: Points, high_score: Points) -> Vec<String> {
    let lines = [
        format!("Level {}", level),
        format!("Your Score: {}", score),
        format!("High Score: {}", high_score),
    ];
    let width = lines.iter().map(String::len).max().unwrap_or(0) + 4;
    let border = format!("+{}+", "-".repeat(width));

    let mut text = vec![border.clone()];
    text.extend(lines.iter().map(|line| format!("|{:^width$}|", line, width = width)));
    text.push(border);
    text.push(String::from("Click or press Enter for a new game"));
    text
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_board(&mut self, board: &Board) {
        let drawn = self.queue_board(board);
        self.finish(drawn);
    }

    fn draw_hud(&mut self, level: Points, score: Points, high_score: Points, lives: Points) {
        let drawn = queue!(
            self.out,
            MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            Print(format!(
                "Level: {}   Score: {}   High Score: {}   Lives: {}",
                level, score, high_score, lives
            )),
            MoveTo(0, 1),
            Clear(ClearType::CurrentLine),
            Print("Click the tiles you saw, Esc or q to quit")
        );
        self.finish(drawn);
    }

    fn draw_end_of_round_summary(&mut self, level: Points, score: Points, high_score: Points) {
        let drawn = self.queue_summary(&summary_box(level, score, high_score));
        self.finish(drawn);
    }
}

/// Rings the terminal bell for every sound effect.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self, times: usize) {
        let rung = queue!(self.out, Print(BELL.repeat(times))).and_then(|_| self.out.flush());
        if let Err(err) = rung {
            log::warn!("Could not ring the bell: {}", err);
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play_correct(&mut self) {
        self.ring(1);
    }

    fn play_incorrect(&mut self) {
        self.ring(1);
    }

    fn play_level_up(&mut self) {
        self.ring(2);
    }
}
